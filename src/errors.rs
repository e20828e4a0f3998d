use std::path::PathBuf;

use gdal::errors::GdalError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ValidityError>;

#[derive(Debug, Error)]
pub enum ValidityError {
    #[error("failed to open dataset '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: GdalError,
    },
    #[error("dataset '{path}' has no layers")]
    NoLayers { path: PathBuf },
    #[error("failed to read layer 0 of '{path}': {source}")]
    Layer {
        path: PathBuf,
        #[source]
        source: GdalError,
    },
    #[error("invalid option '{0}', expected KEY=VALUE")]
    InvalidOption(String),
    #[error(transparent)]
    Gdal(#[from] GdalError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ValidityError {
    /// The dataset path this error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ValidityError::Open { path, .. }
            | ValidityError::NoLayers { path }
            | ValidityError::Layer { path, .. } => Some(path),
            _ => None,
        }
    }
}
