use std::path::Path;

use gdal::vector::Layer;
use gdal::{Dataset, DatasetOptions, GdalOpenFlags};

use crate::errors::{Result, ValidityError};

/// How a vector dataset is opened.
///
/// Both lists are empty by default, meaning any vector driver may claim the
/// path and no open options are passed.
#[derive(Clone, Debug, Default)]
pub struct SourceOptions {
    /// Short driver names allowed to open the dataset, e.g. `"ESRI Shapefile"`.
    pub allowed_drivers: Vec<String>,
    /// Driver open options as `NAME=VALUE` strings, e.g. `"ENCODING=UTF-8"`.
    pub open_options: Vec<String>,
}

/// Opens the dataset at `path` read-only, considering vector drivers only.
///
/// A path that GDAL cannot open is reported as [`ValidityError::Open`]; no
/// handle is ever returned for a failed open.
pub fn open_vector<P: AsRef<Path>>(path: P, options: &SourceOptions) -> Result<Dataset> {
    let path = path.as_ref();
    let drivers: Vec<&str> = options.allowed_drivers.iter().map(String::as_str).collect();
    let open_options: Vec<&str> = options.open_options.iter().map(String::as_str).collect();

    let dataset_options = DatasetOptions {
        open_flags: GdalOpenFlags::GDAL_OF_VECTOR | GdalOpenFlags::GDAL_OF_VERBOSE_ERROR,
        allowed_drivers: (!drivers.is_empty()).then_some(drivers.as_slice()),
        open_options: (!open_options.is_empty()).then_some(open_options.as_slice()),
        ..DatasetOptions::default()
    };

    tracing::debug!(path = %path.display(), "opening vector dataset");
    Dataset::open_ex(path, dataset_options).map_err(|source| ValidityError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns the first layer (index 0) of `dataset`.
///
/// `path` is only used for error reporting.
pub fn first_layer<'a>(dataset: &'a Dataset, path: &Path) -> Result<Layer<'a>> {
    if dataset.layer_count() == 0 {
        return Err(ValidityError::NoLayers {
            path: path.to_path_buf(),
        });
    }
    dataset.layer(0).map_err(|source| ValidityError::Layer {
        path: path.to_path_buf(),
        source,
    })
}
