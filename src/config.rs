//! GDAL runtime configuration.
//!
//! GDAL config options (the `--config KEY VALUE` switch of the GDAL command line
//! utilities) are applied before any dataset is opened, and GDAL's own error
//! channel is forwarded into `tracing` so diagnostics never interleave with
//! the reports on standard output.

use gdal::config::{set_config_option, set_error_handler};
use gdal::errors::CplErrType;
use gdal::version::VersionInfo;

use crate::errors::{Result, ValidityError};

/// Splits a `KEY=VALUE` pair at the first `=`.
pub fn parse_key_value(s: &str) -> Result<(String, String)> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(ValidityError::InvalidOption(s.to_string())),
    }
}

/// Sets each `(key, value)` as a process wide GDAL configuration option.
pub fn apply_config_options(options: &[(String, String)]) -> Result<()> {
    for (key, value) in options {
        tracing::debug!(%key, %value, "setting GDAL config option");
        set_config_option(key, value)?;
    }
    Ok(())
}

/// Routes GDAL error messages to the `tracing` subscriber.
pub fn install_error_handler() {
    set_error_handler(|class, number, msg| match class {
        CplErrType::None => tracing::trace!(target: "gdal", number, "{msg}"),
        CplErrType::Debug => tracing::debug!(target: "gdal", number, "{msg}"),
        CplErrType::Warning => tracing::warn!(target: "gdal", number, "{msg}"),
        CplErrType::Failure | CplErrType::Fatal => {
            tracing::error!(target: "gdal", number, "{msg}")
        }
    });
}

/// Whether GDAL was built with GEOS, which OGR needs for validity checks.
///
/// Without it every geometry is reported as invalid.
pub fn geos_available() -> bool {
    VersionInfo::has_geos()
}
