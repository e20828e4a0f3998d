//! Geometry validity reports for [GDAL/OGR](https://gdal.org/) vector datasets.
//!
//! For every dataset the first layer is read, each feature geometry is checked
//! with OGR's validity predicate and the distinct geometry type names plus the
//! valid / invalid counts are reported.
//!
//! ## Use
//!
//! ```no_run
//! use ogr_validity::render::write_text;
//! use ogr_validity::report;
//!
//! let report = report("UKCS_Licensed_Blocks_WGS84.shp")?;
//! write_text(&mut std::io::stdout(), &report, false)?;
//! # Ok::<(), ogr_validity::ValidityError>(())
//! ```

pub mod config;
pub mod dataset;
pub mod errors;
pub mod render;
pub mod report;

pub use dataset::SourceOptions;
pub use errors::{Result, ValidityError};
pub use render::OutputFormat;
pub use report::{report, Tally, ValidityReport};

#[cfg(test)]
mod test_utils;
