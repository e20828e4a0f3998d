//! Geometry validity reporting.
//!
//! A [`ValidityReport`] is built by walking every feature of a dataset's first
//! layer and asking OGR whether its geometry is valid according to the OGC
//! simple features rules (GEOS backed).
//!
//! ```no_run
//! use ogr_validity::report;
//!
//! let report = report("UKCS_Licences_WGS84.shp")?;
//! assert_eq!(report.valid_count + report.invalid_count, report.feature_count());
//! # Ok::<(), ogr_validity::ValidityError>(())
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use gdal::vector::{Geometry, LayerAccess};
use serde::Serialize;

use crate::dataset::{first_layer, open_vector, SourceOptions};
use crate::errors::Result;

/// Running counts over a sequence of feature geometries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub geometry_types: BTreeSet<String>,
    pub valid: u64,
    pub invalid: u64,
    pub missing_geometry: u64,
    pub invalid_fids: Vec<u64>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies one feature.
    ///
    /// A feature without a geometry counts as invalid and contributes no type name.
    pub fn record(&mut self, fid: Option<u64>, geometry: Option<&Geometry>) {
        let valid = match geometry {
            Some(geometry) => {
                self.geometry_types.insert(geometry.geometry_name());
                geometry.is_valid()
            }
            None => {
                tracing::warn!(?fid, "feature has no geometry, counting it as invalid");
                self.missing_geometry += 1;
                false
            }
        };

        if valid {
            self.valid += 1;
        } else {
            self.invalid += 1;
            if let Some(fid) = fid {
                self.invalid_fids.push(fid);
            }
        }
    }

    pub fn total(&self) -> u64 {
        self.valid + self.invalid
    }
}

/// Validity summary of the first layer of one dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidityReport {
    pub path: PathBuf,
    pub layer_name: String,
    /// Distinct geometry type names, in alphabetical order.
    pub geometry_types: BTreeSet<String>,
    pub valid_count: u64,
    pub invalid_count: u64,
    /// Features without any geometry. Already included in `invalid_count`.
    pub missing_geometry_count: u64,
    /// FIDs of the invalid features, in layer order.
    pub invalid_fids: Vec<u64>,
}

impl ValidityReport {
    /// Opens `path`, walks every feature of its first layer in the layer's
    /// native order and classifies each geometry.
    pub fn collect<P: AsRef<Path>>(path: P, options: &SourceOptions) -> Result<Self> {
        let path = path.as_ref();
        let dataset = open_vector(path, options)?;
        let mut layer = first_layer(&dataset, path)?;
        let layer_name = layer.name();

        let mut tally = Tally::new();
        for feature in layer.features() {
            tally.record(feature.fid(), feature.geometry());
        }

        tracing::info!(
            path = %path.display(),
            layer = %layer_name,
            valid = tally.valid,
            invalid = tally.invalid,
            "validated layer"
        );
        Ok(Self::from_tally(path, layer_name, tally))
    }

    pub fn from_tally<P: Into<PathBuf>>(path: P, layer_name: String, tally: Tally) -> Self {
        ValidityReport {
            path: path.into(),
            layer_name,
            geometry_types: tally.geometry_types,
            valid_count: tally.valid,
            invalid_count: tally.invalid,
            missing_geometry_count: tally.missing_geometry,
            invalid_fids: tally.invalid_fids,
        }
    }

    pub fn feature_count(&self) -> u64 {
        self.valid_count + self.invalid_count
    }
}

/// Builds the [`ValidityReport`] for `path` with default [`SourceOptions`].
pub fn report<P: AsRef<Path>>(path: P) -> Result<ValidityReport> {
    ValidityReport::collect(path, &SourceOptions::default())
}
