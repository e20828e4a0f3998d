use std::ffi::c_void;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use gdal::vector::{Geometry, LayerAccess, LayerOptions, OGRwkbGeometryType};
use gdal::DriverManager;

pub const SQUARE: &str = "POLYGON ((0 0, 0 10, 10 10, 10 0, 0 0))";
pub const BOWTIE: &str = "POLYGON ((0 0, 10 10, 0 10, 10 0, 0 0))";
pub const TWO_SQUARES: &str =
    "MULTIPOLYGON (((0 0, 0 1, 1 1, 1 0, 0 0)), ((5 5, 5 6, 6 6, 6 5, 5 5)))";
/// Written to a shapefile as a null shape record.
pub const NULL_SHAPE: &str = "POLYGON EMPTY";

/// A temporary directory holding a single shapefile, removed on `drop`.
pub struct TempFixture {
    _temp_dir: tempfile::TempDir,
    temp_path: PathBuf,
}

impl TempFixture {
    /// Creates a temporary directory and path to a non-existent file with given `name`.
    pub fn empty(name: &str) -> Self {
        let _temp_dir = tempfile::tempdir().unwrap();
        let temp_path = _temp_dir.path().join(name);
        Self {
            _temp_dir,
            temp_path,
        }
    }

    /// Writes a polygon shapefile called `name` whose features have the given WKT geometries,
    /// in order.
    pub fn polygons(name: &str, wkts: &[&str]) -> Self {
        let fixture = Self::empty(name);
        write_shapefile(fixture.path(), OGRwkbGeometryType::wkbPolygon, wkts);
        fixture
    }

    /// Writes a GeoPackage called `name` without any layer.
    pub fn empty_geopackage(name: &str) -> Self {
        let fixture = Self::empty(name);
        let driver = DriverManager::get_driver_by_name("GPKG").unwrap();
        driver.create_vector_only(fixture.path()).unwrap();
        fixture
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }
}

impl AsRef<Path> for TempFixture {
    fn as_ref(&self) -> &Path {
        self.path()
    }
}

/// Creates a shapefile at `path` with one feature per WKT string.
pub fn write_shapefile(path: &Path, ty: OGRwkbGeometryType::Type, wkts: &[&str]) {
    let driver = DriverManager::get_driver_by_name("ESRI Shapefile").unwrap();
    let mut dataset = driver.create_vector_only(path).unwrap();
    let stem = path.file_stem().unwrap().to_string_lossy().into_owned();
    let mut layer = dataset
        .create_layer(LayerOptions {
            name: &stem,
            ty,
            ..Default::default()
        })
        .unwrap();
    for wkt in wkts {
        layer
            .create_feature(Geometry::from_wkt(wkt).unwrap())
            .unwrap();
    }
}

/// Scoped value for temporarily suppressing thread-local GDAL log messages.
///
/// Useful for tests that expect GDAL errors and want to keep the output log clean
/// of distracting yet expected error messages.
pub(crate) struct SuppressGDALErrorLog {
    // Make !Sync and !Send, and force use of `new`.
    _private: PhantomData<*mut c_void>,
}

impl SuppressGDALErrorLog {
    pub(crate) fn new() -> Self {
        unsafe { gdal_sys::CPLPushErrorHandler(Some(gdal_sys::CPLQuietErrorHandler)) };
        SuppressGDALErrorLog {
            _private: PhantomData,
        }
    }
}

impl Drop for SuppressGDALErrorLog {
    fn drop(&mut self) {
        unsafe { gdal_sys::CPLPopErrorHandler() };
    }
}
