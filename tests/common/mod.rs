#![allow(dead_code)]

use std::path::Path;

use gdal::vector::{Geometry, LayerAccess, LayerOptions, OGRwkbGeometryType};
use gdal::DriverManager;

pub const SQUARE: &str = "POLYGON ((0 0, 0 10, 10 10, 10 0, 0 0))";
pub const BOWTIE: &str = "POLYGON ((0 0, 10 10, 0 10, 10 0, 0 0))";
pub const TWO_SQUARES: &str =
    "MULTIPOLYGON (((0 0, 0 1, 1 1, 1 0, 0 0)), ((5 5, 5 6, 6 6, 6 5, 5 5)))";
pub const SQUARE_WITH_HOLE: &str =
    "POLYGON ((0 0, 0 10, 10 10, 10 0, 0 0), (2 2, 8 2, 8 8, 2 8, 2 2))";

/// Writes a polygon shapefile at `path` with one feature per WKT string.
pub fn write_polygons(path: &Path, wkts: &[&str]) {
    let driver = DriverManager::get_driver_by_name("ESRI Shapefile").unwrap();
    let mut dataset = driver.create_vector_only(path).unwrap();
    let name = path.file_stem().unwrap().to_string_lossy().into_owned();
    let mut layer = dataset
        .create_layer(LayerOptions {
            name: &name,
            ty: OGRwkbGeometryType::wkbPolygon,
            ..Default::default()
        })
        .unwrap();
    for wkt in wkts {
        layer
            .create_feature(Geometry::from_wkt(wkt).unwrap())
            .unwrap();
    }
}

/// Writes a GeoPackage at `path` that contains no layer.
pub fn write_empty_geopackage(path: &Path) {
    let driver = DriverManager::get_driver_by_name("GPKG").unwrap();
    driver.create_vector_only(path).unwrap();
}
