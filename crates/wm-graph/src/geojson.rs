//! GeoJSON feature extraction — enabled with the `geojson` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! let polylines = wm_graph::geojson::polylines_from_str(&document)?;
//! graph.build(&polylines, &Haversine);
//! ```
//!
//! # What is extracted
//!
//! `LineString` and `MultiLineString` geometries, wherever they appear
//! (bare geometry, feature, feature collection, nested geometry
//! collections).  Everything else — points, polygons, properties — is
//! ignored.  Positions with fewer than two components are dropped, and
//! lines left with fewer than two positions are dropped with them.

use geojson::{Feature, GeoJson, Geometry, Value};

use wm_core::Coord;

use crate::{GraphError, GraphResult};

/// Parse a GeoJSON document and extract its polylines.
///
/// # Errors
///
/// [`GraphError::GeoJson`] when the document is not valid GeoJSON.
pub fn polylines_from_str(document: &str) -> GraphResult<Vec<Vec<Coord>>> {
    let gj = document
        .parse::<GeoJson>()
        .map_err(|e| GraphError::GeoJson(e.to_string()))?;
    Ok(polylines_from_geojson(&gj))
}

/// Extract polylines from an already-parsed GeoJSON value.
pub fn polylines_from_geojson(gj: &GeoJson) -> Vec<Vec<Coord>> {
    let mut out = Vec::new();
    match gj {
        GeoJson::FeatureCollection(fc) => {
            for feature in &fc.features {
                collect_feature(feature, &mut out);
            }
        }
        GeoJson::Feature(feature) => collect_feature(feature, &mut out),
        GeoJson::Geometry(geometry) => collect_geometry(geometry, &mut out),
    }
    out
}

fn collect_feature(feature: &Feature, out: &mut Vec<Vec<Coord>>) {
    if let Some(geometry) = &feature.geometry {
        collect_geometry(geometry, out);
    }
}

fn collect_geometry(geometry: &Geometry, out: &mut Vec<Vec<Coord>>) {
    match &geometry.value {
        Value::LineString(line) => push_line(line, out),
        Value::MultiLineString(lines) => {
            for line in lines {
                push_line(line, out);
            }
        }
        Value::GeometryCollection(inner) => {
            for geometry in inner {
                collect_geometry(geometry, out);
            }
        }
        _ => {}
    }
}

fn push_line(positions: &[Vec<f64>], out: &mut Vec<Vec<Coord>>) {
    let line: Vec<Coord> = positions
        .iter()
        .filter(|p| p.len() >= 2)
        .map(|p| Coord::new(p[0], p[1]))
        .collect();
    if line.len() >= 2 {
        out.push(line);
    }
}
