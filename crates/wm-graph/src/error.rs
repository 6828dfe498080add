//! Graph-subsystem error type.

use thiserror::Error;

/// Errors produced by `wm-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// `expand` was called before any `build`.
    #[error("route graph has not been built")]
    NotBuilt,

    #[cfg(feature = "geojson")]
    #[error("GeoJSON parse error: {0}")]
    GeoJson(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
