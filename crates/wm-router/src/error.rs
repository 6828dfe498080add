//! Router error type.
//!
//! "No route" is not an error — queries return `Ok(None)` for it.  The
//! only failure the engine surfaces is using a router whose graph was
//! never built.

use thiserror::Error;

use wm_graph::GraphError;

/// Errors produced by `wm-router`.
#[derive(Debug, Error)]
pub enum RouteError {
    /// `get_route` or `expand_route_graph` called before any
    /// `build_route_graph`.
    #[error("route graph has not been built")]
    NotBuilt,

    /// Errors bubbling up from the graph layer.
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type RouteResult<T> = Result<T, RouteError>;
