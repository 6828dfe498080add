//! `wm-graph` — coordinate interning and the CSR route network.
//!
//! Polylines that share a bit-identical coordinate join into an
//! undirected weighted graph.  This crate owns the mapping from
//! coordinates to dense node indices and the Compressed Sparse Row
//! adjacency the search driver iterates.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`interner`] | `CoordInterner` — bit-exact coordinate → `NodeIdx`   |
//! | [`graph`]    | `RouteGraph` — CSR + sparse overlay, build/expand    |
//! | [`stats`]    | Component count, edge-length summary                 |
//! | [`geojson`]  | LineString extraction (feature = `"geojson"` only)   |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `geojson` | Enables GeoJSON loading via the `geojson` crate.        |

pub mod error;
pub mod graph;
pub mod interner;
pub mod stats;

#[cfg(feature = "geojson")]
pub mod geojson;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GraphError, GraphResult};
pub use graph::RouteGraph;
pub use interner::CoordInterner;
pub use stats::{component_count, edge_length_summary, EdgeLengthSummary};
