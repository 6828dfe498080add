//! `wm-router` — the shortest-path engine over a waymesh network.
//!
//! A [`Pathfinder`] owns a [`wm_graph::RouteGraph`], per-query scratch
//! buffers, and two reusable priority queues, and answers point-to-point
//! queries with bidirectional Dijkstra.  It is parameterized over the
//! edge-weight measure and the queue implementation:
//!
//! ```
//! use wm_core::{Coord, Haversine};
//! use wm_heap::PairingHeap;
//! use wm_router::Pathfinder;
//!
//! let mut finder: Pathfinder<Haversine, PairingHeap<_>> =
//!     Pathfinder::with_distance(Haversine);
//! finder.build_route_graph(&[vec![
//!     Coord::new(-88.043, 30.694),
//!     Coord::new(-88.032, 30.700),
//! ]]);
//! let route = finder
//!     .get_route(Coord::new(-88.043, 30.694), Coord::new(-88.032, 30.700))
//!     .unwrap();
//! assert!(route.is_some());
//! ```
//!
//! The defaults (`Pathfinder::new()`) are great-circle kilometres and
//! the 4-ary heap.
//!
//! # Crate layout
//!
//! | Module         | Contents                                          |
//! |----------------|---------------------------------------------------|
//! | [`pathfinder`] | `Pathfinder`, `Route`, the bidirectional driver   |
//! | [`astar`]      | Single-ended A* variant (`get_route_astar`)       |
//! | `scratch`      | Reusable per-query search buffers (private)       |
//! | [`error`]      | `RouteError`, `RouteResult<T>`                    |
//!
//! # Thread model
//!
//! A `Pathfinder` is single-threaded mutable state: queries reuse its
//! scratch and queues, so one instance must not serve concurrent
//! queries.  Independent instances are fully isolated.

pub mod astar;
pub mod error;
pub mod pathfinder;
mod scratch;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RouteError, RouteResult};
pub use pathfinder::{Pathfinder, Route};
