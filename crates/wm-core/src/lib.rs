//! `wm-core` — foundational types for the waymesh routing engine.
//!
//! This crate is a dependency of every other `wm-*` crate.  It has no
//! `wm-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`coord`]    | `Coord` — a `(lng, lat)` pair, the network currency |
//! | [`ids`]      | `NodeIdx` — dense node index with sentinel          |
//! | [`distance`] | `DistanceMeasure`, `Haversine`, `PlanarApprox`      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types. |

pub mod coord;
pub mod distance;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::Coord;
pub use distance::{DistanceMeasure, Haversine, PlanarApprox};
pub use ids::NodeIdx;
