//! Distance measures — the pluggable edge-weight collaborator.
//!
//! # Contract
//!
//! A measure must be non-negative and symmetric.  When the same measure
//! supplies both edge weights and the A* heuristic, it must also satisfy
//! the triangle inequality (both built-in measures do; a custom closure
//! is the caller's responsibility).
//!
//! # Units
//!
//! The built-in measures return **kilometres**.  Route costs are sums of
//! edge weights, so they inherit whatever unit the measure uses.

use crate::Coord;

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Edge-weight function over coordinates.
///
/// Implemented by the built-in [`Haversine`] and [`PlanarApprox`]
/// measures and by any `Fn(Coord, Coord) -> f64` closure, so tests can
/// pass plain Euclidean distance for deterministic expectations.
pub trait DistanceMeasure {
    fn distance(&self, a: Coord, b: Coord) -> f64;
}

impl<F> DistanceMeasure for F
where
    F: Fn(Coord, Coord) -> f64,
{
    #[inline]
    fn distance(&self, a: Coord, b: Coord) -> f64 {
        self(a, b)
    }
}

// ── Haversine ─────────────────────────────────────────────────────────────────

/// Great-circle distance in kilometres.  The default edge weight.
#[derive(Copy, Clone, Debug, Default)]
pub struct Haversine;

impl DistanceMeasure for Haversine {
    fn distance(&self, a: Coord, b: Coord) -> f64 {
        let d_lat = (b.lat - a.lat).to_radians();
        let d_lng = (b.lng - a.lng).to_radians();

        let lat1 = a.lat.to_radians();
        let lat2 = b.lat.to_radians();

        let h = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
        EARTH_RADIUS_KM * c
    }
}

// ── PlanarApprox ──────────────────────────────────────────────────────────────

/// Equirectangular approximation in kilometres.
///
/// One `cos` instead of several trig calls per edge; error stays below
/// ~0.5 % for segments under a few tens of kilometres, which covers
/// street-scale networks.  Not suitable near the poles.
#[derive(Copy, Clone, Debug, Default)]
pub struct PlanarApprox;

impl DistanceMeasure for PlanarApprox {
    fn distance(&self, a: Coord, b: Coord) -> f64 {
        let mean_lat = ((a.lat + b.lat) * 0.5).to_radians();
        let x = (b.lng - a.lng).to_radians() * mean_lat.cos();
        let y = (b.lat - a.lat).to_radians();
        EARTH_RADIUS_KM * (x * x + y * y).sqrt()
    }
}
