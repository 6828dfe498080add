//! Geographic coordinate type.
//!
//! `Coord` uses `f64` longitude/latitude.  The network-joining semantics
//! of the engine rely on **bit-exact** coordinate equality: two polylines
//! connect if and only if they contain the identical `(lng, lat)` pair.
//! Hosts therefore feed coordinates through unmodified (no rounding, no
//! re-projection) between loading and routing.

use std::fmt;

/// A WGS-84 geographic coordinate, longitude first (GeoJSON axis order).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub lng: f64,
    pub lat: f64,
}

impl Coord {
    #[inline]
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// `true` when both components are finite.
    ///
    /// Non-finite coordinates cannot participate in the network: a NaN
    /// component would make the interner key and every derived edge
    /// weight meaningless, so builders skip segments that fail this.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }

    /// The raw bit patterns of both components, in `(lng, lat)` order.
    ///
    /// This is the identity used for interning: `-0.0` and `0.0` are
    /// distinct keys, matching the upstream convention that only
    /// identical coordinates join polylines.
    #[inline]
    pub fn bits(self) -> (u64, u64) {
        (self.lng.to_bits(), self.lat.to_bits())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lng, self.lat)
    }
}
