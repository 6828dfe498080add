//! Coordinate interner — bit-exact `(lng, lat)` → dense `NodeIdx`.
//!
//! Indices are assigned in first-seen order, so a rebuilt graph from the
//! same input assigns the same indices.  Keys are the raw `f64` bit
//! patterns of both components: `-0.0` and `0.0`, or two NaN payloads,
//! are different nodes.  That matches the joining rule of the network —
//! only identical coordinates connect polylines — and keeps the lookup a
//! single hash over the pair.

use std::collections::HashMap;

use wm_core::{Coord, NodeIdx};

/// Two-way mapping between coordinates and dense node indices.
#[derive(Default)]
pub struct CoordInterner {
    /// Coordinate table, indexed by `NodeIdx`.
    coords: Vec<Coord>,
    /// Bit-pattern pair → index.
    index: HashMap<(u64, u64), NodeIdx>,
}

impl CoordInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index for `c`, appending it to the coordinate table on
    /// first sight.  O(1) average.
    pub fn intern(&mut self, c: Coord) -> NodeIdx {
        let next = NodeIdx(self.coords.len() as u32);
        let idx = *self.index.entry(c.bits()).or_insert(next);
        if idx == next {
            self.coords.push(c);
        }
        idx
    }

    /// Look up an existing index without interning.
    #[inline]
    pub fn lookup(&self, c: Coord) -> Option<NodeIdx> {
        self.index.get(&c.bits()).copied()
    }

    /// Coordinate of an interned node.  Indexing is direct; callers pass
    /// indices previously returned by [`intern`](Self::intern).
    #[inline]
    pub fn coord(&self, idx: NodeIdx) -> Coord {
        self.coords[idx.index()]
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Drop every interned coordinate, retaining capacity.
    pub fn clear(&mut self) {
        self.coords.clear();
        self.index.clear();
    }
}
