//! Strongly typed node index.
//!
//! `NodeIdx` is `Copy + Ord + Hash` so it can be used as a map key and a
//! sorted-collection element without ceremony.  The inner integer is
//! `pub` to allow direct indexing into SoA `Vec`s via `idx.0 as usize`,
//! but callers should prefer the `.index()` helper for clarity.

use std::fmt;

/// Dense index of a network node, assigned by the interner in
/// first-seen order.  Max ~4.3 billion nodes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeIdx(pub u32);

impl NodeIdx {
    /// Sentinel meaning "no valid node" — equivalent to `u32::MAX`.
    ///
    /// Plays the role a signed `-1` would in predecessor arrays.
    pub const INVALID: NodeIdx = NodeIdx(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for NodeIdx {
    /// Returns the `INVALID` sentinel so uninitialized indices are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for NodeIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIdx({})", self.0)
    }
}

impl From<NodeIdx> for usize {
    #[inline(always)]
    fn from(idx: NodeIdx) -> usize {
        idx.0 as usize
    }
}

impl TryFrom<usize> for NodeIdx {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<NodeIdx, Self::Error> {
        u32::try_from(n).map(NodeIdx)
    }
}
