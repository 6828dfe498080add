//! Route network — CSR adjacency over interned coordinates.
//!
//! # Data layout
//!
//! Three aligned arrays in **Compressed Sparse Row** form.  For a node
//! `u`, its adjacency occupies the slice:
//!
//! ```text
//! neighbors[ offsets[u] .. offsets[u + 1] ]      (weights aligned)
//! ```
//!
//! Every undirected segment is stored twice, once per direction, so a
//! node's whole neighborhood is one contiguous scan.  Parallel edges and
//! zero-weight self-edges are kept as-is; the search's strict relaxation
//! guard makes them harmless.
//!
//! # Sparse overlay
//!
//! Nodes interned after the last (re)build get an empty CSR slice plus a
//! slot in the overlay, and `expand` stages new segments there before
//! folding everything into a fresh CSR.  Between public calls the
//! overlay is empty; readers still consult it so that a node is never
//! missing edges mid-`expand`.

use wm_core::{Coord, DistanceMeasure, NodeIdx};

use crate::interner::CoordInterner;
use crate::{GraphError, GraphResult};

/// Undirected weighted network over interned coordinates.
///
/// Construct empty with [`new`](Self::new), then populate through
/// [`build`](Self::build) / [`expand`](Self::expand).  The CSR arrays
/// are immutable between those calls; queries only read.
pub struct RouteGraph {
    interner: CoordInterner,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// Row pointer, length `node_count() + 1`, `offsets[0] == 0`.
    offsets: Vec<u32>,
    neighbors: Vec<NodeIdx>,
    weights: Vec<f64>,

    /// Per-node out-of-CSR edges; see module docs.
    overlay: Vec<Vec<(NodeIdx, f64)>>,

    built: bool,
}

impl Default for RouteGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteGraph {
    pub fn new() -> Self {
        Self {
            interner: CoordInterner::new(),
            offsets: vec![0],
            neighbors: Vec::new(),
            weights: Vec::new(),
            overlay: Vec::new(),
            built: false,
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.interner.len()
    }

    /// Directed adjacency entries (twice the undirected segment count).
    pub fn directed_edge_count(&self) -> usize {
        let csr = self.offsets.last().copied().unwrap_or(0) as usize;
        let staged: usize = self.overlay.iter().map(Vec::len).sum();
        csr + staged
    }

    /// `true` once [`build`](Self::build) has run.
    pub fn is_built(&self) -> bool {
        self.built
    }

    // ── Coordinate access ─────────────────────────────────────────────────

    /// Intern a coordinate, giving it an empty adjacency when new.
    ///
    /// New nodes extend the row pointer by repeating its last value and
    /// get an overlay slot, so they are immediately addressable by the
    /// search (as isolated nodes) without a rebuild.
    pub fn intern(&mut self, c: Coord) -> NodeIdx {
        let known = self.interner.len();
        let idx = self.interner.intern(c);
        if idx.index() >= known {
            let end = self.offsets.last().copied().unwrap_or(0);
            self.offsets.push(end);
            self.overlay.push(Vec::new());
        }
        idx
    }

    /// Index of a coordinate already in the network, if any.
    #[inline]
    pub fn lookup(&self, c: Coord) -> Option<NodeIdx> {
        self.interner.lookup(c)
    }

    /// Coordinate of an interned node.
    #[inline]
    pub fn coord(&self, idx: NodeIdx) -> Coord {
        self.interner.coord(idx)
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Iterate `(neighbor, weight)` pairs of `u`: the contiguous CSR
    /// slice first, then any overlay entries.  No allocation.
    #[inline]
    pub fn neighbors(&self, u: NodeIdx) -> impl Iterator<Item = (NodeIdx, f64)> + '_ {
        let (start, end) = self.csr_range(u);
        let staged: &[(NodeIdx, f64)] = match self.overlay.get(u.index()) {
            Some(extra) => extra,
            None => &[],
        };
        self.neighbors[start..end]
            .iter()
            .copied()
            .zip(self.weights[start..end].iter().copied())
            .chain(staged.iter().copied())
    }

    /// Number of CSR entries for `u` (excludes staged overlay edges).
    #[inline]
    pub fn csr_degree(&self, u: NodeIdx) -> usize {
        let (start, end) = self.csr_range(u);
        end - start
    }

    #[inline]
    fn csr_range(&self, u: NodeIdx) -> (usize, usize) {
        let i = u.index();
        if i + 1 >= self.offsets.len() {
            return (0, 0);
        }
        (self.offsets[i] as usize, self.offsets[i + 1] as usize)
    }

    /// The raw row pointer — exposed for structural assertions.
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Build the network from scratch.
    ///
    /// Two passes over the segments: the first interns endpoints and
    /// counts directed degrees, a prefix sum turns degrees into the row
    /// pointer, and the second pass writes each direction through a
    /// per-node cursor.  Polylines shorter than two coordinates and
    /// segments with non-finite components are skipped in both passes.
    ///
    /// Calling `build` again resets the graph; identical input yields an
    /// identical graph.
    pub fn build<D: DistanceMeasure>(&mut self, network: &[Vec<Coord>], dist: &D) {
        self.interner.clear();
        self.overlay.clear();

        // Pass 1: intern and count directed degree per endpoint.
        let mut degree: Vec<u32> = Vec::new();
        for line in network {
            for seg in line.windows(2) {
                let (a, b) = (seg[0], seg[1]);
                if !a.is_finite() || !b.is_finite() {
                    continue;
                }
                let u = self.interner.intern(a);
                let v = self.interner.intern(b);
                for idx in [u, v] {
                    if idx.index() >= degree.len() {
                        degree.resize(idx.index() + 1, 0);
                    }
                    degree[idx.index()] += 1;
                }
            }
        }
        let n = self.interner.len();

        // Row pointer by prefix sum.
        self.offsets.clear();
        self.offsets.reserve(n + 1);
        self.offsets.push(0);
        let mut total = 0u32;
        for &d in &degree {
            total += d;
            self.offsets.push(total);
        }

        self.neighbors.clear();
        self.neighbors.resize(total as usize, NodeIdx::INVALID);
        self.weights.clear();
        self.weights.resize(total as usize, 0.0);

        // Pass 2: fill both directions through per-node cursors.
        let mut cursor: Vec<u32> = self.offsets[..n].to_vec();
        for line in network {
            for seg in line.windows(2) {
                let (a, b) = (seg[0], seg[1]);
                if !a.is_finite() || !b.is_finite() {
                    continue;
                }
                let (Some(u), Some(v)) = (self.interner.lookup(a), self.interner.lookup(b))
                else {
                    continue;
                };
                let w = dist.distance(a, b);
                let cu = cursor[u.index()] as usize;
                self.neighbors[cu] = v;
                self.weights[cu] = w;
                cursor[u.index()] += 1;
                let cv = cursor[v.index()] as usize;
                self.neighbors[cv] = u;
                self.weights[cv] = w;
                cursor[v.index()] += 1;
            }
        }

        self.overlay.resize_with(n, Vec::new);
        self.built = true;
        log::debug!("built route graph: {n} nodes, {total} directed edges");
    }

    /// Merge additional polylines into the built network.
    ///
    /// New coordinates are interned (empty CSR slices), new segments are
    /// staged in the overlay for both endpoints, and the CSR is then
    /// rebuilt with existing entries first and staged entries after, per
    /// node.  Shortest-path costs afterwards equal those of a fresh
    /// `build` over the union of the inputs.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotBuilt`] if [`build`](Self::build) has never run.
    pub fn expand<D: DistanceMeasure>(
        &mut self,
        network: &[Vec<Coord>],
        dist: &D,
    ) -> GraphResult<()> {
        if !self.built {
            return Err(GraphError::NotBuilt);
        }

        let mut staged = 0usize;
        for line in network {
            for seg in line.windows(2) {
                let (a, b) = (seg[0], seg[1]);
                if !a.is_finite() || !b.is_finite() {
                    continue;
                }
                let u = self.intern(a);
                let v = self.intern(b);
                let w = dist.distance(a, b);
                self.overlay[u.index()].push((v, w));
                self.overlay[v.index()].push((u, w));
                staged += 1;
            }
        }

        self.fold_overlay_into_csr();
        log::debug!(
            "expanded route graph: +{staged} segments, now {} nodes, {} directed edges",
            self.node_count(),
            self.directed_edge_count()
        );
        Ok(())
    }

    /// Rebuild the CSR arrays merging current slices with staged overlay
    /// entries, then clear the overlay.  Existing entries keep their
    /// relative order; staged entries follow them per node.
    fn fold_overlay_into_csr(&mut self) {
        let n = self.node_count();

        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0u32);
        let mut total = 0u32;
        for u in 0..n {
            let idx = NodeIdx(u as u32);
            total += (self.csr_degree(idx) + self.overlay[u].len()) as u32;
            offsets.push(total);
        }

        let mut neighbors = vec![NodeIdx::INVALID; total as usize];
        let mut weights = vec![0.0f64; total as usize];
        for u in 0..n {
            let mut at = offsets[u] as usize;
            let (start, end) = self.csr_range(NodeIdx(u as u32));
            for i in start..end {
                neighbors[at] = self.neighbors[i];
                weights[at] = self.weights[i];
                at += 1;
            }
            for &(v, w) in &self.overlay[u] {
                neighbors[at] = v;
                weights[at] = w;
                at += 1;
            }
            self.overlay[u].clear();
        }

        self.offsets = offsets;
        self.neighbors = neighbors;
        self.weights = weights;
    }
}
