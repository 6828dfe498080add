//! Reusable per-query search buffers.
//!
//! Six flat arrays sized to the node count, owned by the router and
//! reused across queries: allocation happens only when the graph grows.
//! Only the first `n` entries are reset per query, so the reset cost
//! tracks the live graph rather than historical capacity.

use wm_core::NodeIdx;

pub(crate) struct Scratch {
    /// Best known cost from the start, `+∞` until relaxed.
    pub g_forward: Vec<f64>,
    /// Best known cost to the end, `+∞` until relaxed.
    pub g_reverse: Vec<f64>,
    /// Forward-search tree: predecessor toward the start.
    pub prev_forward: Vec<NodeIdx>,
    /// Reverse-search tree: successor toward the end.
    pub next_reverse: Vec<NodeIdx>,
    /// Non-zero once settled by the forward search.
    pub visited_forward: Vec<u8>,
    /// Non-zero once settled by the reverse search.
    pub visited_reverse: Vec<u8>,
}

impl Scratch {
    pub fn new() -> Self {
        Self {
            g_forward: Vec::new(),
            g_reverse: Vec::new(),
            prev_forward: Vec::new(),
            next_reverse: Vec::new(),
            visited_forward: Vec::new(),
            visited_reverse: Vec::new(),
        }
    }

    /// Grow capacity to at least `n` nodes (geometrically, to amortize
    /// repeated expands), then restore the first `n` entries of every
    /// array to their sentinel values.
    pub fn reset(&mut self, n: usize) {
        if self.g_forward.len() < n {
            let cap = n.max(self.g_forward.len() * 2);
            self.g_forward.resize(cap, f64::INFINITY);
            self.g_reverse.resize(cap, f64::INFINITY);
            self.prev_forward.resize(cap, NodeIdx::INVALID);
            self.next_reverse.resize(cap, NodeIdx::INVALID);
            self.visited_forward.resize(cap, 0);
            self.visited_reverse.resize(cap, 0);
        }
        self.g_forward[..n].fill(f64::INFINITY);
        self.g_reverse[..n].fill(f64::INFINITY);
        self.prev_forward[..n].fill(NodeIdx::INVALID);
        self.next_reverse[..n].fill(NodeIdx::INVALID);
        self.visited_forward[..n].fill(0);
        self.visited_reverse[..n].fill(0);
    }
}
