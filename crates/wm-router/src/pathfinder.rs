//! The router facade and its bidirectional Dijkstra driver.
//!
//! # Algorithm
//!
//! Two Dijkstra frontiers, one from each endpoint, each keyed by plain
//! `g` (no heuristic — the stopping rule below is only sound for zero
//! heuristic).  Exactly one side expands per iteration, whichever has
//! the smaller queue.  Whenever a node is known to both sides, the sum
//! `g_forward + g_reverse` becomes a candidate; the best candidate is
//! final once `min_key(forward) + min_key(reverse)` can no longer beat
//! it, because with non-negative weights neither frontier's keys ever
//! decrease.
//!
//! The path is stitched from the two search trees at the meeting node:
//! predecessors back to the start, successors on to the end.

use wm_core::{Coord, DistanceMeasure, Haversine, NodeIdx};
use wm_graph::RouteGraph;
use wm_heap::{MinQueue, QuaternaryHeap};

use crate::scratch::Scratch;
use crate::{RouteError, RouteResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the polyline from start to end and
/// its total cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Coordinates in travel order.  The first equals the queried start,
    /// the last the queried end; always at least two entries.
    pub coords: Vec<Coord>,
    /// Sum of traversed edge weights, in the units of the configured
    /// distance measure (kilometres for the default).
    pub cost: f64,
}

impl Route {
    /// Number of edges traversed.
    pub fn segment_count(&self) -> usize {
        self.coords.len() - 1
    }
}

// ── Pathfinder ────────────────────────────────────────────────────────────────

/// Point-to-point shortest-path engine over a polyline network.
///
/// Owns the graph, the per-query scratch, and two queues reused across
/// queries.  The two type parameters are the engine's configuration:
/// the edge-weight measure and the queue implementation, defaulting to
/// great-circle kilometres and the 4-ary heap.
pub struct Pathfinder<D = Haversine, Q = QuaternaryHeap<NodeIdx>>
where
    D: DistanceMeasure,
    Q: MinQueue<NodeIdx>,
{
    pub(crate) graph: RouteGraph,
    pub(crate) distance: D,
    pub(crate) scratch: Scratch,
    pub(crate) open_forward: Q,
    pub(crate) open_reverse: Q,
}

impl Pathfinder {
    /// Engine with the default configuration.
    pub fn new() -> Self {
        Self::with_distance(Haversine)
    }
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, Q> Pathfinder<D, Q>
where
    D: DistanceMeasure,
    Q: MinQueue<NodeIdx>,
{
    /// Engine with a custom edge-weight measure.  Pick the queue by
    /// annotating the binding:
    ///
    /// ```ignore
    /// let mut finder: Pathfinder<Haversine, FibonacciHeap<_>> =
    ///     Pathfinder::with_distance(Haversine);
    /// ```
    pub fn with_distance(distance: D) -> Self {
        Self {
            graph: RouteGraph::new(),
            distance,
            scratch: Scratch::new(),
            open_forward: Q::new(),
            open_reverse: Q::new(),
        }
    }

    /// Read access to the underlying network (for stats and assertions).
    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    // ── Graph lifecycle ───────────────────────────────────────────────────

    /// (Re)build the network from polylines.  See
    /// [`RouteGraph::build`] for the input conventions.
    pub fn build_route_graph(&mut self, network: &[Vec<Coord>]) {
        self.graph.build(network, &self.distance);
    }

    /// Merge additional polylines into the built network.
    ///
    /// # Errors
    ///
    /// [`RouteError::NotBuilt`] before the first
    /// [`build_route_graph`](Self::build_route_graph).
    pub fn expand_route_graph(&mut self, network: &[Vec<Coord>]) -> RouteResult<()> {
        if !self.graph.is_built() {
            return Err(RouteError::NotBuilt);
        }
        self.graph.expand(network, &self.distance)?;
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Shortest route between two network coordinates.
    ///
    /// Both endpoints are interned: a coordinate the network has never
    /// seen becomes an isolated node, so the query cleanly reports no
    /// route rather than failing.  `Ok(None)` means no route exists (or
    /// start equals end); `Some` routes start and end exactly at the
    /// queried coordinates.
    ///
    /// # Errors
    ///
    /// [`RouteError::NotBuilt`] before the first build.
    pub fn get_route(&mut self, start: Coord, end: Coord) -> RouteResult<Option<Route>> {
        if !self.graph.is_built() {
            return Err(RouteError::NotBuilt);
        }
        let s = self.graph.intern(start);
        let e = self.graph.intern(end);
        if s == e {
            return Ok(None);
        }

        self.scratch.reset(self.graph.node_count());
        self.open_forward.clear();
        self.open_reverse.clear();

        let Some((meeting, cost)) = bidirectional_search(
            &self.graph,
            &mut self.scratch,
            &mut self.open_forward,
            &mut self.open_reverse,
            s,
            e,
        ) else {
            log::trace!("no route {start} -> {end}");
            return Ok(None);
        };

        // A broken tree cannot produce a valid polyline; report no
        // route rather than a partial one.
        let Some(coords) = stitch_route(&self.graph, &self.scratch, s, e, meeting) else {
            return Ok(None);
        };
        log::trace!(
            "route {start} -> {end}: {} coords, cost {cost:.6}",
            coords.len()
        );
        Ok(Some(Route { coords, cost }))
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

/// Run the two frontiers to completion.  Returns the meeting node and
/// the optimal cost, or `None` when the searches never touch.
fn bidirectional_search<Q: MinQueue<NodeIdx>>(
    graph: &RouteGraph,
    scratch: &mut Scratch,
    open_forward: &mut Q,
    open_reverse: &mut Q,
    start: NodeIdx,
    end: NodeIdx,
) -> Option<(NodeIdx, f64)> {
    scratch.g_forward[start.index()] = 0.0;
    scratch.g_reverse[end.index()] = 0.0;
    open_forward.insert(0.0, start);
    open_reverse.insert(0.0, end);

    let mut best = f64::INFINITY;
    let mut meeting = NodeIdx::INVALID;

    while !open_forward.is_empty() && !open_reverse.is_empty() {
        // The candidate is optimal once neither frontier can undercut it.
        if meeting != NodeIdx::INVALID
            && open_forward.peek_min_key() + open_reverse.peek_min_key() >= best
        {
            break;
        }

        // One side per iteration keeps the stopping rule sound; the
        // smaller queue balances the frontiers.  Ties go forward.
        let forward = open_forward.len() <= open_reverse.len();
        let (open, g, g_other, seen, seen_other, tree) = if forward {
            (
                &mut *open_forward,
                &mut scratch.g_forward,
                &scratch.g_reverse,
                &mut scratch.visited_forward,
                &scratch.visited_reverse,
                &mut scratch.prev_forward,
            )
        } else {
            (
                &mut *open_reverse,
                &mut scratch.g_reverse,
                &scratch.g_forward,
                &mut scratch.visited_reverse,
                &scratch.visited_forward,
                &mut scratch.next_reverse,
            )
        };

        let Some(u) = open.extract_min() else { break };
        // Skip stale queue entries.
        if seen[u.index()] != 0 {
            continue;
        }
        seen[u.index()] = 1;

        // Settled by both sides: a route through u is now exact.
        if seen_other[u.index()] != 0 {
            let total = g[u.index()] + g_other[u.index()];
            if total < best {
                best = total;
                meeting = u;
            }
        }

        let g_u = g[u.index()];
        for (v, w) in graph.neighbors(u) {
            let tentative = g_u + w;
            // Strict improvement only; self-loops and zero-weight
            // edges never re-relax.
            if tentative < g[v.index()] {
                g[v.index()] = tentative;
                tree[v.index()] = u;
                let other = g_other[v.index()];
                if other < f64::INFINITY {
                    let total = tentative + other;
                    if total < best {
                        best = total;
                        meeting = v;
                    }
                }
                open.insert(tentative, v);
            }
        }
    }

    (meeting != NodeIdx::INVALID).then_some((meeting, best))
}

/// Stitch the two search trees into one coordinate sequence:
/// `start → meeting` from the forward predecessors (collected backward,
/// then reversed), `meeting → end` from the reverse successors.
fn stitch_route(
    graph: &RouteGraph,
    scratch: &Scratch,
    start: NodeIdx,
    end: NodeIdx,
    meeting: NodeIdx,
) -> Option<Vec<Coord>> {
    let mut coords = Vec::new();

    let mut cur = meeting;
    loop {
        coords.push(graph.coord(cur));
        if cur == start {
            break;
        }
        cur = scratch.prev_forward[cur.index()];
        if cur == NodeIdx::INVALID {
            return None;
        }
    }
    coords.reverse();

    let mut cur = meeting;
    while cur != end {
        cur = scratch.next_reverse[cur.index()];
        if cur == NodeIdx::INVALID {
            return None;
        }
        coords.push(graph.coord(cur));
    }

    Some(coords)
}
