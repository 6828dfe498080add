//! Single-ended A* variant.
//!
//! Goal-directed alternative to the bidirectional driver: one frontier
//! keyed by `g + h`, where `h` is the configured distance from a node
//! to the end coordinate.  With edge weights produced by the same
//! measure, `h` is a consistent heuristic (straight-line never exceeds
//! any path), so the first settlement of the end node is optimal.
//!
//! Useful when the host wants the goal-directed expansion pattern;
//! costs always match [`Pathfinder::get_route`].  Callers supplying a
//! custom closure measure are responsible for its admissibility.

use wm_core::{Coord, DistanceMeasure, NodeIdx};
use wm_heap::MinQueue;

use crate::pathfinder::{Pathfinder, Route};
use crate::{RouteError, RouteResult};

impl<D, Q> Pathfinder<D, Q>
where
    D: DistanceMeasure,
    Q: MinQueue<NodeIdx>,
{
    /// Shortest route by single-ended A*.
    ///
    /// Same contract as [`get_route`](Pathfinder::get_route): endpoints
    /// are interned, `Ok(None)` for no route or equal endpoints.
    ///
    /// # Errors
    ///
    /// [`RouteError::NotBuilt`] before the first build.
    pub fn get_route_astar(&mut self, start: Coord, end: Coord) -> RouteResult<Option<Route>> {
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

        let end_coord = self.graph.coord(e);
        let g = &mut self.scratch.g_forward;
        let prev = &mut self.scratch.prev_forward;
        let seen = &mut self.scratch.visited_forward;

        g[s.index()] = 0.0;
        self.open_forward
            .insert(self.distance.distance(start, end_coord), s);

        while let Some(u) = self.open_forward.extract_min() {
            // Skip stale queue entries.
            if seen[u.index()] != 0 {
                continue;
            }
            seen[u.index()] = 1;
            if u == e {
                break;
            }

            let g_u = g[u.index()];
            for (v, w) in self.graph.neighbors(u) {
                let tentative = g_u + w;
                if tentative < g[v.index()] {
                    g[v.index()] = tentative;
                    prev[v.index()] = u;
                    let h = self.distance.distance(self.graph.coord(v), end_coord);
                    self.open_forward.insert(tentative + h, v);
                }
            }
        }

        if seen[e.index()] == 0 {
            return Ok(None);
        }

        let cost = g[e.index()];
        let mut coords = Vec::new();
        let mut cur = e;
        loop {
            coords.push(self.graph.coord(cur));
            if cur == s {
                break;
            }
            cur = prev[cur.index()];
            if cur == NodeIdx::INVALID {
                return Ok(None);
            }
        }
        coords.reverse();

        Ok(Some(Route { coords, cost }))
    }
}
