//! Unit tests for wm-graph.
//!
//! All networks are hand-crafted; weights use planar Euclidean distance
//! so expectations are exact.

#[cfg(test)]
mod helpers {
    use wm_core::Coord;

    /// Euclidean distance on the plane, the deterministic test measure.
    pub fn euclid(a: Coord, b: Coord) -> f64 {
        ((a.lng - b.lng).powi(2) + (a.lat - b.lat).powi(2)).sqrt()
    }

    pub fn c(lng: f64, lat: f64) -> Coord {
        Coord::new(lng, lat)
    }

    /// L-shaped network: a vertical three-node line with a spur at the
    /// middle node.
    pub fn l_network() -> Vec<Vec<Coord>> {
        vec![
            vec![c(0.0, 0.0), c(0.0, 1.0), c(0.0, 2.0)],
            vec![c(0.0, 1.0), c(1.0, 1.0)],
        ]
    }
}

// ── Interner ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod interner {
    use super::helpers::c;
    use crate::CoordInterner;
    use wm_core::NodeIdx;

    #[test]
    fn first_seen_dense_order() {
        let mut interner = CoordInterner::new();
        assert_eq!(interner.intern(c(0.0, 0.0)), NodeIdx(0));
        assert_eq!(interner.intern(c(1.0, 0.0)), NodeIdx(1));
        assert_eq!(interner.intern(c(0.0, 0.0)), NodeIdx(0));
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn coord_index_roundtrip() {
        let mut interner = CoordInterner::new();
        let coords = [c(-88.04, 30.69), c(-88.03, 30.70), c(0.0, 0.0)];
        for coord in coords {
            let idx = interner.intern(coord);
            assert_eq!(interner.coord(idx), coord);
            assert_eq!(interner.lookup(coord), Some(idx));
        }
    }

    #[test]
    fn bit_exact_keys() {
        let mut interner = CoordInterner::new();
        let pos = interner.intern(c(0.0, 1.0));
        let neg = interner.intern(c(-0.0, 1.0));
        assert_ne!(pos, neg, "signed zeros are distinct nodes");
    }

    #[test]
    fn clear_resets_indices() {
        let mut interner = CoordInterner::new();
        interner.intern(c(5.0, 5.0));
        interner.clear();
        assert!(interner.is_empty());
        assert_eq!(interner.intern(c(9.0, 9.0)), NodeIdx(0));
    }
}

// ── Builder & CSR structure ───────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::helpers::{c, euclid, l_network};
    use crate::RouteGraph;
    use wm_core::NodeIdx;

    #[test]
    fn empty_build() {
        let mut graph = RouteGraph::new();
        graph.build(&[], &euclid);
        assert!(graph.is_built());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.directed_edge_count(), 0);
        assert_eq!(graph.offsets(), [0]);
    }

    #[test]
    fn l_network_structure() {
        let mut graph = RouteGraph::new();
        graph.build(&l_network(), &euclid);

        // 4 unique coordinates, 3 segments, 6 directed entries.
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.directed_edge_count(), 6);

        // The shared middle coordinate joins both polylines.
        let middle = graph.lookup(c(0.0, 1.0)).unwrap();
        assert_eq!(graph.csr_degree(middle), 3);

        // Row pointer is a proper prefix sum.
        let offsets = graph.offsets();
        assert_eq!(offsets[0], 0);
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*offsets.last().unwrap() as usize, 6);
    }

    #[test]
    fn undirected_reverse_entries() {
        let mut graph = RouteGraph::new();
        graph.build(&l_network(), &euclid);

        for u in 0..graph.node_count() {
            let u = NodeIdx(u as u32);
            for (v, w) in graph.neighbors(u) {
                let back = graph
                    .neighbors(v)
                    .any(|(x, wx)| x == u && (wx - w).abs() < 1e-12);
                assert!(back, "missing reverse of {u} -> {v}");
            }
        }
    }

    #[test]
    fn segment_orientation_is_irrelevant() {
        // Same topology written backwards joins identically.
        let mut graph = RouteGraph::new();
        graph.build(
            &[
                vec![c(1.0, 0.0), c(0.0, 0.0)],
                vec![c(2.0, 0.0), c(1.0, 0.0)],
            ],
            &euclid,
        );
        assert_eq!(graph.node_count(), 3);
        let mid = graph.lookup(c(1.0, 0.0)).unwrap();
        assert_eq!(graph.csr_degree(mid), 2);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut graph = RouteGraph::new();
        graph.build(
            &[
                vec![c(0.0, 0.0), c(1.0, 0.0)],
                vec![c(0.0, 0.0), c(1.0, 0.0)],
            ],
            &euclid,
        );
        // No dedup: two segments → four directed entries.
        assert_eq!(graph.directed_edge_count(), 4);
        let a = graph.lookup(c(0.0, 0.0)).unwrap();
        assert_eq!(graph.csr_degree(a), 2);
    }

    #[test]
    fn duplicate_consecutive_coordinate_is_a_zero_self_edge() {
        let mut graph = RouteGraph::new();
        graph.build(&[vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0)]], &euclid);

        let b = graph.lookup(c(1.0, 0.0)).unwrap();
        let self_edges: Vec<f64> = graph
            .neighbors(b)
            .filter(|&(v, _)| v == b)
            .map(|(_, w)| w)
            .collect();
        // One self-segment stored in both directions, weight 0.
        assert_eq!(self_edges, [0.0, 0.0]);
    }

    #[test]
    fn degenerate_input_is_skipped() {
        let mut graph = RouteGraph::new();
        graph.build(
            &[
                vec![],
                vec![c(9.0, 9.0)],
                vec![c(0.0, 0.0), c(f64::NAN, 1.0)],
                vec![c(0.0, 0.0), c(1.0, 0.0)],
            ],
            &euclid,
        );
        // Only the last polyline contributes; the NaN segment interns nothing.
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.directed_edge_count(), 2);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let net = l_network();
        let mut graph = RouteGraph::new();
        graph.build(&net, &euclid);
        let offsets_once = graph.offsets().to_vec();
        let adjacency_once: Vec<Vec<(wm_core::NodeIdx, f64)>> = (0..graph.node_count())
            .map(|u| graph.neighbors(NodeIdx(u as u32)).collect())
            .collect();

        graph.build(&net, &euclid);
        assert_eq!(graph.offsets(), offsets_once);
        for (u, expected) in adjacency_once.iter().enumerate() {
            let again: Vec<_> = graph.neighbors(NodeIdx(u as u32)).collect();
            assert_eq!(&again, expected);
        }
    }
}

// ── Expand ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod expand {
    use super::helpers::{c, euclid, l_network};
    use crate::{GraphError, RouteGraph};
    use wm_core::NodeIdx;

    #[test]
    fn expand_before_build_fails() {
        let mut graph = RouteGraph::new();
        let result = graph.expand(&[vec![c(0.0, 0.0), c(1.0, 0.0)]], &euclid);
        assert!(matches!(result, Err(GraphError::NotBuilt)));
    }

    #[test]
    fn expand_matches_union_build() {
        let net1 = l_network();
        let net2 = vec![vec![c(1.0, 1.0), c(1.0, 2.0), c(0.0, 2.0)]];

        let mut expanded = RouteGraph::new();
        expanded.build(&net1, &euclid);
        expanded.expand(&net2, &euclid).unwrap();

        let mut union = RouteGraph::new();
        let mut all = net1.clone();
        all.extend(net2.clone());
        union.build(&all, &euclid);

        assert_eq!(expanded.node_count(), union.node_count());
        assert_eq!(expanded.directed_edge_count(), union.directed_edge_count());

        // Same node set ⇒ same per-node multiset of (neighbor, weight).
        for u in 0..union.node_count() {
            let u = NodeIdx(u as u32);
            let mut a: Vec<_> = expanded.neighbors(u).collect();
            let mut b: Vec<_> = union.neighbors(u).collect();
            a.sort_by(|x, y| (x.0, x.1).partial_cmp(&(y.0, y.1)).unwrap());
            b.sort_by(|x, y| (x.0, x.1).partial_cmp(&(y.0, y.1)).unwrap());
            assert_eq!(a, b, "adjacency of {u} diverged");
        }
    }

    #[test]
    fn expand_connects_new_region() {
        let mut graph = RouteGraph::new();
        graph.build(&[vec![c(0.0, 0.0), c(1.0, 0.0)]], &euclid);
        graph
            .expand(&[vec![c(1.0, 0.0), c(2.0, 0.0)]], &euclid)
            .unwrap();

        assert_eq!(graph.node_count(), 3);
        let mid = graph.lookup(c(1.0, 0.0)).unwrap();
        // Old CSR entry plus folded overlay entry.
        assert_eq!(graph.csr_degree(mid), 2);
    }

    #[test]
    fn post_build_intern_has_empty_slice() {
        let mut graph = RouteGraph::new();
        graph.build(&[vec![c(0.0, 0.0), c(1.0, 0.0)]], &euclid);

        let isolated = graph.intern(c(50.0, 50.0));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.csr_degree(isolated), 0);
        assert_eq!(graph.neighbors(isolated).count(), 0);
        assert_eq!(graph.offsets().len(), 4);
    }
}

// ── Stats ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats {
    use super::helpers::{c, euclid, l_network};
    use crate::{component_count, edge_length_summary, RouteGraph};

    #[test]
    fn single_component() {
        let mut graph = RouteGraph::new();
        graph.build(&l_network(), &euclid);
        assert_eq!(component_count(&graph), 1);
    }

    #[test]
    fn disconnected_pieces_and_isolated_node() {
        let mut graph = RouteGraph::new();
        graph.build(
            &[
                vec![c(0.0, 0.0), c(1.0, 0.0)],
                vec![c(5.0, 5.0), c(6.0, 5.0)],
            ],
            &euclid,
        );
        assert_eq!(component_count(&graph), 2);

        graph.intern(c(100.0, 100.0));
        assert_eq!(component_count(&graph), 3);
    }

    #[test]
    fn edge_lengths() {
        let mut graph = RouteGraph::new();
        graph.build(&l_network(), &euclid);
        let summary = edge_length_summary(&graph);
        // Three unit segments.
        assert_eq!(summary.segments, 3);
        assert!((summary.total - 3.0).abs() < 1e-12);
        assert!((summary.min - 1.0).abs() < 1e-12);
        assert!((summary.max - 1.0).abs() < 1e-12);
        assert!((summary.mean() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_network_summary() {
        let mut graph = RouteGraph::new();
        graph.build(&[], &euclid);
        let summary = edge_length_summary(&graph);
        assert_eq!(summary.segments, 0);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.min, 0.0);
        assert_eq!(summary.mean(), 0.0);
    }
}

// ── GeoJSON extraction ────────────────────────────────────────────────────────

#[cfg(all(test, feature = "geojson"))]
mod geojson_loader {
    use crate::geojson::polylines_from_str;
    use crate::GraphError;

    const DOCUMENT: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "name": "spine" },
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[0.0, 0.0], [0.0, 1.0], [0.0, 2.0]]
                }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [[[0.0, 1.0], [1.0, 1.0]], [[2.0, 2.0], [3.0, 2.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "Point", "coordinates": [9.0, 9.0] }
            }
        ]
    }"#;

    #[test]
    fn extracts_line_strings_only() {
        let polylines = polylines_from_str(DOCUMENT).unwrap();
        assert_eq!(polylines.len(), 3);
        assert_eq!(polylines[0].len(), 3);
        assert_eq!(polylines[1].len(), 2);
        assert_eq!(polylines[0][0].lng, 0.0);
        assert_eq!(polylines[1][1].lng, 1.0);
    }

    #[test]
    fn invalid_document_is_an_error() {
        let result = polylines_from_str("{ not geojson");
        assert!(matches!(result, Err(GraphError::GeoJson(_))));
    }

    #[test]
    fn short_lines_are_dropped() {
        let doc = r#"{
            "type": "LineString",
            "coordinates": [[0.0, 0.0]]
        }"#;
        let polylines = polylines_from_str(doc).unwrap();
        assert!(polylines.is_empty());
    }
}
