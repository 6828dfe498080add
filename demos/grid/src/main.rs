//! grid-demo — smallest runnable example for the waymesh routing engine.
//!
//! Parses a handful of downtown streets (inspired by the geography of
//! Mobile, Alabama) from embedded GeoJSON, builds the route graph, and
//! answers a few point-to-point queries with different queue variants.
//! Swap the embedded document for a real street extract to route at
//! city scale.

use std::time::Instant;

use anyhow::Result;

use wm_core::{Coord, Haversine, NodeIdx};
use wm_graph::{component_count, edge_length_summary};
use wm_heap::{FibonacciHeap, PairingHeap};
use wm_router::Pathfinder;

// ── Street network ────────────────────────────────────────────────────────────

// Three east-west streets, two north-south cross streets, and one
// diagonal connector.  Streets join only where coordinates coincide.
const STREETS_GEOJSON: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        { "type": "Feature", "properties": { "name": "Dauphin St" },
          "geometry": { "type": "LineString", "coordinates":
            [[-88.0480, 30.6910], [-88.0440, 30.6910], [-88.0400, 30.6910]] } },
        { "type": "Feature", "properties": { "name": "St Francis St" },
          "geometry": { "type": "LineString", "coordinates":
            [[-88.0480, 30.6930], [-88.0440, 30.6930], [-88.0400, 30.6930]] } },
        { "type": "Feature", "properties": { "name": "Government St" },
          "geometry": { "type": "LineString", "coordinates":
            [[-88.0480, 30.6890], [-88.0440, 30.6890], [-88.0400, 30.6890]] } },
        { "type": "Feature", "properties": { "name": "Royal St" },
          "geometry": { "type": "MultiLineString", "coordinates":
            [[[-88.0400, 30.6890], [-88.0400, 30.6910], [-88.0400, 30.6930]]] } },
        { "type": "Feature", "properties": { "name": "Jackson St" },
          "geometry": { "type": "LineString", "coordinates":
            [[-88.0480, 30.6890], [-88.0480, 30.6910], [-88.0480, 30.6930]] } },
        { "type": "Feature", "properties": { "name": "connector" },
          "geometry": { "type": "LineString", "coordinates":
            [[-88.0440, 30.6890], [-88.0400, 30.6930]] } }
    ]
}"#;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== grid-demo — waymesh routing engine ===");
    println!();

    // 1. Extract polylines and build the default engine (haversine km,
    //    4-ary heap).
    let polylines = wm_graph::geojson::polylines_from_str(STREETS_GEOJSON)?;
    let mut finder = Pathfinder::new();
    finder.build_route_graph(&polylines);
    println!(
        "Network: {} polylines, {} nodes, {} directed edges, {} component(s)",
        polylines.len(),
        finder.graph().node_count(),
        finder.graph().directed_edge_count(),
        component_count(finder.graph()),
    );
    let lengths = edge_length_summary(finder.graph());
    println!(
        "Segments: {} totalling {:.3} km (mean {:.3} km)",
        lengths.segments,
        lengths.total,
        lengths.mean()
    );
    println!();

    // 2. Route between two intersections.
    let start = Coord::new(-88.0480, 30.6890); // Government @ Jackson
    let end = Coord::new(-88.0400, 30.6930); // St Francis @ Royal
    let t0 = Instant::now();
    let route = finder
        .get_route(start, end)?
        .expect("network is connected");
    println!(
        "Route {start} -> {end}  ({:.1} µs)",
        t0.elapsed().as_secs_f64() * 1e6
    );
    for coord in &route.coords {
        println!("  via {coord}");
    }
    println!("Total: {:.3} km over {} segments", route.cost, route.segment_count());
    println!();

    // 3. Same query on the other exotic queues — identical cost.
    let mut fib: Pathfinder<Haversine, FibonacciHeap<NodeIdx>> =
        Pathfinder::with_distance(Haversine);
    fib.build_route_graph(&polylines);
    let fib_route = fib.get_route(start, end)?.expect("network is connected");

    let mut pairing: Pathfinder<Haversine, PairingHeap<NodeIdx>> =
        Pathfinder::with_distance(Haversine);
    pairing.build_route_graph(&polylines);
    let pairing_route = pairing.get_route(start, end)?.expect("network is connected");

    println!("{:<12} {:>10}", "Queue", "Cost (km)");
    println!("{}", "-".repeat(24));
    for (name, cost) in [
        ("4-ary", route.cost),
        ("fibonacci", fib_route.cost),
        ("pairing", pairing_route.cost),
    ] {
        println!("{name:<12} {cost:>10.6}");
    }
    println!();

    // 4. Extend the network at runtime: a new street unlocks a shortcut.
    finder.expand_route_graph(&[vec![
        Coord::new(-88.0480, 30.6890),
        Coord::new(-88.0440, 30.6930),
    ]])?;
    let shortcut = finder
        .get_route(start, end)?
        .expect("network is connected");
    println!(
        "After expand: {:.3} km over {} segments",
        shortcut.cost,
        shortcut.segment_count()
    );

    Ok(())
}
