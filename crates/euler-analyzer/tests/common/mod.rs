#![allow(dead_code)]

use euler_core::GraphStore;
use euler_matrix::{MatrixConfig, MatrixGraph};

pub fn build(vertices: &[&str], edges: &[(&str, &str, &str)]) -> MatrixGraph {
    MatrixGraph::from_edge_list(MatrixConfig::default(), vertices, edges).unwrap()
}

/// A-B-C-D-A with edges e1..e4.
pub fn four_cycle() -> MatrixGraph {
    build(
        &["A", "B", "C", "D"],
        &[
            ("e1", "A", "B"),
            ("e2", "B", "C"),
            ("e3", "C", "D"),
            ("e4", "D", "A"),
        ],
    )
}

/// A-B-C with edges e1, e2.
pub fn path_abc() -> MatrixGraph {
    build(&["A", "B", "C"], &[("e1", "A", "B"), ("e2", "B", "C")])
}

/// The four-cycle plus an isolated vertex E.
pub fn four_cycle_with_isolated() -> MatrixGraph {
    let mut graph = four_cycle();
    graph.insert_vertex("E").unwrap();
    graph
}

/// Two triangles A-B-C and D-E-F joined by the bridge `br` between C and D.
pub fn bowtie_bridge() -> MatrixGraph {
    build(
        &["A", "B", "C", "D", "E", "F"],
        &[
            ("t1", "A", "B"),
            ("t2", "B", "C"),
            ("t3", "C", "A"),
            ("br", "C", "D"),
            ("u1", "D", "E"),
            ("u2", "E", "F"),
            ("u3", "F", "D"),
        ],
    )
}

/// Checks that `steps` is a walk using every edge of `graph` exactly once.
pub fn assert_euler_walk(graph: &MatrixGraph, steps: &[String]) {
    assert_eq!(steps.len() % 2, 1, "walk must end on a vertex: {steps:?}");
    assert_eq!(steps.len() / 2, graph.edge_count(), "walk must use every edge: {steps:?}");
    let mut used = std::collections::BTreeSet::new();
    for triple in steps.windows(3).step_by(2) {
        let (from, label, to) = (&triple[0], &triple[1], &triple[2]);
        assert!(used.insert(label.clone()), "edge {label} used twice");
        let (_, _, edge) = graph
            .edges()
            .find(|(_, _, edge)| &edge.label == label)
            .unwrap_or_else(|| panic!("unknown edge {label}"));
        let forward = &edge.v1 == from && &edge.v2 == to;
        let backward = &edge.v2 == from && &edge.v1 == to;
        assert!(forward || backward, "edge {label} does not join {from} and {to}");
    }
}
