mod common;

use common::{bowtie_bridge, build, four_cycle, four_cycle_with_isolated, path_abc};
use euler_analyzer::{all_edges_are_bridges, is_bridge, BridgeCheck};
use euler_core::Edge;

fn check(graph: &euler_matrix::MatrixGraph, label: &str) -> BridgeCheck {
    is_bridge(graph, &Edge::new(label, "", "")).unwrap().unwrap()
}

#[test]
fn bridge_between_triangles() {
    let graph = bowtie_bridge();
    let bridge = check(&graph, "br");
    assert_eq!(
        bridge,
        BridgeCheck {
            is_bridge: true,
            row: 2,
            column: 3,
            label: "br".into(),
        }
    );
    for label in ["t1", "t2", "t3", "u1", "u2", "u3"] {
        assert!(!check(&graph, label).is_bridge, "{label} sits on a cycle");
    }
}

#[test]
fn cycle_edges_are_not_bridges() {
    let graph = four_cycle();
    for label in ["e1", "e2", "e3", "e4"] {
        assert!(!check(&graph, label).is_bridge);
    }
}

#[test]
fn parallel_twin_and_loops_are_never_bridges() {
    let graph = build(
        &["A", "B", "C"],
        &[("p1", "A", "B"), ("p2", "A", "B"), ("l1", "A", "A"), ("bc", "B", "C")],
    );
    assert!(!check(&graph, "p1").is_bridge);
    assert!(!check(&graph, "l1").is_bridge);
    assert!(check(&graph, "bc").is_bridge);
}

#[test]
fn bridge_test_leaves_graph_untouched() {
    let graph = bowtie_bridge();
    let before = graph.clone();
    check(&graph, "br");
    check(&graph, "t1");
    assert_eq!(graph, before);
    assert_eq!(graph.edge_count(), 7);
}

#[test]
fn unknown_label_has_no_verdict() {
    let graph = path_abc();
    assert!(is_bridge(&graph, &Edge::new("zz", "A", "B")).unwrap().is_none());
}

#[test]
fn all_bridges_verdicts() {
    assert!(!all_edges_are_bridges(&four_cycle()).unwrap());
    assert!(!all_edges_are_bridges(&bowtie_bridge()).unwrap());
    assert!(all_edges_are_bridges(&path_abc()).unwrap());
    let star = build(
        &["H", "A", "B", "C"],
        &[("s1", "H", "A"), ("s2", "H", "B"), ("s3", "H", "C")],
    );
    assert!(all_edges_are_bridges(&star).unwrap());
    assert!(all_edges_are_bridges(&build(&["A", "B"], &[])).unwrap());
}

#[test]
fn isolated_vertex_makes_every_edge_a_bridge() {
    let graph = four_cycle_with_isolated();
    assert!(check(&graph, "e1").is_bridge);
    assert!(all_edges_are_bridges(&graph).unwrap());
}
