mod common;

use common::{build, four_cycle, four_cycle_with_isolated, path_abc};
use euler_analyzer::{depth_first_traversal, is_connected};
use euler_core::{GraphError, GraphStore};
use euler_matrix::MatrixGraph;

#[test]
fn traversal_descends_before_scanning_siblings() {
    // A is adjacent to B and C; B leads on to D.
    let graph = build(
        &["A", "B", "C", "D"],
        &[("ab", "A", "B"), ("ac", "A", "C"), ("bd", "B", "D")],
    );
    let tree = depth_first_traversal(&graph, "A").unwrap();
    assert_eq!(tree.vertex_labels(), ["A", "B", "D", "C"].map(String::from));
    let edges: Vec<_> = tree.edges().map(|(_, _, edge)| edge.label.clone()).collect();
    assert_eq!(edges.len(), 3);
    assert!(tree.contains_edge("ab") && tree.contains_edge("bd") && tree.contains_edge("ac"));
}

#[test]
fn traversal_skips_cycle_closing_edges() {
    let tree = depth_first_traversal(&four_cycle(), "A").unwrap();
    assert_eq!(tree.vertex_labels(), ["A", "B", "C", "D"].map(String::from));
    assert_eq!(tree.edge_count(), 3);
    assert!(!tree.contains_edge("e4"));
}

#[test]
fn traversal_edges_keep_the_walk_orientation() {
    let tree = depth_first_traversal(&path_abc(), "C").unwrap();
    assert_eq!(tree.vertex_labels(), ["C", "B", "A"].map(String::from));
    let e2 = tree.edges().find(|(_, _, edge)| edge.label == "e2").unwrap().2;
    assert_eq!((e2.v1.as_str(), e2.v2.as_str()), ("C", "B"));
}

#[test]
fn loops_and_parallels_do_not_revisit() {
    let graph = build(
        &["A", "B"],
        &[("l1", "A", "A"), ("p1", "A", "B"), ("p2", "A", "B")],
    );
    let tree = depth_first_traversal(&graph, "A").unwrap();
    assert_eq!(tree.vertex_count(), 2);
    assert_eq!(tree.edge_count(), 1);
    assert!(tree.contains_edge("p1"));
}

#[test]
fn isolated_start_vertex_yields_empty_traversal() {
    let tree = depth_first_traversal(&four_cycle_with_isolated(), "E").unwrap();
    assert_eq!(tree.vertex_count(), 0);
    assert_eq!(tree.edge_count(), 0);
}

#[test]
fn start_with_only_a_self_loop_is_kept() {
    let graph = build(&["A", "B"], &[("l1", "A", "A")]);
    let tree = depth_first_traversal(&graph, "A").unwrap();
    assert_eq!(tree.vertex_labels(), ["A".to_string()]);
    assert_eq!(tree.edge_count(), 0);
    assert!(!is_connected(&graph).unwrap());
    assert!(is_connected(&build(&["A"], &[("l1", "A", "A")])).unwrap());
}

#[test]
fn connectivity_agrees_with_every_start_vertex() {
    for graph in [four_cycle(), path_abc(), four_cycle_with_isolated()] {
        let connected = is_connected(&graph).unwrap();
        for start in graph.vertex_labels() {
            let tree = depth_first_traversal(&graph, start).unwrap();
            assert_eq!(tree.vertex_count() == graph.vertex_count(), connected);
        }
    }
    assert!(is_connected(&four_cycle()).unwrap());
    assert!(!is_connected(&four_cycle_with_isolated()).unwrap());
}

#[test]
fn lone_vertex_without_edges_is_not_connected() {
    let graph = build(&["A"], &[]);
    assert_eq!(depth_first_traversal(&graph, "A").unwrap().vertex_count(), 0);
    assert!(!is_connected(&graph).unwrap());
}

#[test]
fn isolated_first_vertex_disconnects() {
    let graph = build(&["Z", "A", "B"], &[("ab", "A", "B")]);
    assert!(!is_connected(&graph).unwrap());
}

#[test]
fn empty_graph_connectivity_is_a_precondition_error() {
    let err = is_connected(&MatrixGraph::default()).unwrap_err();
    assert!(matches!(&err, GraphError::Precondition(info) if info.code == "empty-graph"));
}

#[test]
fn unknown_start_is_invalid() {
    let err = depth_first_traversal(&four_cycle(), "Q").unwrap_err();
    assert_eq!(err.code(), "invalid-vertex");
}
