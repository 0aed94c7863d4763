use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use euler_matrix::{canonical_hash, cycle_graph, graph_to_json, path_graph, MatrixGraph};
use serde_json::Value;

fn euler(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_euler"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn write_graph(dir: &Path, graph: &MatrixGraph) -> String {
    let path = dir.join("graph.json");
    fs::write(&path, graph_to_json(graph).unwrap()).unwrap();
    path.display().to_string()
}

#[test]
fn analyze_reports_verdicts_and_hash() {
    let dir = tempfile::tempdir().unwrap();
    let graph = cycle_graph(4).unwrap();
    let path = write_graph(dir.path(), &graph);

    let json = stdout_json(&euler(&["analyze", "--graph", &path]));
    assert_eq!(json["provenance"]["graph_hash"], canonical_hash(&graph).unwrap());
    assert_eq!(json["report"]["vertex_count"], 4);
    assert_eq!(json["report"]["is_connected"], true);
    assert_eq!(json["report"]["has_euler_path"], true);
    assert_eq!(
        json["report"]["euler_path"],
        serde_json::json!(["A", "e1", "B", "e2", "C", "e3", "D", "e4", "A"])
    );
}

#[test]
fn path_honours_yaml_start_rule() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_graph(dir.path(), &path_graph(3).unwrap());

    let default = stdout_json(&euler(&["path", "--graph", &path]));
    assert_eq!(default, serde_json::json!(["C", "e2", "B", "e1", "A"]));

    let config = dir.path().join("euler.yaml");
    fs::write(&config, "start_rule: first_odd\n").unwrap();
    let config = config.display().to_string();
    let first = stdout_json(&euler(&["path", "--graph", &path, "--config", &config]));
    assert_eq!(first, serde_json::json!(["A", "e1", "B", "e2", "C"]));
}

#[test]
fn path_prints_false_without_euler_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut graph = cycle_graph(4).unwrap();
    euler_core::GraphStore::insert_vertex(&mut graph, "E").unwrap();
    let path = write_graph(dir.path(), &graph);
    assert_eq!(stdout_json(&euler(&["path", "--graph", &path])), Value::Bool(false));
}

#[test]
fn demo_complete_graph_has_no_path() {
    let json = stdout_json(&euler(&["demo", "--shape", "complete", "--size", "4"]));
    assert_eq!(json["provenance"]["source"], "complete:4");
    assert_eq!(json["report"]["edge_count"], 6);
    assert_eq!(json["report"]["has_euler_path"], false);
    assert_eq!(json["report"]["euler_path"], Value::Null);
}

#[test]
fn demo_saves_a_loadable_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let save = dir.path().join("random.json").display().to_string();
    let demo = stdout_json(&euler(&[
        "demo", "--shape", "random", "--size", "5", "--edges", "7", "--seed", "9", "--save", &save,
    ]));
    let analyzed = stdout_json(&euler(&["analyze", "--graph", &save]));
    assert_eq!(demo["provenance"]["graph_hash"], analyzed["provenance"]["graph_hash"]);
    assert_eq!(demo["report"], analyzed["report"]);
}

#[test]
fn empty_graph_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, r#"{"vertices": []}"#).unwrap();
    let output = euler(&["analyze", "--graph", &path.display().to_string()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("empty-graph"));
}

#[test]
fn version_prints_package_version() {
    let output = euler(&["version"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        env!("CARGO_PKG_VERSION")
    );
}
