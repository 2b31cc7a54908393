use std::fs;
use std::process::Command;

use tempfile::TempDir;

const CHAIN: &str = "3\nid:1 tag:a\nid:2 tag:b\nid:3 tag:c\n1 2\n2 3\n";

/// Helper: write `contents` to a graph file inside a fresh temp dir.
fn write_graph(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("graph.txt");
    fs::write(&path, contents).expect("failed to write graph file");
    (dir, path)
}

fn reachgraph() -> Command {
    Command::new(env!("CARGO_BIN_EXE_reachgraph"))
}

#[test]
fn test_cli_prints_graph_and_both_searches() {
    let (_dir, path) = write_graph(CHAIN);
    let output = reachgraph()
        .arg(&path)
        .args(["1", "3"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Input graph:\n[1, a]: [2, b] \n"));
    let dfs_at = stdout.find("---DFS---").expect("missing DFS section");
    let bfs_at = stdout.find("---BFS---").expect("missing BFS section");
    assert!(dfs_at < bfs_at);
    assert_eq!(stdout.matches("Path from 1 to 3 found").count(), 2);
}

#[test]
fn test_cli_not_found_is_still_success() {
    let (_dir, path) = write_graph(CHAIN);
    let output = reachgraph().arg(&path).args(["3", "1"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("No path from 3 to 1").count(), 2);
}

#[test]
fn test_cli_json_output() {
    let (_dir, path) = write_graph(CHAIN);
    let output = reachgraph()
        .arg(&path)
        .args(["1", "3", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["graph"]["vertex_count"], 3);
    assert_eq!(value["searches"][0]["strategy"], "DepthFirst");
    assert_eq!(value["searches"][1]["outcome"], "Found");
}

#[test]
fn test_cli_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = reachgraph()
        .arg(dir.path().join("nope.txt"))
        .args(["1", "2"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_cli_bad_arguments_fail() {
    let (_dir, path) = write_graph(CHAIN);
    let output = reachgraph().arg(&path).arg("1").output().unwrap();
    assert!(!output.status.success());
    let output = reachgraph().arg(&path).args(["one", "2"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_cli_unknown_start_vertex_fails() {
    let (_dir, path) = write_graph(CHAIN);
    let output = reachgraph().arg(&path).args(["9", "1"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_cli_prints_graph_before_failing_search() {
    let (_dir, path) = write_graph("2\nid:1 tag:a\nid:2 tag:b\n1 2\n");
    let output = reachgraph().arg(&path).args(["9", "1"]).output().unwrap();
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Input graph:\n[1, a]: [2, b] \n[2, b]: \n"));
    assert!(stdout.contains("---DFS---\nFrom vertex id: 9\nTo vertex id: 1\nOutput:\n"));
    assert!(!stdout.contains("---BFS---"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("vertex not found: 9"));
}
