use std::fs;

use reachgraph::config::GraphConfig;
use reachgraph::errors::GraphError;
use reachgraph::loader::{parse_graph, read_graph_file};
use tempfile::TempDir;

const SAMPLE: &str = "\
3
id:1 tag:a
id:2 tag:b
id:3 tag:c
1 2
2 3
";

#[test]
fn test_parse_sample() {
    let g = parse_graph(SAMPLE, &GraphConfig::default()).expect("parse failed");
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 2);
    assert!(g.connection_exists(1, 2));
    assert!(g.connection_exists(2, 3));
    assert_eq!(g.vertex(3).unwrap().tag, "c");
}

#[test]
fn test_unknown_edge_ids_are_skipped() {
    let text = "2\nid:1 tag:a\nid:2 tag:b\n1 2\n1 9\n9 2\n2 1\n";
    let g = parse_graph(text, &GraphConfig::default()).unwrap();
    assert_eq!(g.edge_count(), 2);
    assert!(g.connection_exists(2, 1));
}

#[test]
fn test_self_loop_lines_are_skipped() {
    let text = "1\nid:1 tag:a\n1 1\n";
    let g = parse_graph(text, &GraphConfig::default()).unwrap();
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn test_malformed_edge_line_stops_edge_parsing() {
    let text = "3\nid:1 tag:a\nid:2 tag:b\nid:3 tag:c\n1 2\nnot an edge\n2 3\n";
    let g = parse_graph(text, &GraphConfig::default()).unwrap();
    assert_eq!(g.edge_count(), 1);
    assert!(!g.connection_exists(2, 3));
}

#[test]
fn test_header_mismatch_is_tolerated() {
    let text = "10\nid:1 tag:a\nid:2 tag:b\n";
    let g = parse_graph(text, &GraphConfig::default()).unwrap();
    assert_eq!(g.vertex_count(), 2);
}

#[test]
fn test_blank_lines_are_ignored() {
    let text = "\n2\n\nid:1 tag:a\nid:2 tag:b\n\n1 2\n\n";
    let g = parse_graph(text, &GraphConfig::default()).unwrap();
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn test_duplicate_vertex_lines_collapse() {
    let text = "2\nid:1 tag:a\nid:1 tag:a\n";
    let g = parse_graph(text, &GraphConfig::default()).unwrap();
    assert_eq!(g.vertex_count(), 1);
}

#[test]
fn test_bad_header_is_parse_error() {
    let err = parse_graph("three\nid:1 tag:a\n", &GraphConfig::default()).unwrap_err();
    assert!(matches!(err, GraphError::Parse { line: Some(1), .. }));
}

#[test]
fn test_empty_input_is_parse_error() {
    let err = parse_graph("   \n", &GraphConfig::default()).unwrap_err();
    assert!(matches!(err, GraphError::Parse { line: None, .. }));
}

#[test]
fn test_bad_vertex_line_reports_line_number() {
    let err = parse_graph("2\nid:1 tag:a\nid:x tag:b\n", &GraphConfig::default()).unwrap_err();
    assert!(matches!(err, GraphError::Parse { line: Some(3), .. }));
}

#[test]
fn test_vertex_capacity_propagates() {
    let config = GraphConfig {
        max_vertices: 1,
        ..GraphConfig::default()
    };
    let err = parse_graph("2\nid:1 tag:a\nid:2 tag:b\n", &config).unwrap_err();
    assert!(matches!(err, GraphError::Capacity { limit: 1, .. }));
}

#[test]
fn test_read_graph_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("g.txt");
    fs::write(&path, SAMPLE).unwrap();
    let g = read_graph_file(&path, &GraphConfig::default()).unwrap();
    assert_eq!(g.vertex_count(), 3);
}

#[test]
fn test_read_missing_file_is_file_error() {
    let dir = TempDir::new().unwrap();
    let err = read_graph_file(&dir.path().join("missing.txt"), &GraphConfig::default())
        .unwrap_err();
    assert!(matches!(err, GraphError::File { .. }));
}
