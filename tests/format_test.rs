use reachgraph::config::GraphConfig;
use reachgraph::format::*;
use reachgraph::graph::{Graph, GraphTraverser};
use reachgraph::loader::parse_graph;

fn setup_chain() -> Graph {
    let mut g = Graph::new();
    g.insert_vertex(1, "a").unwrap();
    g.insert_vertex(2, "b").unwrap();
    g.insert_vertex(3, "c").unwrap();
    g.new_edge(1, 2).unwrap();
    g.new_edge(1, 3).unwrap();
    g.new_edge(2, 3).unwrap();
    g
}

#[test]
fn test_format_adjacency() {
    let g = setup_chain();
    assert_eq!(
        format_adjacency(&g),
        "[1, a]: [2, b] [3, c] \n[2, b]: [3, c] \n[3, c]: \n"
    );
}

#[test]
fn test_write_adjacency_counts_non_whitespace() {
    let g = setup_chain();
    let mut buf = Vec::new();
    let count = write_adjacency(&mut buf, &g).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, format_adjacency(&g));
    let expected = text.chars().filter(|c| !c.is_whitespace()).count();
    assert_eq!(count, expected);
}

#[test]
fn test_empty_graph_formats_to_nothing() {
    let g = Graph::new();
    assert_eq!(format_adjacency(&g), "");
    assert_eq!(to_listing(&g), "0\n");
}

#[test]
fn test_listing_round_trip() {
    let g = setup_chain();
    let listing = to_listing(&g);
    assert_eq!(listing, "3\nid:1 tag:a\nid:2 tag:b\nid:3 tag:c\n1 2\n1 3\n2 3\n");
    let parsed = parse_graph(&listing, &GraphConfig::default()).unwrap();
    assert_eq!(parsed.vertices(), g.vertices());
    assert_eq!(parsed.edges(), g.edges());
}

#[test]
fn test_format_report() {
    let g = setup_chain();
    let traverser = GraphTraverser::new(&g);

    let found = format_report(&traverser.breadth_first_search(1, 3).unwrap());
    assert_eq!(found, "[1, a]\n[2, b]\n[3, c]\nPath from 1 to 3 found\n");

    let missing = format_report(&traverser.breadth_first_search(3, 1).unwrap());
    assert_eq!(missing, "[3, c]\nNo path from 3 to 1\n");
}
