/// Vertex table and adjacency matrix.
pub mod store;

/// Breadth-first and depth-first reachability search.
pub mod traversal;

pub use store::Graph;
pub use traversal::GraphTraverser;
