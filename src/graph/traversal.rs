use tracing::{debug, trace};

use crate::config::DEFAULT_QUEUE_CAPACITY;
use crate::errors::{GraphError, Result};
use crate::queue::BoundedQueue;
use crate::types::*;

use super::store::Graph;

/// Runs reachability searches over a borrowed [`Graph`].
///
/// Visitation state lives in a per-call bitmap indexed by slot, so the graph
/// itself is never mutated and independent searches may share it.
pub struct GraphTraverser<'a> {
    graph: &'a Graph,
    queue_capacity: usize,
}

impl<'a> GraphTraverser<'a> {
    /// Creates a traverser with the default frontier queue capacity.
    pub fn new(graph: &'a Graph) -> Self {
        Self::with_queue_capacity(graph, DEFAULT_QUEUE_CAPACITY)
    }

    /// Creates a traverser whose breadth-first frontier holds at most
    /// `queue_capacity` vertices.
    pub fn with_queue_capacity(graph: &'a Graph, queue_capacity: usize) -> Self {
        Self {
            graph,
            queue_capacity,
        }
    }

    /// Runs the search selected by `strategy`.
    pub fn search(
        &self,
        strategy: SearchStrategy,
        from_id: VertexId,
        to_id: VertexId,
    ) -> Result<SearchReport> {
        match strategy {
            SearchStrategy::BreadthFirst => self.breadth_first_search(from_id, to_id),
            SearchStrategy::DepthFirst => self.depth_first_search(from_id, to_id),
        }
    }

    /// Breadth-first search from `from_id` towards `to_id`.
    ///
    /// The target is recognised when it is dequeued, not when it is
    /// discovered, so `from_id == to_id` is found on the first iteration.
    /// Fails if the start vertex is unknown or the frontier queue overflows.
    pub fn breadth_first_search(&self, from_id: VertexId, to_id: VertexId) -> Result<SearchReport> {
        let start = self
            .graph
            .slot_of(from_id)
            .ok_or(GraphError::VertexNotFound { id: from_id })?;

        let mut visited = vec![false; self.graph.vertex_count()];
        let mut order: Vec<Vertex> = Vec::new();
        let mut queue: BoundedQueue<usize> = BoundedQueue::with_capacity(self.queue_capacity);

        visited[start] = true;
        queue.push(start)?;

        let mut outcome = SearchOutcome::NotFound;

        while let Some(current) = queue.pop() {
            let vertex = &self.graph.vertices()[current];
            trace!(id = vertex.id, pending = queue.len(), "bfs dequeue");
            order.push(vertex.clone());

            if vertex.id == to_id {
                outcome = SearchOutcome::Found;
                break;
            }

            for neighbor in self.graph.neighbor_slots(current) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push(neighbor)?;
                }
            }
        }

        debug!(
            from = from_id,
            to = to_id,
            visited = order.len(),
            outcome = outcome.as_str(),
            "breadth-first search finished"
        );

        Ok(SearchReport {
            strategy: SearchStrategy::BreadthFirst,
            from: from_id,
            to: to_id,
            outcome,
            visited: order,
        })
    }

    /// Depth-first search from `from_id` towards `to_id`.
    ///
    /// Uses an explicit stack. A vertex is marked when popped, and the target
    /// is matched at that point. Neighbours are pushed in reverse slot order
    /// so the lowest slot is explored first, as a recursive descent would.
    pub fn depth_first_search(&self, from_id: VertexId, to_id: VertexId) -> Result<SearchReport> {
        let start = self
            .graph
            .slot_of(from_id)
            .ok_or(GraphError::VertexNotFound { id: from_id })?;

        let mut visited = vec![false; self.graph.vertex_count()];
        let mut order: Vec<Vertex> = Vec::new();
        let mut stack: Vec<usize> = vec![start];

        let mut outcome = SearchOutcome::NotFound;

        while let Some(current) = stack.pop() {
            if visited[current] {
                continue;
            }
            visited[current] = true;

            let vertex = &self.graph.vertices()[current];
            trace!(id = vertex.id, pending = stack.len(), "dfs pop");
            order.push(vertex.clone());

            if vertex.id == to_id {
                outcome = SearchOutcome::Found;
                break;
            }

            let neighbors: Vec<usize> = self.graph.neighbor_slots(current).collect();
            for &neighbor in neighbors.iter().rev() {
                if !visited[neighbor] {
                    stack.push(neighbor);
                }
            }
        }

        debug!(
            from = from_id,
            to = to_id,
            visited = order.len(),
            outcome = outcome.as_str(),
            "depth-first search finished"
        );

        Ok(SearchReport {
            strategy: SearchStrategy::DepthFirst,
            from: from_id,
            to: to_id,
            outcome,
            visited: order,
        })
    }

    /// Returns `true` if `to_id` is reachable from `from_id` by breadth-first search.
    pub fn path_exists(&self, from_id: VertexId, to_id: VertexId) -> Result<bool> {
        Ok(self
            .breadth_first_search(from_id, to_id)?
            .outcome
            .is_found())
    }
}
