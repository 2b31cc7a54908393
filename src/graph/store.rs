use tracing::debug;

use crate::config::GraphConfig;
use crate::errors::{GraphError, Result};
use crate::types::*;

/// A directed graph over a bounded vertex table and a boolean adjacency matrix.
///
/// Vertices keep the slot they were inserted into for the lifetime of the
/// graph, so insertion order is also iteration and print order. The matrix
/// is square with one row and one column per vertex and is indexed by slot,
/// not by id. Self-loops are never stored.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    adjacency: Vec<Vec<bool>>,
    edge_count: usize,
    max_vertices: usize,
    max_tag_len: usize,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Creates an empty graph with the default limits.
    pub fn new() -> Self {
        Self::with_config(&GraphConfig::default())
    }

    /// Creates an empty graph bounded by the limits in `config`.
    pub fn with_config(config: &GraphConfig) -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: Vec::new(),
            edge_count: 0,
            max_vertices: config.max_vertices,
            max_tag_len: config.max_tag_len,
        }
    }

    /// Inserts a vertex described as `id:<id> tag:<tag>` and returns its id.
    ///
    /// If a vertex with the same id already exists the call succeeds without
    /// changing the graph. A malformed descriptor or a full vertex table is
    /// an error and leaves the graph untouched.
    pub fn new_vertex(&mut self, descriptor: &str) -> Result<VertexId> {
        let vertex = Vertex::from_descriptor(descriptor, self.max_tag_len)?;
        self.push_vertex(vertex)
    }

    /// Inserts a vertex from its parts. Same idempotence rules as [`Graph::new_vertex`].
    pub fn insert_vertex(&mut self, id: VertexId, tag: &str) -> Result<VertexId> {
        let vertex = Vertex::new(id, tag, self.max_tag_len)?;
        self.push_vertex(vertex)
    }

    fn push_vertex(&mut self, vertex: Vertex) -> Result<VertexId> {
        let id = vertex.id;
        if self.contains(id) {
            debug!(id, "vertex already present, insertion skipped");
            return Ok(id);
        }
        if self.vertices.len() >= self.max_vertices {
            return Err(GraphError::Capacity {
                what: "vertex table",
                limit: self.max_vertices,
            });
        }

        for row in &mut self.adjacency {
            row.push(false);
        }
        self.vertices.push(vertex);
        self.adjacency.push(vec![false; self.vertices.len()]);
        Ok(id)
    }

    /// Adds a directed edge from `orig` to `dest`.
    ///
    /// The edge counter is incremented on every successful call, including
    /// when the edge is already present.
    pub fn new_edge(&mut self, orig: VertexId, dest: VertexId) -> Result<()> {
        if orig == dest {
            return Err(GraphError::SelfLoop { id: orig });
        }
        let i = self
            .slot_of(orig)
            .ok_or(GraphError::VertexNotFound { id: orig })?;
        let j = self
            .slot_of(dest)
            .ok_or(GraphError::VertexNotFound { id: dest })?;

        self.adjacency[i][j] = true;
        self.edge_count += 1;
        Ok(())
    }

    /// Returns `true` if a vertex with this id exists.
    pub fn contains(&self, id: VertexId) -> bool {
        self.slot_of(id).is_some()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of successful [`Graph::new_edge`] calls, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
        }
    }

    /// Returns `true` if there is an edge `orig -> dest`.
    ///
    /// Always `false` for `orig == dest` or when either id is unknown.
    pub fn connection_exists(&self, orig: VertexId, dest: VertexId) -> bool {
        if orig == dest {
            return false;
        }
        match (self.slot_of(orig), self.slot_of(dest)) {
            (Some(i), Some(j)) => self.adjacency[i][j],
            _ => false,
        }
    }

    /// Number of outgoing edges from `id`, or 0 when the id is unknown.
    pub fn neighbor_count(&self, id: VertexId) -> usize {
        self.slot_of(id)
            .map(|slot| self.neighbor_slots(slot).count())
            .unwrap_or(0)
    }

    /// Destination ids of every edge leaving `id`, in slot order.
    pub fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        match self.slot_of(id) {
            Some(slot) => self
                .neighbor_slots(slot)
                .map(|j| self.vertices[j].id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Outgoing edge count of the first vertex carrying `tag`.
    ///
    /// Tags are not unique; only the earliest inserted match is considered.
    pub fn neighbor_count_by_tag(&self, tag: &str) -> usize {
        self.vertices
            .iter()
            .position(|v| v.tag == tag)
            .map(|slot| self.neighbor_slots(slot).count())
            .unwrap_or(0)
    }

    /// Looks up a vertex by id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.slot_of(id).map(|slot| &self.vertices[slot])
    }

    /// Looks up a vertex by slot.
    pub fn vertex_at(&self, slot: usize) -> Option<&Vertex> {
        self.vertices.get(slot)
    }

    /// Slot of the vertex with this id, by linear scan.
    pub fn slot_of(&self, id: VertexId) -> Option<usize> {
        self.vertices.iter().position(|v| v.id == id)
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Slots reachable by one outgoing edge from `slot`, ascending.
    pub fn neighbor_slots(&self, slot: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .get(slot)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter_map(|(j, &connected)| connected.then_some(j))
    }

    /// Every stored edge as an `(orig, dest)` id pair, row by row in slot order.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut edges = Vec::new();
        for (i, vertex) in self.vertices.iter().enumerate() {
            for j in self.neighbor_slots(i) {
                edges.push((vertex.id, self.vertices[j].id));
            }
        }
        edges
    }
}
