use std::fmt::Debug;
use std::hash::Hash;

use hashbrown::{HashMap, HashSet};

use crate::graph::{GraphError, GraphModel};

/// Identity of an edge in a [`DirectedMultigraph`].
///
/// Ids are handed out sequentially and never reused within one graph, so a
/// removed edge's id stays invalid forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId {
    raw: u64,
}

/// A directed multigraph: parallel edges between the same vertex pair and
/// self-loops are both allowed.
///
/// # Invariants
/// - Every id in `outgoing` and `incoming` has an entry in `endpoints`.
/// - An edge `(s, t)` is listed in `outgoing[s]` and `incoming[t]`; a
///   self-loop is listed in both lists of its vertex.
/// - Endpoints of every edge are members of `vertices`.
pub struct DirectedMultigraph<V: Copy + Eq + Hash + Debug> {
    vertices: HashSet<V>,
    endpoints: HashMap<EdgeId, (V, V)>,
    outgoing: HashMap<V, Vec<EdgeId>>,
    incoming: HashMap<V, Vec<EdgeId>>,
    next_edge: u64,
}

impl<V: Copy + Eq + Hash + Debug> DirectedMultigraph<V> {
    pub fn new() -> Self {
        DirectedMultigraph {
            vertices: HashSet::new(),
            endpoints: HashMap::new(),
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
            next_edge: 0,
        }
    }

    /// Adds `vertex` to the graph.
    ///
    /// # Returns
    /// `true` if the vertex was not already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.vertices.insert(vertex)
    }

    /// Adds a directed edge from `source` to `target` and returns its
    /// fresh id. Both endpoints must already be vertices of the graph.
    pub fn add_edge(
        &mut self,
        source: V,
        target: V,
    ) -> Result<EdgeId, GraphError<V, EdgeId>> {
        if !self.vertices.contains(&source) {
            return Err(GraphError::UnknownVertex(source));
        }
        if !self.vertices.contains(&target) {
            return Err(GraphError::UnknownVertex(target));
        }

        let edge = EdgeId { raw: self.next_edge };
        self.next_edge += 1;

        self.endpoints.insert(edge, (source, target));
        self.outgoing.entry(source).or_default().push(edge);
        self.incoming.entry(target).or_default().push(edge);
        Ok(edge)
    }

    /// Removes `edge` from the graph.
    ///
    /// # Returns
    /// The `(source, target)` endpoints the edge had, which callers need
    /// to build an edge-removed notification once the edge itself is no
    /// longer resolvable.
    pub fn remove_edge(&mut self, edge: EdgeId) -> Result<(V, V), GraphError<V, EdgeId>> {
        let (source, target) = self
            .endpoints
            .remove(&edge)
            .ok_or(GraphError::UnknownEdge(edge))?;

        if let Some(out) = self.outgoing.get_mut(&source)
            && let Some(pos) = out.iter().position(|&e| e == edge)
        {
            out.remove(pos);
        }
        if let Some(inc) = self.incoming.get_mut(&target)
            && let Some(pos) = inc.iter().position(|&e| e == edge)
        {
            inc.remove(pos);
        }
        Ok((source, target))
    }

    /// Removes `vertex` from the graph.
    ///
    /// # Returns
    /// `true` if the vertex was present.
    ///
    /// # Panics
    /// Panics if incident edges remain. Remove them first (or go through
    /// `ListenableGraph::remove_vertex`, which does so while notifying
    /// listeners).
    pub fn remove_vertex(&mut self, vertex: V) -> bool {
        if !self.vertices.contains(&vertex) {
            return false;
        }
        assert!(
            self.outgoing.get(&vertex).is_none_or(Vec::is_empty)
                && self.incoming.get(&vertex).is_none_or(Vec::is_empty),
            "vertex {vertex:?} removed while incident edges remain"
        );
        self.outgoing.remove(&vertex);
        self.incoming.remove(&vertex);
        self.vertices.remove(&vertex);
        true
    }

    /// Returns the ids of all edges incident to `vertex`, in either
    /// direction. A self-loop appears once.
    pub fn incident_edges(&self, vertex: V) -> Vec<EdgeId> {
        let mut seen = HashSet::new();
        let mut ids = Vec::new();
        let out = self.outgoing.get(&vertex).map(Vec::as_slice).unwrap_or(&[]);
        let inc = self.incoming.get(&vertex).map(Vec::as_slice).unwrap_or(&[]);
        for &edge in out.iter().chain(inc) {
            if seen.insert(edge) {
                ids.push(edge);
            }
        }
        ids
    }

    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.endpoints.contains_key(&edge)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    fn require_vertex(&self, vertex: V) -> Result<(), GraphError<V, EdgeId>> {
        if self.vertices.contains(&vertex) {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex(vertex))
        }
    }
}

impl<V: Copy + Eq + Hash + Debug> Default for DirectedMultigraph<V> {
    fn default() -> Self {
        DirectedMultigraph::new()
    }
}

impl<V: Copy + Eq + Hash + Debug> GraphModel for DirectedMultigraph<V> {
    type Vertex = V;
    type Edge = EdgeId;

    fn contains_vertex(&self, vertex: V) -> bool {
        self.vertices.contains(&vertex)
    }

    fn edge_source(&self, edge: EdgeId) -> Result<V, GraphError<V, EdgeId>> {
        self.endpoints
            .get(&edge)
            .map(|&(source, _)| source)
            .ok_or(GraphError::UnknownEdge(edge))
    }

    fn edge_target(&self, edge: EdgeId) -> Result<V, GraphError<V, EdgeId>> {
        self.endpoints
            .get(&edge)
            .map(|&(_, target)| target)
            .ok_or(GraphError::UnknownEdge(edge))
    }

    fn predecessor_list_of(&self, vertex: V) -> Result<Vec<V>, GraphError<V, EdgeId>> {
        self.require_vertex(vertex)?;
        Ok(self
            .incoming
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(|edge| self.endpoints[edge].0)
            .collect())
    }

    fn successor_list_of(&self, vertex: V) -> Result<Vec<V>, GraphError<V, EdgeId>> {
        self.require_vertex(vertex)?;
        Ok(self
            .outgoing
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(|edge| self.endpoints[edge].1)
            .collect())
    }

    fn neighbor_list_of(&self, vertex: V) -> Result<Vec<V>, GraphError<V, EdgeId>> {
        let mut list = self.predecessor_list_of(vertex)?;
        list.extend(self.successor_list_of(vertex)?);
        Ok(list)
    }
}
