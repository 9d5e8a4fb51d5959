use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::GraphError;

/// Shorthand for the error type a [`GraphModel`] raises.
pub type ModelError<G> =
    GraphError<<G as GraphModel>::Vertex, <G as GraphModel>::Edge>;

/// Read-only query surface of a mutable graph.
///
/// This is the complete interface the adjacency cache needs from the graph
/// it is layered over: endpoint lookup for a single edge, and the three
/// incident-list computations used to seed a cache entry on first access.
///
/// # Multiplicities
/// The list queries return one entry per incident edge. A vertex connected
/// by three parallel edges appears three times in the corresponding list;
/// deduplication is the caller's concern. [`neighbor_list_of`] is defined
/// as the predecessor list followed by the successor list, so a self-loop
/// contributes its vertex once per role.
///
/// [`neighbor_list_of`]: GraphModel::neighbor_list_of
pub trait GraphModel {
    /// Opaque vertex identity.
    type Vertex: Copy + Eq + Hash + Debug;
    /// Opaque edge identity.
    type Edge: Copy + Eq + Debug;

    /// Returns whether `vertex` is currently part of the graph.
    fn contains_vertex(&self, vertex: Self::Vertex) -> bool;

    /// Returns the source endpoint of `edge`.
    fn edge_source(&self, edge: Self::Edge) -> Result<Self::Vertex, ModelError<Self>>;

    /// Returns the target endpoint of `edge`.
    fn edge_target(&self, edge: Self::Edge) -> Result<Self::Vertex, ModelError<Self>>;

    /// Returns the sources of all edges pointing at `vertex`, one entry
    /// per edge.
    fn predecessor_list_of(
        &self,
        vertex: Self::Vertex,
    ) -> Result<Vec<Self::Vertex>, ModelError<Self>>;

    /// Returns the targets of all edges leaving `vertex`, one entry per
    /// edge.
    fn successor_list_of(
        &self,
        vertex: Self::Vertex,
    ) -> Result<Vec<Self::Vertex>, ModelError<Self>>;

    /// Returns the directionless union of the predecessor and successor
    /// lists, one entry per incident edge endpoint.
    fn neighbor_list_of(
        &self,
        vertex: Self::Vertex,
    ) -> Result<Vec<Self::Vertex>, ModelError<Self>>;
}
