use crate::graph::GraphModel;

/// Observer contract for structural graph edits.
///
/// A listener receives exactly four kinds of notification, delivered
/// synchronously and in the same order the edits occur. The borrow of the
/// model passed alongside each event reflects the graph *after* the edit
/// has been applied.
///
/// All handlers default to no-ops so implementors only write out the
/// events they care about.
///
/// # Ordering contract
/// A notification source must remove all of a vertex's incident edges
/// (delivering the corresponding [`edge_removed`] notifications) before it
/// delivers [`vertex_removed`] for that vertex. Listeners rely on this
/// rather than re-checking the model.
///
/// [`edge_removed`]: GraphListener::edge_removed
/// [`vertex_removed`]: GraphListener::vertex_removed
pub trait GraphListener<G: GraphModel> {
    /// An edge was added. Endpoints are resolvable through `graph`.
    fn edge_added(&mut self, graph: &G, edge: G::Edge) {
        let _ = (graph, edge);
    }

    /// An edge was removed. The endpoints are carried directly because the
    /// edge id no longer resolves through the model.
    fn edge_removed(&mut self, graph: &G, source: G::Vertex, target: G::Vertex) {
        let _ = (graph, source, target);
    }

    /// A vertex was added.
    fn vertex_added(&mut self, graph: &G, vertex: G::Vertex) {
        let _ = (graph, vertex);
    }

    /// A vertex was removed, after all of its incident edges.
    fn vertex_removed(&mut self, graph: &G, vertex: G::Vertex) {
        let _ = (graph, vertex);
    }
}
