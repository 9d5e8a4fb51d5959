use std::cell::RefCell;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

use tracing::trace;

use crate::events::GraphListener;
use crate::graph::{DirectedMultigraph, EdgeId, GraphError, GraphModel};

/// Shared handle to a listener registered on a [`ListenableGraph`].
pub type ListenerHandle<V> =
    Rc<RefCell<dyn GraphListener<DirectedMultigraph<V>>>>;

/// A [`DirectedMultigraph`] that notifies registered listeners about every
/// structural edit.
///
/// Each mutation is applied to the model first and then dispatched to all
/// listeners in registration order, synchronously, before the mutating call
/// returns. Single logical writer only; listeners are held behind
/// `Rc<RefCell<..>>`, so querying a listener while a mutation is still
/// dispatching is a borrow panic, not silent interleaving.
pub struct ListenableGraph<V: Copy + Eq + Hash + Debug> {
    model: DirectedMultigraph<V>,
    listeners: Vec<ListenerHandle<V>>,
}

impl<V: Copy + Eq + Hash + Debug> ListenableGraph<V> {
    pub fn new() -> Self {
        ListenableGraph {
            model: DirectedMultigraph::new(),
            listeners: Vec::new(),
        }
    }

    /// Read access to the wrapped model. All mutation goes through the
    /// notifying methods below.
    pub fn model(&self) -> &DirectedMultigraph<V> {
        &self.model
    }

    /// Registers `listener` behind every listener registered earlier.
    pub fn add_listener(&mut self, listener: ListenerHandle<V>) {
        self.listeners.push(listener);
    }

    /// Adds a vertex, notifying listeners if it was not already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if !self.model.add_vertex(vertex) {
            return false;
        }
        self.dispatch(|listener, model| listener.vertex_added(model, vertex));
        true
    }

    /// Adds a directed edge and notifies listeners.
    pub fn add_edge(&mut self, source: V, target: V) -> Result<EdgeId, GraphError<V, EdgeId>> {
        let edge = self.model.add_edge(source, target)?;
        self.dispatch(|listener, model| listener.edge_added(model, edge));
        Ok(edge)
    }

    /// Removes an edge and notifies listeners with the endpoints it had.
    pub fn remove_edge(&mut self, edge: EdgeId) -> Result<(V, V), GraphError<V, EdgeId>> {
        let (source, target) = self.model.remove_edge(edge)?;
        self.dispatch(|listener, model| listener.edge_removed(model, source, target));
        Ok((source, target))
    }

    /// Removes a vertex together with its incident edges.
    ///
    /// Incident edges are removed one at a time, each with its own
    /// edge-removed notification, and the vertex-removed notification is
    /// delivered last. This is the ordering contract listeners rely on.
    ///
    /// # Returns
    /// `true` if the vertex was present.
    pub fn remove_vertex(&mut self, vertex: V) -> bool {
        if !self.model.contains_vertex(vertex) {
            return false;
        }
        for edge in self.model.incident_edges(vertex) {
            let (source, target) = match self.model.remove_edge(edge) {
                Ok(endpoints) => endpoints,
                Err(_) => continue,
            };
            self.dispatch(|listener, model| listener.edge_removed(model, source, target));
        }
        self.model.remove_vertex(vertex);
        trace!(?vertex, "vertex removed, notifying listeners");
        self.dispatch(|listener, model| listener.vertex_removed(model, vertex));
        true
    }

    fn dispatch(
        &self,
        event: impl Fn(&mut dyn GraphListener<DirectedMultigraph<V>>, &DirectedMultigraph<V>),
    ) {
        for listener in &self.listeners {
            event(&mut *listener.borrow_mut(), &self.model);
        }
    }
}

impl<V: Copy + Eq + Hash + Debug> Default for ListenableGraph<V> {
    fn default() -> Self {
        ListenableGraph::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphModel;

    /// Records every notification as a readable line, in delivery order.
    #[derive(Default)]
    struct Recorder {
        log: Vec<String>,
    }

    impl GraphListener<DirectedMultigraph<u32>> for Recorder {
        fn edge_added(&mut self, graph: &DirectedMultigraph<u32>, edge: EdgeId) {
            let source = graph.edge_source(edge).unwrap();
            let target = graph.edge_target(edge).unwrap();
            self.log.push(format!("edge+ {source}->{target}"));
        }

        fn edge_removed(&mut self, _graph: &DirectedMultigraph<u32>, source: u32, target: u32) {
            self.log.push(format!("edge- {source}->{target}"));
        }

        fn vertex_added(&mut self, _graph: &DirectedMultigraph<u32>, vertex: u32) {
            self.log.push(format!("vertex+ {vertex}"));
        }

        fn vertex_removed(&mut self, _graph: &DirectedMultigraph<u32>, vertex: u32) {
            self.log.push(format!("vertex- {vertex}"));
        }
    }

    fn recorded() -> (ListenableGraph<u32>, Rc<RefCell<Recorder>>) {
        let mut graph = ListenableGraph::new();
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        graph.add_listener(recorder.clone());
        (graph, recorder)
    }

    #[test]
    fn edits_are_delivered_in_order() {
        let (mut graph, recorder) = recorded();
        graph.add_vertex(1);
        graph.add_vertex(2);
        let edge = graph.add_edge(1, 2).unwrap();
        graph.remove_edge(edge).unwrap();

        assert_eq!(
            recorder.borrow().log,
            vec!["vertex+ 1", "vertex+ 2", "edge+ 1->2", "edge- 1->2"]
        );
    }

    #[test]
    fn duplicate_vertex_does_not_notify() {
        let (mut graph, recorder) = recorded();
        graph.add_vertex(1);
        graph.add_vertex(1);
        assert_eq!(recorder.borrow().log, vec!["vertex+ 1"]);
    }

    #[test]
    fn failed_edge_insertion_does_not_notify() {
        let (mut graph, recorder) = recorded();
        graph.add_vertex(1);
        assert!(graph.add_edge(1, 99).is_err());
        assert_eq!(recorder.borrow().log, vec!["vertex+ 1"]);
    }

    #[test]
    fn vertex_removal_clears_incident_edges_first() {
        let (mut graph, recorder) = recorded();
        for v in 1..=3 {
            graph.add_vertex(v);
        }
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(3, 1).unwrap();
        recorder.borrow_mut().log.clear();

        assert!(graph.remove_vertex(1));

        let log = &recorder.borrow().log;
        assert_eq!(log.len(), 3);
        assert_eq!(log[2], "vertex- 1");
        assert!(log[..2].contains(&"edge- 1->2".to_string()));
        assert!(log[..2].contains(&"edge- 3->1".to_string()));
        assert_eq!(graph.model().edge_count(), 0);
        assert!(!graph.model().contains_vertex(1));
    }

    #[test]
    fn removing_a_looped_vertex_notifies_once_per_edge() {
        let (mut graph, recorder) = recorded();
        graph.add_vertex(1);
        graph.add_edge(1, 1).unwrap();
        recorder.borrow_mut().log.clear();

        graph.remove_vertex(1);
        assert_eq!(recorder.borrow().log, vec!["edge- 1->1", "vertex- 1"]);
    }

    #[test]
    fn listeners_are_notified_in_registration_order() {
        let mut graph = ListenableGraph::new();
        let first = Rc::new(RefCell::new(Recorder::default()));
        let second = Rc::new(RefCell::new(Recorder::default()));
        graph.add_listener(first.clone());
        graph.add_listener(second.clone());

        graph.add_vertex(1);
        assert_eq!(first.borrow().log, vec!["vertex+ 1"]);
        assert_eq!(second.borrow().log, vec!["vertex+ 1"]);
    }

    #[test]
    fn remove_unknown_vertex_is_a_quiet_no_op() {
        let (mut graph, recorder) = recorded();
        assert!(!graph.remove_vertex(4));
        assert!(recorder.borrow().log.is_empty());
    }
}
