use std::cell::RefCell;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

use hashbrown::HashMap;
use tracing::{trace, warn};

use crate::{
    cache::NeighborSet,
    events::{GraphListener, ListenableGraph},
    graph::{DirectedMultigraph, GraphModel, ModelError},
    statistics::CacheStats,
};

/// Lazily-populated cache of each vertex's predecessors, successors, and
/// combined neighbors.
///
/// The first query for a vertex/role pair asks the graph model for the
/// full incident list and seeds a [`NeighborSet`] from it; every later
/// query returns the cached set without touching the model. Structural
/// edits are consumed as [`GraphListener`] notifications, which update
/// only the sets that are already populated. A vertex nobody has queried
/// costs nothing to keep correct: its slot stays absent and the first
/// future query computes it against the then-current graph.
///
/// # Invariants
/// - Absent map entry means "not yet computed"; a present entry with an
///   empty set means "computed, no adjacency". The two are never
///   conflated.
/// - For every vertex with both directional sets populated, the neighbor
///   set equals the union of the predecessor and successor sets, after
///   every edit.
/// - A populated set is never stale: every edit event that affects it is
///   applied before the mutating call returns.
///
/// # Preconditions
/// Single logical writer, with notifications delivered synchronously in
/// edit order (see [`GraphListener`]). Queries may interleave with each
/// other but not with edits.
pub struct NeighborCache<G: GraphModel> {
    predecessors: HashMap<G::Vertex, NeighborSet<G::Vertex>>,
    successors: HashMap<G::Vertex, NeighborSet<G::Vertex>>,
    neighbors: HashMap<G::Vertex, NeighborSet<G::Vertex>>,
    stats: CacheStats,
}

impl<G: GraphModel> NeighborCache<G> {
    pub fn new() -> Self {
        NeighborCache {
            predecessors: HashMap::new(),
            successors: HashMap::new(),
            neighbors: HashMap::new(),
            stats: CacheStats::new(),
        }
    }

    /// Returns the deduplicated predecessors of `vertex`, seeding the
    /// cached set from the model on first access.
    ///
    /// Fails only if the model does not know `vertex`; the model's error
    /// is propagated unmasked.
    pub fn predecessors_of(
        &mut self,
        graph: &G,
        vertex: G::Vertex,
    ) -> Result<&NeighborSet<G::Vertex>, ModelError<G>> {
        fetch(&mut self.predecessors, &mut self.stats, vertex, || {
            trace!(?vertex, "seeding predecessor set");
            graph.predecessor_list_of(vertex)
        })
    }

    /// Returns the deduplicated successors of `vertex`, seeding the cached
    /// set from the model on first access.
    pub fn successors_of(
        &mut self,
        graph: &G,
        vertex: G::Vertex,
    ) -> Result<&NeighborSet<G::Vertex>, ModelError<G>> {
        fetch(&mut self.successors, &mut self.stats, vertex, || {
            trace!(?vertex, "seeding successor set");
            graph.successor_list_of(vertex)
        })
    }

    /// Returns the deduplicated neighbors of `vertex` in either direction,
    /// seeding the cached set from the model on first access.
    pub fn neighbors_of(
        &mut self,
        graph: &G,
        vertex: G::Vertex,
    ) -> Result<&NeighborSet<G::Vertex>, ModelError<G>> {
        fetch(&mut self.neighbors, &mut self.stats, vertex, || {
            trace!(?vertex, "seeding neighbor set");
            graph.neighbor_list_of(vertex)
        })
    }

    /// Counters describing the cache's work so far.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

/// Returns the cached set for `vertex`, seeding it through `compute` if
/// this is the first access. `compute` runs at most once per vertex per
/// map over the cache's lifetime (barring a purge).
fn fetch<'a, V, E, F>(
    map: &'a mut HashMap<V, NeighborSet<V>>,
    stats: &mut CacheStats,
    vertex: V,
    compute: F,
) -> Result<&'a NeighborSet<V>, E>
where
    V: Copy + Eq + Hash,
    F: FnOnce() -> Result<Vec<V>, E>,
{
    if !map.contains_key(&vertex) {
        let seeded = NeighborSet::seeded(compute()?);
        stats.bump_seeds();
        map.insert(vertex, seeded);
    } else {
        stats.bump_hits();
    }
    Ok(&map[&vertex])
}

impl<G: GraphModel> Default for NeighborCache<G> {
    fn default() -> Self {
        NeighborCache::new()
    }
}

impl<G: GraphModel> GraphListener<G> for NeighborCache<G> {
    fn edge_added(&mut self, graph: &G, edge: G::Edge) {
        let (source, target) = match (graph.edge_source(edge), graph.edge_target(edge)) {
            (Ok(source), Ok(target)) => (source, target),
            _ => {
                warn!(?edge, "edge-added notification for an unresolvable edge, ignoring");
                return;
            }
        };
        self.stats.bump_edge_events();

        // Touch only already-populated sets; an absent slot stays absent
        // and will be seeded against the current graph on first query.
        if let Some(set) = self.successors.get_mut(&source) {
            set.add(target);
        }
        if let Some(set) = self.predecessors.get_mut(&target) {
            set.add(source);
        }
        if let Some(set) = self.neighbors.get_mut(&source) {
            set.add(target);
        }
        if let Some(set) = self.neighbors.get_mut(&target) {
            set.add(source);
        }
    }

    fn edge_removed(&mut self, _graph: &G, source: G::Vertex, target: G::Vertex) {
        self.stats.bump_edge_events();

        if let Some(set) = self.successors.get_mut(&source) {
            set.remove(target);
        }
        if let Some(set) = self.predecessors.get_mut(&target) {
            set.remove(source);
        }
        if let Some(set) = self.neighbors.get_mut(&source) {
            set.remove(target);
        }
        if let Some(set) = self.neighbors.get_mut(&target) {
            set.remove(source);
        }
    }

    fn vertex_added(&mut self, _graph: &G, _vertex: G::Vertex) {
        // Nothing to cache until the vertex has incident edges.
    }

    fn vertex_removed(&mut self, _graph: &G, vertex: G::Vertex) {
        let purged = self.predecessors.remove(&vertex).is_some()
            | self.successors.remove(&vertex).is_some()
            | self.neighbors.remove(&vertex).is_some();
        if purged {
            self.stats.bump_purges();
            trace!(?vertex, "purged cached adjacency");
        }
    }
}

impl<V: Copy + Eq + Hash + Debug + 'static> NeighborCache<DirectedMultigraph<V>> {
    /// Creates a cache and registers it as a listener on `graph`.
    ///
    /// The returned handle is the caller's query access; the graph holds
    /// the other reference and drives the event handlers.
    pub fn attached(graph: &mut ListenableGraph<V>) -> Rc<RefCell<Self>> {
        let cache = Rc::new(RefCell::new(NeighborCache::new()));
        graph.add_listener(cache.clone());
        cache
    }
}
