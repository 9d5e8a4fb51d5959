/// Monotonic counters bumped by the adjacency cache.
///
/// `seeds` counts full incident-list computations (one per vertex, role,
/// and lifetime-since-purge), `hits` counts queries answered from an
/// already-populated set, `edge_events` counts edge notifications applied,
/// and `purges` counts vertices whose cached entries were erased.
#[derive(Debug, Clone, Copy)]
pub struct CacheStats {
    seeds: usize,
    hits: usize,
    edge_events: usize,
    purges: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        CacheStats {
            seeds: 0,
            hits: 0,
            edge_events: 0,
            purges: 0,
        }
    }

    /// Record that a set was seeded from a full incident-list walk.
    pub fn bump_seeds(&mut self) {
        self.seeds += 1
    }

    /// Record that a query was answered without touching the model.
    pub fn bump_hits(&mut self) {
        self.hits += 1
    }

    /// Record that an edge added/removed notification was applied.
    pub fn bump_edge_events(&mut self) {
        self.edge_events += 1
    }

    /// Record that a removed vertex's cached entries were erased.
    pub fn bump_purges(&mut self) {
        self.purges += 1
    }

    pub fn get_seeds(&self) -> usize {
        self.seeds
    }

    pub fn get_hits(&self) -> usize {
        self.hits
    }

    pub fn get_edge_events(&self) -> usize {
        self.edge_events
    }

    pub fn get_purges(&self) -> usize {
        self.purges
    }

    /// Combine two counter sets, e.g. when aggregating over several caches.
    pub fn merge(&self, other: &CacheStats) -> CacheStats {
        CacheStats {
            seeds: self.seeds + other.seeds,
            hits: self.hits + other.hits,
            edge_events: self.edge_events + other.edge_events,
            purges: self.purges + other.purges,
        }
    }
}

impl Default for CacheStats {
    fn default() -> Self {
        CacheStats::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stats_initialized_to_zero() {
        let stats = CacheStats::new();
        assert_eq!(stats.get_seeds(), 0);
        assert_eq!(stats.get_hits(), 0);
        assert_eq!(stats.get_edge_events(), 0);
        assert_eq!(stats.get_purges(), 0);
    }

    #[test]
    fn default_matches_new() {
        let stats = CacheStats::default();
        assert_eq!(stats.get_seeds(), 0);
        assert_eq!(stats.get_hits(), 0);
    }

    #[test]
    fn bumps_are_independent() {
        let mut stats = CacheStats::new();
        stats.bump_seeds();
        stats.bump_hits();
        stats.bump_hits();
        stats.bump_edge_events();
        stats.bump_purges();

        assert_eq!(stats.get_seeds(), 1);
        assert_eq!(stats.get_hits(), 2);
        assert_eq!(stats.get_edge_events(), 1);
        assert_eq!(stats.get_purges(), 1);
    }

    #[test]
    fn merge_sums_fieldwise() {
        let mut left = CacheStats::new();
        left.bump_seeds();
        left.bump_hits();

        let mut right = CacheStats::new();
        right.bump_hits();
        right.bump_edge_events();

        let merged = left.merge(&right);
        assert_eq!(merged.get_seeds(), 1);
        assert_eq!(merged.get_hits(), 2);
        assert_eq!(merged.get_edge_events(), 1);
        assert_eq!(merged.get_purges(), 0);
    }

    #[test]
    fn merge_does_not_mutate_inputs() {
        let mut left = CacheStats::new();
        left.bump_seeds();
        let right = CacheStats::new();
        let _ = left.merge(&right);
        assert_eq!(left.get_seeds(), 1);
        assert_eq!(right.get_seeds(), 0);
    }
}
