//! Counters describing the adjacency cache's work: seed computations,
//! cache hits, edit events applied, and purges. Used by tests to observe
//! that a populated set is never recomputed, and by the workload driver
//! for reporting.

mod stats;
pub use stats::*;
