//! Incremental adjacency caching.
//!
//! Walking a vertex's incident edges on every adjacency query is O(E) and
//! becomes the dominating cost for algorithms that query repeatedly. The
//! structures here pay that walk once per vertex and role, then keep the
//! result consistent under structural edits delivered as events.
//!
//! # Submodules
//!
//! - [`NeighborSet`]: a multiplicity-aware set, counting how many parallel
//!   edges realize each adjacency while exposing only the deduplicated
//!   vertex view
//! - [`NeighborCache`]: the lazily-populated predecessor/successor/neighbor
//!   maps and the edit-event handlers that keep them synchronized

mod neighbor_cache;
mod neighbor_set;

pub use neighbor_cache::*;
pub use neighbor_set::*;
