//! The mutable graph model the adjacency cache is layered over.
//!
//! This module provides the read-only query surface the cache consumes
//! ([`GraphModel`]) and a reference implementation ([`DirectedMultigraph`])
//! that supports parallel edges and self-loops.

mod error;
mod model;
mod multigraph;

pub use error::*;
pub use model::*;
pub use multigraph::*;
