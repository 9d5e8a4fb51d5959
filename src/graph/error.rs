use std::fmt::Debug;

use thiserror::Error;

/// Failures raised by a graph model when a query names an identity the
/// model does not know about.
///
/// The model is the sole authority on graph membership; callers layered on
/// top of it (the adjacency cache in particular) propagate these errors
/// unmasked rather than adding their own validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError<V: Debug, E: Debug> {
    #[error("vertex {0:?} is not part of the graph")]
    UnknownVertex(V),

    #[error("edge {0:?} is not part of the graph")]
    UnknownEdge(E),
}
