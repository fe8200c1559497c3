use thiserror::Error;

use crate::OperationKind;

/// Error produced by the cube engine.
///
/// None of these leave a model half-modified; an operation that fails has
/// not changed anything.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CubeError {
    /// Facelet string has the wrong length or an illegal symbol.
    #[error("malformed facelet state: {0}")]
    MalformedState(String),
    /// Some color does not appear exactly nine times.
    #[error("unbalanced facelet state: {0}")]
    UnbalancedState(String),
    /// Move token outside the vocabulary.
    #[error("unknown move {0:?}")]
    UnknownMove(String),
    /// Stickers that no arrangement of the physical cubies can produce.
    #[error("unsolvable permutation: {0}")]
    UnsolvablePermutation(String),
    /// Another operation is still in flight.
    #[error("busy with {0}")]
    Busy(OperationKind),
    /// The remote solver reported an error.
    #[error("solver error: {0}")]
    Solver(String),
}
