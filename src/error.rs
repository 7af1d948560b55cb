use thiserror::Error;

/// Errors reported by the algorithms in this crate.
///
/// Every fallible operation validates its inputs at the public entry point and
/// reports exactly which precondition failed; inputs are never silently clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested index range cannot be operated on (empty where at least
    /// one element is required, or an index outside the range).
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// A 1-based order-statistic rank outside `1..=len`.
    #[error("rank {rank} out of bounds for range of length {len} (expected 1..={len})")]
    RankOutOfBounds { rank: usize, len: usize },

    /// A parameter or input value outside its documented domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A vertex id outside the graph.
    #[error("vertex {0} not found in graph")]
    VertexNotFound(usize),

    /// An internal invariant was violated; indicates a bug in this crate.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

impl Error {
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Error::InvalidRange(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Error::InternalInvariant(msg.into())
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
