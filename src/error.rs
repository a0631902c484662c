use thiserror::Error;

pub type PathResult<T> = Result<T, PathError>;

/// Errors produced when deriving or assembling paths.
///
/// All of these indicate a broken caller contract rather than a
/// transient condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The requested node range is negative or reversed.
    #[error("invalid range: {start} -- {end}")]
    InvalidRange { start: i128, end: i128 },

    /// The requested node range ends past the tail of the path.
    #[error("invalid range: {start} -- {end} (nodes in path: {len})")]
    OutOfBounds { start: usize, end: usize, len: usize },

    /// Assembled nodes and edges cannot form a path, which needs
    /// exactly one more node than edges.
    #[error("mismatched nodes ({nodes}) and edges ({edges})")]
    ArityMismatch { nodes: usize, edges: usize },
}
