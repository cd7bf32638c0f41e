//! Error types for the mix engine.
//!
//! Library stages return [`MixError`]; the binary and the file helpers wrap
//! these in `anyhow` with context, the same way the rest of the CLI reports
//! failures.

use thiserror::Error;

use crate::track::NodeId;

/// Failures raised by the mix engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MixError {
    /// Spanning tree requested over zero tracks
    #[error("cannot build a spanning tree over an empty track collection")]
    EmptyGraph,

    /// No recorded connection between two tree nodes
    #[error("no path from track #{from} to track #{to}")]
    Unreachable { from: NodeId, to: NodeId },

    /// The metric produced a negative or NaN distance
    #[error("metric returned invalid distance {value} for tracks #{from} and #{to}")]
    InvalidDistance { from: NodeId, to: NodeId, value: f64 },

    /// Malformed summary line (1-based line number)
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Track field outside its valid range
    #[error("invalid track: {0}")]
    InvalidTrack(String),

    /// Precomputed distance table with the wrong shape
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),

    /// Settings that cannot produce a mix path
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience Result type using [`MixError`]
pub type Result<T> = std::result::Result<T, MixError>;
