//! Pipeline error types.

use thiserror::Error;

/// Errors surfaced by the tessellation pipeline.
///
/// Every other condition is handled totally: float edge cases go through
/// epsilon-tolerant comparisons, never errors. No stage retries internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// A caller programming error: missing points, too few points, or a
    /// non-positive granularity. Surfaced immediately, never retried.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Ear clipping could not make progress. The boundary is
    /// self-intersecting or degenerate; the pipeline does not attempt repair.
    #[error("malformed polygon: triangulation cannot make progress")]
    MalformedPolygon,
}

/// Result alias used throughout the pipeline.
pub type Result<T> = std::result::Result<T, PipelineError>;
