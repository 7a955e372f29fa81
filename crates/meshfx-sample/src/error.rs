//! Error types for volume sampling.

use thiserror::Error;

/// Result type alias for sampling operations.
pub type SampleResult<T> = Result<T, SampleError>;

/// Errors that can occur during volume sampling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// The caller asked for zero points.
    #[error("number of points must be at least 1")]
    InvalidPointCount,
}
