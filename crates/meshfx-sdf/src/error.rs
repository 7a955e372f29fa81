//! Error types for distance queries.

use thiserror::Error;

/// Result type for oracle construction.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur while building a distance oracle.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Mesh has no faces, so no surface exists to measure against.
    #[error("mesh has no faces")]
    EmptyMesh,
}
