//! Error types for effect parameterization and cooking.

use meshfx_sample::SampleError;
use thiserror::Error;

/// Result type alias for effect operations.
pub type EffectResult<T> = Result<T, EffectError>;

/// Errors that can occur while configuring or cooking an effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffectError {
    /// The parameter name was never declared.
    #[error("unknown parameter '{0}'")]
    UnknownParam(String),

    /// The parameter exists but holds a different kind of value.
    #[error("parameter '{name}' holds {found}, not {expected}")]
    ParamKind {
        /// The parameter that was accessed.
        name: String,
        /// The kind the caller asked for.
        expected: &'static str,
        /// The kind actually declared.
        found: &'static str,
    },

    /// The effect declares parameters but its mesh engine is not shipped.
    #[error("effect '{0}' is declaration-only: its engine is not included in this workspace")]
    BackendRequired(&'static str),

    /// Volume sampling failed.
    #[error(transparent)]
    Sample(#[from] SampleError),
}
