//! Error types for declaration generation.

use thiserror::Error;

/// Errors raised while turning metadata into declarations.
///
/// All of them are fatal for the run: nothing is persisted once one occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The fallback handed to the normalizer is empty or not a legal identifier.
    #[error("invalid fallback identifier '{fallback}': {reason}")]
    InvalidFallback {
        fallback: String,
        reason: &'static str,
    },

    /// An attribute's variable name cannot be emitted as an identifier.
    #[error("attribute '{logical_name}' has invalid variable name '{variable_name}'")]
    InvalidVariableName {
        logical_name: String,
        variable_name: String,
    },

    /// Two declarations or members ended up with the same identifier.
    #[error("duplicate identifier '{name}' in {scope}")]
    DuplicateIdentifier { scope: String, name: String },

    /// Two entities map to the same artifact file name.
    #[error("entities '{first}' and '{second}' both generate artifact '{name}'")]
    ArtifactCollision {
        name: String,
        first: String,
        second: String,
    },
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, CoreError>;
