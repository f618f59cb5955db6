//! Error taxonomy shared across the crate.

/// Convenience result type used across the crate.
pub type LoomResult<T> = Result<T, LoomError>;

/// Top-level error taxonomy used by compositor APIs.
///
/// Asset absence and malformed metadata are deliberately *not* represented
/// here: those degrade to "no contribution" inside the rules engine. Errors
/// of this type are reserved for caller misuse and for unexpected failures
/// caught once at the render entry point.
#[derive(thiserror::Error, Debug)]
pub enum LoomError {
    /// Invalid caller-provided data (bad scale, malformed cosmetics).
    #[error("validation error: {0}")]
    Validation(String),

    /// Unexpected failure while loading or shaping metadata.
    #[error("metadata error: {0}")]
    Metadata(String),

    /// Unexpected failure during a render pass.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LoomError {
    /// Build a [`LoomError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LoomError::Metadata`] value.
    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::Metadata(msg.into())
    }

    /// Build a [`LoomError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
