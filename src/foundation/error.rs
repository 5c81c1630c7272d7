/// Convenience result type used across animtext.
pub type AnimTextResult<T> = Result<T, AnimTextError>;

/// Error taxonomy for the loading boundary.
///
/// Plan building and playback never fail: invalid animation input is coerced to defaults. Only
/// reading and parsing group definitions produces these errors.
#[derive(thiserror::Error, Debug)]
pub enum AnimTextError {
    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnimTextError {
    /// Build a [`AnimTextError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
