/// Convenience result type used across fragfx.
pub type FragResult<T> = Result<T, FragError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum FragError {
    /// Malformed or inconsistent effect options. Raised at resolution time, before any fragment
    /// exists.
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing option documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Invalid input to the preview rasterizer.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FragError {
    /// Build a [`FragError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FragError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`FragError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
