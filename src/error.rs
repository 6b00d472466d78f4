//! Engine error type.
//!
//! Only construction and loading can fail. Everything that happens inside a
//! frame is either a logged last-write-wins or a silent skip, so no system
//! returns these errors.

use thiserror::Error;

/// Errors raised while building an engine or loading its inputs.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Viewport dimensions are zero
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The drawing surface refused the requested configuration
    #[error("Drawing surface unavailable: {0}")]
    Surface(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Scene file is not valid JSON for the scene format
    #[error("Scene error: {0}")]
    Scene(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
