//! Error types for the clock rendering engine

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up a render pass
///
/// Rendering itself is pure and cannot fail: every error is raised at
/// construction time, before any drawing starts.
#[derive(Error, Debug)]
pub enum Error {
    /// Raster buffer dimensions must both be non-zero
    #[error("Invalid buffer dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Invalid render configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
