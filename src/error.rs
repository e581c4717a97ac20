//! Error types for the rendering surface

use thiserror::Error;

/// Result type alias for surface operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the rendering surface
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to launch the rendering surface
    #[error("Surface initialization failed: {0}")]
    InitializationError(String),

    /// Failed to load a document into the surface
    #[error("Failed to load document: {0}")]
    LoadError(String),

    /// Failed to capture a snapshot
    #[error("Rendering failed: {0}")]
    RenderError(String),
}
