//! Error type definitions.

use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Error types for rendering-capability failures.
///
/// A render failure aborts the remaining render steps of the current load
/// cycle; views already rendered in that cycle are left as-is.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A fixed display target was missing from the surface.
    #[error("Display target not found: {0}")]
    TargetMissing(&'static str),

    /// The surface rejected the draw operation.
    #[error("Surface draw failed: {0}")]
    DrawFailed(String),
}
