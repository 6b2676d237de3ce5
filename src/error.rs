//! Error types for the QUANTA tooling

use thiserror::Error;

/// Result type alias for tool operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating assets or submitting the contact form
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to launch the headless browser
    #[error("Browser initialization failed: {0}")]
    InitializationError(String),

    /// Failed to parse or rasterize a vector image
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to print a document to PDF
    #[error("PDF generation failed: {0}")]
    PdfError(String),

    /// Failed to spawn an external command
    #[error("Failed to launch {0}")]
    LaunchError(String),

    /// Network error (transport failure or non-success status)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// A contact form field violates its constraint
    #[error("Invalid {field}: {reason}")]
    ValidationError { field: &'static str, reason: String },

    /// The contact form cannot perform the operation in its current status
    #[error("Invalid form state: {0}")]
    InvalidState(String),

    /// Filesystem error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CDP-specific error
    #[cfg(feature = "cdp")]
    #[error("CDP error: {0}")]
    CdpError(String),
}

#[cfg(feature = "cdp")]
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::CdpError(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::NetworkError(err.to_string())
    }
}
