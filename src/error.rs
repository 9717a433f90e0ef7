//! Unified error type for sdpipe.

use thiserror::Error;

/// Errors that can occur while generating or delivering images.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The remote service answered outside the 2xx range.
    #[error("Service error ({status}): {body}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Response body, carried verbatim as diagnostic context.
        body: String,
    },

    /// The network call could not be completed (DNS, connection, timeout).
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response carried a body this adapter cannot decode.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Settings could not be loaded or applied.
    #[error("Config error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
