//! Search client error types.

use thiserror::Error;

/// Errors that can occur when talking to the search backend.
#[derive(Debug, Error)]
pub enum SearchError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status code. `message` is the
    /// human-readable text derived from the error payload (or from the
    /// status code when no payload was sent) and is the full display form.
    #[error("{message}")]
    Backend {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Display message, already combining `error` and `detail`.
        message: String,
    },

    /// The backend answered 2xx but the body was neither a row array nor
    /// an object wrapping one.
    #[error("unexpected response format")]
    UnexpectedFormat,
}
