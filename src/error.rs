// Error taxonomy for the whole tool. Every variant is terminal: the binary
// prints the message to stderr and exits with status 1. Nothing here is
// retried.

use std::time::Duration;

/// Longest remote error body we echo back to the user.
const MAX_REMOTE_MESSAGE: usize = 500;

/// Errors that can end a run.
#[derive(Debug, thiserror::Error)]
pub enum UgcError {
    /// `MAKEUGC_API_KEY` is unset or blank.
    #[error(
        "MAKEUGC_API_KEY environment variable is not set.\n\
         You need a MakeUGC Enterprise plan to get an API key.\n\
         Visit https://www.makeugc.ai/pricing or contact help@makeugc.ai"
    )]
    MissingCredential,

    /// Bad or missing command-line input.
    #[error("{0}")]
    Usage(String),

    /// The service answered with a non-success HTTP status.
    #[error("API error: {status} - {message}")]
    Remote { status: u16, message: String },

    /// The request never got a response (DNS, TLS, timeout, ...).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Success status, but the body is missing what we need.
    #[error("Unexpected response: {0}")]
    Protocol(String),

    /// The service reported that generation failed.
    #[error("Video generation failed: {0}")]
    JobFailed(String),

    /// The job was still running when the wait ceiling was reached.
    #[error("Timeout: video not ready after {} minutes.", .0.as_secs() / 60)]
    Timeout(Duration),

    /// Writing output failed (closed pipe and the like).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl UgcError {
    /// Builds a `Remote` error from a response status and raw body.
    pub fn remote(status: u16, body: &str) -> Self {
        Self::Remote {
            status,
            message: truncate_message(body.trim()),
        }
    }
}

fn truncate_message(text: &str) -> String {
    if text.chars().count() <= MAX_REMOTE_MESSAGE {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(MAX_REMOTE_MESSAGE).collect();
    cut.push_str("...");
    cut
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, UgcError>;
