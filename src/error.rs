use thiserror::Error;

/// Unified error type for the client.
///
/// Authentication failures are not errors: key verification reports them
/// through [`crate::KeyVerification`], and trial registration through
/// [`crate::TrialRequestResponse`]. Only transport failures, precondition
/// violations and non-2xx audio responses surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport failure. Propagates straight from the HTTP layer;
    /// no retries are attempted.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// An authenticated operation was invoked before any API key was set.
    #[error("API key not set")]
    ApiKeyNotSet,

    /// The audio endpoint answered with a non-200 status.
    #[error("remote error: status code {status} ({body})")]
    Remote { status: u16, body: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
