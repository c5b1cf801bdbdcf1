//! Protocol-layer errors.

use thiserror::Error;

/// Errors surfaced by command encoding, response parsing, and the client.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The engine answered with `success: false`.
    #[error("engine rejected '{command}': {message}")]
    CommandFailed {
        command: &'static str,
        message: String,
    },

    /// A response body did not have the shape the command requires.
    #[error("malformed '{command}' response body: {source}")]
    MalformedResponse {
        command: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A message on the wire was not valid JSON for the envelope.
    #[error("invalid protocol message: {0}")]
    InvalidMessage(#[source] serde_json::Error),

    /// The engine closed the connection before answering.
    #[error("connection closed by engine")]
    Disconnected,

    /// Transport-level failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
