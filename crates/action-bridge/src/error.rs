//! Error types for the invocation bridge.
//!
//! Defines the per-invocation failure taxonomy. Every variant's Display text
//! is the exact message that ends up in the `{"error": ...}` envelope, so
//! wording changes here are wire-visible.

use thiserror::Error;

/// Failures while converting between raw bytes and JSON values.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input bytes are not a well-formed JSON document.
    #[error("Failed to parse input JSON: {0}")]
    Decode(serde_json::Error),

    /// Input bytes do not decode to the handler's input type.
    ///
    /// Carries the original input (quotes escaped) so the failing document
    /// can be reconstructed from the log line.
    #[error("Failed to decode JSON string {input} to the handler input type: {source}")]
    DecodeTyped {
        /// The original input with `"` escaped as `\"`.
        input: String,
        /// The structural decode error.
        source: serde_json::Error,
    },

    /// The handler's result is not a JSON object or array.
    #[error("Error serializing result, value is not a JSON object or array")]
    InvalidDocument,

    /// The handler's result value could not be serialized.
    #[error("Failed to encode result to JSON: {0}")]
    Encode(serde_json::Error),

    /// The typed handler's output could not be serialized.
    #[error("Failed to encode handler output to JSON: {0}")]
    EncodeTyped(serde_json::Error),
}

/// Terminal failure of one invocation.
///
/// Converted into an `Envelope::Error` at the point of failure and emitted;
/// never propagated past the run functions.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The handler requires input but the host supplied none.
    #[error("No input given but function requires input!")]
    InputMissing,

    /// Decoding or encoding failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The user handler returned a failure.
    #[error("Failed running function with error: {0}")]
    Handler(anyhow::Error),

    /// The handler completed without producing a result where one is required.
    #[error("Action handler callback did not return response or error.")]
    MissingResult,
}

/// Failures writing an envelope to one of the two output surfaces.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Write or flush to the human-readable log stream failed.
    #[error("failed to write envelope to the log stream: {0}")]
    Log(#[source] std::io::Error),

    /// Write or flush to the structured output stream failed.
    #[error("failed to write envelope to the structured stream: {0}")]
    Structured(#[source] std::io::Error),
}

/// Convenience Result type alias for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
