//! Error types for gateway REST calls.
//!
//! Internal operations return these variants; the public client converts
//! every one into a `{"error": "..."}` result object at its boundary, so
//! the Display text here is what callers see.

use thiserror::Error;

/// Failure of one gateway REST call.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A required credential variable is missing from the environment.
    #[error("Gateway credential {0} is not set in the environment")]
    Credentials(&'static str),

    /// The host and path did not combine into a valid URL.
    #[error("Error constructing url with {0}")]
    UrlConstruction(String),

    /// The params object could not be serialized into a request body.
    #[error("Got error creating params body: {0}")]
    RequestBody(serde_json::Error),

    /// The request could not be sent or the response body not read.
    #[error("Error sending request to the gateway: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body is not JSON.
    #[error("Error creating json from response: {0}")]
    ResponseParse(serde_json::Error),

    /// The response parsed, but not to a JSON object.
    #[error("Response from server is not a JSON object")]
    ResponseShape,
}

/// Convenience Result type alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;
