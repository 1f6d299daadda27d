//! Gateway credentials, read once from the environment at process start.

use crate::error::{GatewayError, GatewayResult};
use std::fmt;

/// Environment variable carrying the gateway base URL.
pub const API_HOST_ENV: &str = "__OW_API_HOST";

/// Environment variable carrying the raw API key.
pub const API_KEY_ENV: &str = "__OW_API_KEY";

/// Immutable gateway credentials.
///
/// Constructed once at startup and passed by reference into
/// [`crate::GatewayClient`]; nothing mutates it afterwards.
#[derive(Clone)]
pub struct GatewayCredentials {
    /// Base URL of the gateway, e.g. `https://gateway.example.com`.
    pub api_host: String,
    /// The raw API key, used verbatim in the authorization header.
    pub api_key: String,
}

impl GatewayCredentials {
    /// Build credentials from explicit values.
    pub fn new(api_host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_host: api_host.into(),
            api_key: api_key.into(),
        }
    }

    /// Read credentials from the host-supplied environment.
    ///
    /// A missing or empty variable is a configuration error, not a panic;
    /// callers surface it as an error envelope.
    pub fn from_env() -> GatewayResult<Self> {
        Ok(Self {
            api_host: require_env(API_HOST_ENV)?,
            api_key: require_env(API_KEY_ENV)?,
        })
    }
}

fn require_env(name: &'static str) -> GatewayResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(GatewayError::Credentials(name)),
    }
}

impl fmt::Debug for GatewayCredentials {
    /// Omits the API key so credentials never leak through debug logging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayCredentials")
            .field("api_host", &self.api_host)
            .finish_non_exhaustive()
    }
}
