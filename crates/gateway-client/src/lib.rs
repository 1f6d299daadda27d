//! REST client for invoking platform entities from inside an action.
//!
//! Actions can call back into the platform to invoke other actions, fire
//! triggers, and create triggers and rules. Every operation resolves the
//! entity's qualified name, builds an authenticated request against the
//! gateway, and returns the response as a JSON object. Failures come back
//! the same way, as `{"error": "..."}` objects, so callers always receive
//! one shape.
//!
//! Credentials come from the environment once at startup and stay immutable
//! for the life of the process.

mod client;
mod config;
mod error;
mod name;

pub use client::GatewayClient;
pub use config::{GatewayCredentials, API_HOST_ENV, API_KEY_ENV};
pub use error::{GatewayError, GatewayResult};
pub use name::{QualifiedName, DEFAULT_NAMESPACE};
