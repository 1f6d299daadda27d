//! The single-line JSON envelope reported for every invocation.

use serde_json::{Map, Value};

/// The uniform output shape of one invocation.
///
/// `Error` and `Info` serialize to a JSON object with exactly one top-level
/// key; `Result` passes the already-encoded handler result through
/// unwrapped, since the result document's own keys are the contract with
/// the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    /// A successfully encoded handler result, emitted as-is.
    Result(String),

    /// A terminal invocation failure, emitted as `{"error": "..."}`.
    Error(String),

    /// An informational line under a free-form title key.
    Info {
        /// The single top-level key.
        title: String,
        /// The string value under the key.
        message: String,
    },
}

impl Envelope {
    /// Serialize to the single line written to both output surfaces.
    ///
    /// Goes through serde for `Error` and `Info` so messages containing
    /// quotes or backslashes still produce a valid JSON document.
    pub fn to_line(&self) -> String {
        match self {
            Self::Result(encoded) => encoded.clone(),
            Self::Error(message) => {
                let mut object = Map::new();
                object.insert("error".to_string(), Value::String(message.clone()));
                Value::Object(object).to_string()
            }
            Self::Info { title, message } => {
                let mut object = Map::new();
                object.insert(title.clone(), Value::String(message.clone()));
                Value::Object(object).to_string()
            }
        }
    }
}
