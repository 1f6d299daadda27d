//! Bytes ↔ JSON value conversion for invocation input and output.
//!
//! Strictly codec: wrapping results into envelopes is the runner's job.

use crate::error::CodecError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Decode raw input bytes into a generic JSON value.
///
/// Accepts any well-formed JSON document (object, array, or scalar).
pub fn decode(bytes: &[u8]) -> Result<Value, CodecError> {
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}

/// Decode raw input bytes into the handler's input type.
///
/// On failure the error carries the original input with quotes escaped, so
/// the offending document survives into a JSON error envelope intact.
pub fn decode_typed<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    serde_json::from_slice(bytes).map_err(|source| CodecError::DecodeTyped {
        input: escape_quotes(bytes),
        source,
    })
}

/// Encode a generic handler result into its single-line JSON document.
///
/// Only objects and arrays are valid action results; scalars and null are
/// rejected before serialization.
pub fn encode(value: &Value) -> Result<String, CodecError> {
    if !matches!(value, Value::Object(_) | Value::Array(_)) {
        return Err(CodecError::InvalidDocument);
    }
    serde_json::to_string(value).map_err(CodecError::Encode)
}

/// Encode a typed handler output into its single-line JSON document.
pub fn encode_typed<T: Serialize>(value: &T) -> Result<String, CodecError> {
    serde_json::to_string(value).map_err(CodecError::EncodeTyped)
}

fn escape_quotes(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Greeting {
        name: String,
    }

    #[test]
    fn decode_accepts_any_document_shape() {
        assert_eq!(decode(b"{\"a\":1}").unwrap(), json!({"a": 1}));
        assert_eq!(decode(b"[1,2,3]").unwrap(), json!([1, 2, 3]));
        assert_eq!(decode(b"42").unwrap(), json!(42));
        assert_eq!(decode(b"\"text\"").unwrap(), json!("text"));
        assert_eq!(decode(b"null").unwrap(), Value::Null);
    }

    #[test]
    fn decode_rejects_malformed_input() {
        let err = decode(b"{not json").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse input JSON:"));
    }

    #[test]
    fn encode_decode_round_trip() {
        for value in [
            json!({"name": "world", "count": 3, "nested": {"ok": true}}),
            json!([1, "two", null, {"three": 3.5}]),
        ] {
            let encoded = encode(&value).unwrap();
            assert_eq!(decode(encoded.as_bytes()).unwrap(), value);
        }
    }

    #[test]
    fn encode_rejects_scalar_results() {
        for value in [json!(1), json!("text"), json!(true), Value::Null] {
            let err = encode(&value).unwrap_err();
            assert!(matches!(err, CodecError::InvalidDocument));
        }
    }

    #[test]
    fn decode_typed_round_trip() {
        let input: Greeting = decode_typed(b"{\"name\":\"world\"}").unwrap();
        assert_eq!(input.name, "world");

        let encoded = encode_typed(&input).unwrap();
        assert_eq!(encoded, r#"{"name":"world"}"#);
    }

    #[test]
    fn decode_typed_failure_carries_escaped_input() {
        let err = decode_typed::<Greeting>(b"{\"name\":42}").unwrap_err();
        let message = err.to_string();
        assert!(message.contains(r#"{\"name\":42}"#), "got: {message}");
        assert!(message.starts_with("Failed to decode JSON string"));
    }
}
