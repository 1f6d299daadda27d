//! The gateway REST client.

use crate::config::GatewayCredentials;
use crate::error::{GatewayError, GatewayResult};
use crate::name::QualifiedName;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::Method;
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, warn};
use url::Url;

/// A single REST call against the gateway, built once per operation.
#[derive(Debug)]
struct CallSpec {
    path: String,
    params: Value,
    method: Method,
}

/// Client for the gateway's entity REST surface.
///
/// Every operation returns a JSON object whether the call succeeded or
/// failed; a failed call yields `{"error": "<description>"}`. Callers
/// inspect the returned object's keys, never a `Result`.
#[derive(Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    credentials: GatewayCredentials,
}

impl GatewayClient {
    /// Create a client over the given credentials.
    pub fn new(credentials: GatewayCredentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
        }
    }

    /// Invoke an action by qualified name.
    ///
    /// `blocking` selects whether the gateway waits for the activation to
    /// complete before responding.
    pub async fn invoke_action(
        &self,
        action: &str,
        params: &Map<String, Value>,
        blocking: bool,
    ) -> Map<String, Value> {
        self.send(CallSpec {
            path: action_path(&QualifiedName::parse(action), blocking),
            params: Value::Object(params.clone()),
            method: Method::POST,
        })
        .await
    }

    /// Fire a trigger by qualified name.
    pub async fn fire_trigger(&self, trigger: &str, params: &Map<String, Value>) -> Map<String, Value> {
        self.send(CallSpec {
            path: fire_trigger_path(&QualifiedName::parse(trigger)),
            params: Value::Object(params.clone()),
            method: Method::POST,
        })
        .await
    }

    /// Create a trigger by qualified name.
    pub async fn create_trigger(
        &self,
        trigger: &str,
        params: &Map<String, Value>,
    ) -> Map<String, Value> {
        self.send(CallSpec {
            path: trigger_path(&QualifiedName::parse(trigger)),
            params: Value::Object(params.clone()),
            method: Method::PUT,
        })
        .await
    }

    /// Create a rule binding a trigger to an action.
    pub async fn create_rule(
        &self,
        rule: &str,
        trigger: &str,
        action: &str,
    ) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("trigger".to_string(), Value::String(trigger.to_string()));
        params.insert("action".to_string(), Value::String(action.to_string()));

        self.send(CallSpec {
            path: rule_path(&QualifiedName::parse(rule)),
            params: Value::Object(params),
            method: Method::PUT,
        })
        .await
    }

    async fn send(&self, spec: CallSpec) -> Map<String, Value> {
        match self.try_send(&spec).await {
            Ok(object) => object,
            Err(err) => {
                warn!(path = %spec.path, error = %err, "gateway call failed");
                error_object(&err)
            }
        }
    }

    async fn try_send(&self, spec: &CallSpec) -> GatewayResult<Map<String, Value>> {
        let raw_url = format!("{}{}", self.credentials.api_host, spec.path);
        let url =
            Url::parse(&raw_url).map_err(|_| GatewayError::UrlConstruction(raw_url.clone()))?;
        let body = serde_json::to_vec(&spec.params).map_err(GatewayError::RequestBody)?;

        debug!(%url, method = %spec.method, "sending gateway request");

        let response = self
            .http
            .request(spec.method.clone(), url)
            .header("Content-Type", "application/json")
            .header("Authorization", self.authorization_value())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(status = %status, bytes = bytes.len(), "gateway response received");

        // The gateway reports failures through JSON bodies, so the body is
        // returned to the caller regardless of status.
        let payload: Value =
            serde_json::from_slice(&bytes).map_err(GatewayError::ResponseParse)?;
        match payload {
            Value::Object(object) => Ok(object),
            _ => Err(GatewayError::ResponseShape),
        }
    }

    /// The gateway expects the raw key bytes base64-encoded, with no
    /// `user:password` framing.
    fn authorization_value(&self) -> String {
        format!("Basic {}", BASE64.encode(self.credentials.api_key.as_bytes()))
    }
}

impl fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayClient")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

fn action_path(name: &QualifiedName, blocking: bool) -> String {
    format!(
        "/api/v1/namespaces/{}/actions/{}?blocking={}",
        escape_segments(&name.namespace),
        escape_segments(&name.name),
        blocking
    )
}

fn fire_trigger_path(name: &QualifiedName) -> String {
    format!(
        "/api/v1/namespaces/{}/triggers/{}?blocking=true",
        escape_segments(&name.namespace),
        escape_segments(&name.name)
    )
}

fn trigger_path(name: &QualifiedName) -> String {
    format!(
        "/api/v1/namespaces/{}/triggers/{}",
        escape_segments(&name.namespace),
        escape_segments(&name.name)
    )
}

fn rule_path(name: &QualifiedName) -> String {
    format!(
        "/api/v1/namespaces/{}/rules/{}",
        escape_segments(&name.namespace),
        escape_segments(&name.name)
    )
}

/// Escape a name for use inside a URL path, keeping `/` as a separator so
/// packaged names keep their shape.
fn escape_segments(name: &str) -> String {
    name.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn error_object(err: &GatewayError) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert("error".to_string(), Value::String(err.to_string()));
    object
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(host: &str) -> GatewayClient {
        GatewayClient::new(GatewayCredentials::new(host, "my-raw-key"))
    }

    #[test]
    fn action_path_carries_blocking_flag() {
        let name = QualifiedName::parse("/whisk.system/samples/date");
        assert_eq!(
            action_path(&name, true),
            "/api/v1/namespaces/whisk.system/actions/samples/date?blocking=true"
        );
        assert_eq!(
            action_path(&name, false),
            "/api/v1/namespaces/whisk.system/actions/samples/date?blocking=false"
        );
    }

    #[test]
    fn bare_names_resolve_into_the_default_namespace_path() {
        let name = QualifiedName::parse("myaction");
        assert_eq!(
            action_path(&name, true),
            "/api/v1/namespaces/_/actions/myaction?blocking=true"
        );
    }

    #[test]
    fn trigger_paths_differ_between_fire_and_create() {
        let name = QualifiedName::parse("/ns/events");
        assert_eq!(
            fire_trigger_path(&name),
            "/api/v1/namespaces/ns/triggers/events?blocking=true"
        );
        assert_eq!(trigger_path(&name), "/api/v1/namespaces/ns/triggers/events");
    }

    #[test]
    fn rule_path_has_no_query() {
        let name = QualifiedName::parse("/ns/sync-rule");
        assert_eq!(rule_path(&name), "/api/v1/namespaces/ns/rules/sync-rule");
    }

    #[test]
    fn escape_segments_keeps_separators_and_escapes_contents() {
        assert_eq!(escape_segments("samples/date"), "samples/date");
        assert_eq!(escape_segments("my action"), "my%20action");
        assert_eq!(escape_segments("pkg name/sub action"), "pkg%20name/sub%20action");
        assert_eq!(escape_segments("whisk.system"), "whisk.system");
    }

    #[test]
    fn authorization_value_encodes_raw_key_bytes() {
        let client = client("https://gateway.example.com");
        // base64("my-raw-key"), no user:password framing
        assert_eq!(client.authorization_value(), "Basic bXktcmF3LWtleQ==");
    }

    #[tokio::test]
    async fn invalid_host_returns_error_object() {
        let client = client("not a url");
        let result = client.invoke_action("myaction", &Map::new(), true).await;

        assert_eq!(result.len(), 1);
        let message = result.get("error").unwrap().as_str().unwrap();
        assert!(message.starts_with("Error constructing url with"), "got: {message}");
    }

    #[tokio::test]
    async fn unreachable_host_returns_error_object() {
        // Nothing listens on port 9 of localhost; the connection is refused.
        let client = client("http://127.0.0.1:9");
        let result = client.invoke_action("myaction", &Map::new(), true).await;

        assert_eq!(result.len(), 1);
        assert!(result.contains_key("error"));
    }

    #[tokio::test]
    async fn fire_trigger_with_unreachable_host_returns_error_object() {
        let client = client("http://127.0.0.1:9");
        let mut params = Map::new();
        params.insert("payload".to_string(), json!({"n": 1}));

        let result = client.fire_trigger("/ns/events", &params).await;
        assert!(result.contains_key("error"));
    }

    #[tokio::test]
    async fn create_rule_with_unreachable_host_returns_error_object() {
        let client = client("http://127.0.0.1:9");
        let result = client
            .create_rule("my-rule", "/ns/my-trigger", "/ns/my-action")
            .await;
        assert!(result.contains_key("error"));
    }
}
