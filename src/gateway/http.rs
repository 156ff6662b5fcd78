//! HTTP client for the generation web API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::config::GatewayConfig;

use super::error::{GatewayError, RequestFailed};
use super::{Gateway, GenerateRequest, ImproveRequest};

/// Gateway speaking JSON over HTTP.
///
/// Both endpoints take a JSON body and answer `{"message": "<text>"}`.
pub struct HttpGateway {
    client: Client,
    base_url: String,
    generate_path: String,
    improve_path: String,
    api_key: Option<String>,
}

impl HttpGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            generate_path: config.generate_path.clone(),
            improve_path: config.improve_path.clone(),
            api_key: config.resolved_api_key(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &'static str,
        path: &str,
        body: &B,
    ) -> Result<String, GatewayError> {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4().to_string();

        tracing::debug!(
            endpoint,
            url = %url,
            request_id = %request_id,
            "Sending gateway request"
        );

        let start = Instant::now();
        let mut request = self
            .client
            .post(&url)
            .header("x-request-id", &request_id)
            .json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.inspect_err(|e| {
            tracing::warn!(endpoint, request_id = %request_id, error = %e, "Gateway unreachable");
        })?;

        let status = response.status();
        let response_text = response.text().await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let message = error_message(status.as_u16(), &response_text);
            tracing::warn!(
                endpoint,
                request_id = %request_id,
                status = %status,
                latency_ms,
                error = %message,
                "Gateway rejected request"
            );
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = parse_text(&response_text)?;
        tracing::info!(
            endpoint,
            request_id = %request_id,
            latency_ms,
            result_len = text.len(),
            "Gateway request completed"
        );
        Ok(text)
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, RequestFailed> {
        Ok(self
            .post("generate", &self.generate_path, request)
            .await?)
    }

    async fn improve(&self, request: &ImproveRequest) -> Result<String, RequestFailed> {
        Ok(self.post("improve", &self.improve_path, request).await?)
    }
}

/// Extract the generated text from a success body.
///
/// Reads `message`, falling back to `text`. A body with neither field
/// yields empty text: the request succeeded, the service just had
/// nothing to say.
fn parse_text(body: &str) -> Result<String, GatewayError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| GatewayError::Parse(e.to_string()))?;
    let Some(object) = value.as_object() else {
        return Err(GatewayError::Parse(
            "Expected a JSON object in response".to_string(),
        ));
    };

    match object.get("message").or_else(|| object.get("text")) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(GatewayError::Parse(format!(
            "Expected text in response, got {}",
            other
        ))),
    }
}

/// Best human-readable message for an error body.
///
/// Accepts `{"error": "..."}`, `{"error": {"message": "..."}}` and
/// `{"message": "..."}`.
fn error_message(status: u16, body: &str) -> String {
    let from_body = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        let error = v.get("error");
        error
            .and_then(Value::as_str)
            .or_else(|| error.and_then(|e| e.get("message")).and_then(Value::as_str))
            .or_else(|| v.get("message").and_then(Value::as_str))
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(String::from)
    });

    from_body.unwrap_or_else(|| format!("Request failed with status code {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_text_reads_message() {
        assert_eq!(parse_text(r#"{"message": "Hello, world!"}"#).unwrap(), "Hello, world!");
    }

    #[test]
    fn parse_text_accepts_text_alias() {
        assert_eq!(parse_text(r#"{"text": "hi"}"#).unwrap(), "hi");
    }

    #[test]
    fn parse_text_prefers_message_over_text() {
        assert_eq!(
            parse_text(r#"{"message": "from message", "text": "from text"}"#).unwrap(),
            "from message"
        );
    }

    #[test]
    fn parse_text_accepts_empty_or_missing() {
        assert_eq!(parse_text(r#"{"message": ""}"#).unwrap(), "");
        assert_eq!(parse_text("{}").unwrap(), "");
        assert_eq!(parse_text(r#"{"message": null}"#).unwrap(), "");
    }

    #[test]
    fn parse_text_rejects_malformed_bodies() {
        assert!(matches!(parse_text("not json"), Err(GatewayError::Parse(_))));
        assert!(matches!(parse_text(r#""hello""#), Err(GatewayError::Parse(_))));
        assert!(matches!(
            parse_text(r#"{"message": 42}"#),
            Err(GatewayError::Parse(_))
        ));
    }

    #[test]
    fn error_message_prefers_body_fields() {
        assert_eq!(error_message(401, r#"{"error": "Unauthorized"}"#), "Unauthorized");
        assert_eq!(
            error_message(400, r#"{"error": {"message": "bad mood"}}"#),
            "bad mood"
        );
        assert_eq!(error_message(500, r#"{"message": "model down"}"#), "model down");
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(
            error_message(502, "<html>Bad Gateway</html>"),
            "Request failed with status code 502"
        );
        assert_eq!(
            error_message(500, r#"{"error": ""}"#),
            "Request failed with status code 500"
        );
    }

    #[test]
    fn new_trims_trailing_slash() {
        let config = GatewayConfig {
            base_url: "http://localhost:3000/".into(),
            ..GatewayConfig::default()
        };
        let gateway = HttpGateway::new(&config).unwrap();
        assert_eq!(gateway.base_url(), "http://localhost:3000");
    }
}
