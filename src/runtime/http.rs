//! The default JSON-over-HTTP transport, backed by `reqwest`.
//!
//! Behaves like a plain JSON fetch helper:
//!
//! - every request sends `Accept: application/json`;
//! - requests with a body also send `Content-Type: application/json`;
//! - the response body is parsed as JSON, `null` when empty or not JSON;
//! - a status outside `2xx` becomes [`TransportError::Http`], using the
//!   body's `message` field when present and the status reason otherwise.

use crate::framework::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use std::collections::HashMap;
use tracing::trace;

const JSON: &str = "application/json";

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured client (timeouts, proxies, default headers).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(to_reqwest(request.method), &request.url)
            .header(ACCEPT, JSON);
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, JSON).body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        let json = serde_json::from_str(&text).unwrap_or(Value::Null);
        trace!(status = status.as_u16(), bytes = text.len(), "Received response");

        if !status.is_success() {
            let message = json
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string());
            return Err(TransportError::Http {
                status: status.as_u16(),
                message,
                body: json,
            });
        }

        Ok(HttpResponse {
            status: status.as_u16(),
            headers,
            json,
        })
    }
}
