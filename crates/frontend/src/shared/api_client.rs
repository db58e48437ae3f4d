//! HTTP transport for the catalog REST API
//!
//! One configured client (base URL + JSON headers) is shared by every request.
//! No retries, timeouts or cancellation: a call resolves or fails once.

use crate::shared::api_utils::ApiConfig;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::use_context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

const JSON_CONTENT_TYPE: &str = "application/json";

pub type ApiResult<T> = Result<T, ApiError>;

/// Ошибки обращения к API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response; `message` is what the backend said
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid request body: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            message: extract_error_message(status, body),
        }
    }

    /// Human-readable text for notifications
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Pull the most useful message out of an error response body
///
/// Looks at the `message`, `error` and `detail` fields of a JSON object, then at a
/// plain-text body, and falls back to `HTTP <status>`.
pub fn extract_error_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        for key in ["message", "error", "detail"] {
            if let Some(Value::String(text)) = map.get(key) {
                if !text.trim().is_empty() {
                    return text.trim().to_string();
                }
            }
        }
        return format!("HTTP {}", status);
    }

    // HTML error pages from proxies are not worth showing
    if !trimmed.is_empty() && !trimmed.starts_with('<') {
        return trimmed.to_string();
    }

    format!("HTTP {}", status)
}

/// Verbs of the REST API against paths relative to its root
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T>;

    /// Returns the response body, `Value::Null` when it is empty
    async fn post<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<Value>;

    /// Returns the response body, `Value::Null` when it is empty
    async fn put<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<Value>;

    async fn delete(&self, path: &str) -> ApiResult<()>;
}

/// Browser `fetch` client built on gloo-net
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Client provided by the app root, or one configured from the environment
    pub fn from_context() -> Self {
        use_context::<ApiClient>().unwrap_or_else(Self::from_env)
    }

    fn with_headers(builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Content-Type", JSON_CONTENT_TYPE)
            .header("Accept", JSON_CONTENT_TYPE)
    }

    fn with_body<B: Serialize>(builder: RequestBuilder, body: &B) -> ApiResult<Request> {
        Self::with_headers(builder)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))
    }

    async fn check(response: Response) -> ApiResult<Response> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_response(status, &body))
    }

    async fn send(request: Request) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await
    }

    async fn read_body(response: Response) -> ApiResult<Value> {
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Transport for ApiClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.config.url(path);
        log::debug!("GET {}", url);
        let response = Self::with_headers(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::check(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<Value> {
        let url = self.config.url(path);
        log::debug!("POST {}", url);
        let request = Self::with_body(Request::post(&url), body)?;
        let response = Self::send(request).await?;
        Self::read_body(response).await
    }

    async fn put<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<Value> {
        let url = self.config.url(path);
        log::debug!("PUT {}", url);
        let request = Self::with_body(Request::put(&url), body)?;
        let response = Self::send(request).await?;
        Self::read_body(response).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.config.url(path);
        log::debug!("DELETE {}", url);
        let response = Self::with_headers(Request::delete(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await?;
        Ok(())
    }
}
