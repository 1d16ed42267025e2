//! API client for the theatre box office service.
//!
//! Requests are dispatched against a fixed origin with a bearer token
//! injected from the session store when one is present. This layer does not
//! interpret HTTP status codes: a 4xx/5xx response is returned to the caller
//! as-is, and only transport-level failures are errors.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::Serialize;
use tracing::{debug, error};

use crate::session::{SessionStore, ACCESS_TOKEN};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Caller-supplied request configuration.
///
/// Header precedence is explicit: the client first sets its defaults
/// (`Content-Type: application/json`, plus `Authorization` when a token is
/// stored), then applies `headers` in order, so caller values win on key
/// collision.
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
        }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Options for sending `body` as a JSON payload.
    pub fn json<B: Serialize>(method: Method, body: &B) -> Result<Self, serde_json::Error> {
        Ok(Self {
            method,
            body: Some(serde_json::to_string(body)?),
            headers: Vec::new(),
        })
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// API client for the box office service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create a new API client against the given origin.
    pub fn new(base_url: impl Into<String>, store: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store,
        })
    }

    /// Dispatch a request to `<base_url><endpoint>`.
    ///
    /// Returns the raw response unmodified on success, whatever its status.
    /// Transport failures are logged and re-raised unchanged. No retry, no
    /// backoff.
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Response, ApiError> {
        if !endpoint.starts_with('/') {
            return Err(ApiError::InvalidEndpoint(endpoint.to_string()));
        }

        let url = format!("{}{}", self.base_url, endpoint);
        let headers = self.merged_headers(&options)?;

        debug!(method = %options.method, url = %url, "dispatching request");

        let mut builder = self.client.request(options.method, &url).headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        match builder.send().await {
            Ok(response) => Ok(response),
            Err(e) => {
                error!(url = %url, error = %e, "API request failed");
                Err(ApiError::Transport(e))
            }
        }
    }

    /// GET `endpoint` with default options.
    pub async fn get(&self, endpoint: &str) -> Result<Response, ApiError> {
        self.request(endpoint, RequestOptions::default()).await
    }

    /// POST `body` to `endpoint` as JSON.
    pub async fn post_json<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        let options = RequestOptions::json(Method::POST, body)?;
        self.request(endpoint, options).await
    }

    /// Defaults first, then caller headers in order so callers win on
    /// collision. The Authorization header is attached only for a non-empty
    /// stored token.
    fn merged_headers(&self, options: &RequestOptions) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.store.get(ACCESS_TOKEN)? {
            if !token.is_empty() {
                headers.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&format!("Bearer {}", token))?,
                );
            }
        }

        for (name, value) in &options.headers {
            let name: HeaderName = name
                .parse()
                .map_err(|_| ApiError::InvalidHeaderName(name.clone()))?;
            headers.insert(name, HeaderValue::from_str(value)?);
        }

        Ok(headers)
    }
}
