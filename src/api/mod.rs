//! Thin client for the hospital REST backend.
//!
//! Parameters travel as path segments. Blank filter values become the
//! literal `null` placeholder the backend expects. Tokens are path segments
//! too, so log lines name the endpoint, never the URL.

pub mod appointments;
pub mod auth;
pub mod doctors;
pub mod patients;

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::AppConfig;

/// Placeholder sent in place of an absent path parameter.
pub const SENTINEL: &str = "null";

#[derive(Debug)]
pub enum ApiError {
    Url(String),
    Transport(reqwest::Error),
    Status { status: u16, message: Option<String> },
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Url(e) => write!(f, "Bad backend URL: {e}"),
            ApiError::Transport(e) => write!(f, "Backend unreachable: {e}"),
            ApiError::Status { status, message: Some(m) } => write!(f, "Backend answered {status}: {m}"),
            ApiError::Status { status, message: None } => write!(f, "Backend answered {status}"),
            ApiError::Decode(e) => write!(f, "Unexpected backend response: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e)
    }
}

impl ApiError {
    /// The backend refused the token (or the credentials).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }
}

/// Result of a create/delete call. `success` is true iff the status was 2xx.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub success: bool,
    pub message: String,
}

impl MutationOutcome {
    pub fn failed(message: &str) -> Self {
        Self { success: false, message: message.to_string() }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|e| ApiError::Url(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::Url(format!("{base_url} cannot carry a path")));
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        Self::new(&config.backend_url, config.backend_timeout)
    }

    /// Base URL plus path segments; each segment is percent-encoded on its own.
    /// `.` and `..` would be swallowed by URL normalisation, so they are refused.
    pub fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        if let Some(bad) = segments.iter().find(|s| is_dot_segment(s)) {
            return Err(ApiError::Url(format!("path segment {bad:?} cannot be sent")));
        }
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Url(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and return status plus JSON body (`Null` when the body is not JSON).
    async fn send(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<Value>,
    ) -> Result<(StatusCode, Value), ApiError> {
        let url = self.url(segments)?;
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let json = serde_json::from_str(&text).unwrap_or(Value::Null);
        Ok((status, json))
    }

    /// GET a JSON body, failing on non-2xx.
    pub(crate) async fn get_json(&self, endpoint: &str, segments: &[&str]) -> Result<Value, ApiError> {
        let (status, body) = self.send(Method::GET, segments, None).await?;
        if !status.is_success() {
            log::warn!("{endpoint}: backend answered {status}");
            return Err(ApiError::Status { status: status.as_u16(), message: message_of(&body) });
        }
        Ok(body)
    }

    /// GET a collection. Any failure is logged and reads as an empty list.
    pub(crate) async fn fetch_collection<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        segments: &[&str],
        envelope: &str,
    ) -> Vec<T> {
        match self.try_fetch_collection(endpoint, segments, envelope).await {
            Ok(items) => items,
            Err(e) => {
                log::error!("{endpoint}: {e}");
                Vec::new()
            }
        }
    }

    /// GET a collection, keeping the failure for callers that must tell errors apart.
    pub(crate) async fn try_fetch_collection<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        segments: &[&str],
        envelope: &str,
    ) -> Result<Vec<T>, ApiError> {
        let body = self.get_json(endpoint, segments).await?;
        unwrap_collection(body, envelope).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST/PUT/DELETE with the `{success, message}` contract.
    pub(crate) async fn mutate(
        &self,
        endpoint: &str,
        method: Method,
        segments: &[&str],
        body: Option<Value>,
        transport_message: &str,
    ) -> MutationOutcome {
        match self.send(method, segments, body).await {
            Ok((status, body)) => {
                let success = status.is_success();
                if !success {
                    log::warn!("{endpoint}: backend answered {status}");
                }
                let message = message_of(&body).unwrap_or_else(|| {
                    if success {
                        "Done.".to_string()
                    } else {
                        format!("Request failed with status {}", status.as_u16())
                    }
                });
                MutationOutcome { success, message }
            }
            Err(e) => {
                log::error!("{endpoint}: {e}");
                MutationOutcome::failed(transport_message)
            }
        }
    }

    /// POST credentials; a 2xx answer carrying a non-empty `token` is the only success.
    pub(crate) async fn login(&self, endpoint: &str, segments: &[&str], body: Value) -> Result<String, ApiError> {
        let (status, body) = self.send(Method::POST, segments, Some(body)).await?;
        if !status.is_success() {
            log::info!("{endpoint}: login refused with {status}");
            return Err(ApiError::Status { status: status.as_u16(), message: message_of(&body) });
        }
        body.get("token")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .ok_or_else(|| ApiError::Decode("login response has no token".to_string()))
    }
}

/// Blank or missing values become [`SENTINEL`], and so do `.` and `..`,
/// which cannot travel as a path segment.
pub fn or_sentinel(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() && !is_dot_segment(v) => v,
        _ => SENTINEL,
    }
}

fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

/// Accept either a bare JSON array or an object holding the array under `field`.
/// Objects without the field (and `null`) read as empty.
pub fn unwrap_collection<T: DeserializeOwned>(body: Value, field: &str) -> Result<Vec<T>, serde_json::Error> {
    match body {
        Value::Array(_) => serde_json::from_value(body),
        Value::Object(mut map) => match map.remove(field) {
            Some(Value::Null) | None => Ok(Vec::new()),
            Some(inner) => serde_json::from_value(inner),
        },
        _ => Ok(Vec::new()),
    }
}

fn message_of(body: &Value) -> Option<String> {
    body.get("message")
        .or_else(|| body.get("error"))
        .and_then(Value::as_str)
        .map(String::from)
}
