//! HTTP API Wrappers
//!
//! Frontend bindings to the host's `/api/2/<resource>` endpoints, organized by domain.

mod item;
mod category;

use gloo_net::http::{Request, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config::WidgetConfig;

pub use item::*;
pub use category::*;

// ========================
// Errors
// ========================

/// Why a request did not produce the expected value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never got an HTTP response
    #[error("request failed: {0}")]
    Network(String),
    /// Non-2xx response, with the server's message when it sent one
    #[error("HTTP error {status}")]
    Status { status: u16, message: Option<String> },
    /// 2xx response whose body did not match the expected shape
    #[error("unexpected response (HTTP {status}): {reason}")]
    Decode { status: u16, reason: String },
}

impl ApiError {
    /// Status code shown to the user; 0 when there was no response
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Network(_) => 0,
            ApiError::Status { status, .. } | ApiError::Decode { status, .. } => *status,
        }
    }

    /// Server-provided message, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Error bodies are `{"msg": ...}` on create and `{"error": ...}` elsewhere.
#[derive(Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    error: Option<String>,
}

/// Pull a human readable message out of an error body.
///
/// Anything that is not a JSON object with a string `msg`/`error` yields `None`.
pub fn parse_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .msg
        .or(parsed.error)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

// ========================
// Encoding
// ========================

/// Characters left as-is in query strings and form bodies
const FORM: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// `application/x-www-form-urlencoded` serialization of key/value pairs
pub fn encode_pairs<K: AsRef<str>, V: AsRef<str>>(pairs: &[(K, V)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k.as_ref(), FORM),
                utf8_percent_encode(v.as_ref(), FORM)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Base URL of the configured resource, e.g. `/api/2/issue`
pub fn resource_url(config: &WidgetConfig) -> String {
    format!("{}/api/2/{}", config.api_base, config.resource.as_str())
}

/// Resource URL with a sub path and optional query string
pub fn endpoint(config: &WidgetConfig, path: &str, query: &[(&str, &str)]) -> String {
    let mut url = resource_url(config);
    if !path.is_empty() {
        url.push('/');
        url.push_str(path);
    }
    if !query.is_empty() {
        url.push('?');
        url.push_str(&encode_pairs(query));
    }
    url
}

// ========================
// Transport
// ========================

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("[API] GET {}", url);
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_json(response).await
}

async fn post_form(url: &str, pairs: &[(&str, &str)]) -> Result<Response, ApiError> {
    log::debug!("[API] POST {}", url);
    let response = Request::post(url)
        .header("Content-Type", "application/x-www-form-urlencoded; charset=UTF-8")
        .header("Accept", "application/json")
        .body(encode_pairs(pairs))
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await
}

/// Turn a non-2xx response into `ApiError::Status`
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = parse_error_message(&body);
    log::warn!("[API] {} -> {} {:?}", response.url(), status, message);
    Err(ApiError::Status { status, message })
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_ok(response).await?;
    let status = response.status();
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode { status, reason: e.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Resource;

    #[test]
    fn test_parse_error_message() {
        assert_eq!(
            parse_error_message(r#"{"msg": "Please enter a category"}"#),
            Some("Please enter a category".to_string())
        );
        assert_eq!(
            parse_error_message(r#"{"error": "Invalid issues ID"}"#),
            Some("Invalid issues ID".to_string())
        );
        assert_eq!(parse_error_message(r#"{"msg": "  "}"#), None);
        assert_eq!(parse_error_message("<html>Internal Server Error</html>"), None);
        assert_eq!(parse_error_message(""), None);
        assert_eq!(parse_error_message(r#"["msg"]"#), None);
    }

    #[test]
    fn test_encode_pairs() {
        assert_eq!(encode_pairs(&[("resolved", "0"), ("package", "census-2011")]), "resolved=0&package=census-2011");
        assert_eq!(
            encode_pairs(&[("description", "a&b=c d/é")]),
            "description=a%26b%3Dc%20d%2F%C3%A9"
        );
        assert_eq!(encode_pairs::<&str, &str>(&[]), "");
    }

    #[test]
    fn test_endpoints() {
        let mut config = WidgetConfig::new(Resource::Issue, "roads", "");
        assert_eq!(resource_url(&config), "/api/2/issue");
        assert_eq!(endpoint(&config, "resolve", &[]), "/api/2/issue/resolve");
        assert_eq!(
            endpoint(&config, "autocomplete", &[("term", "pe")]),
            "/api/2/issue/autocomplete?term=pe"
        );

        config.api_base = "https://data.example.org".into();
        config.resource = Resource::Todo;
        assert_eq!(endpoint(&config, "", &[("limit", "1")]), "https://data.example.org/api/2/todo?limit=1");
    }

    #[test]
    fn test_error_status() {
        assert_eq!(ApiError::Network("offline".into()).status(), 0);
        let err = ApiError::Status { status: 403, message: Some("nope".into()) };
        assert_eq!(err.status(), 403);
        assert_eq!(err.server_message(), Some("nope"));
        assert_eq!(ApiError::Decode { status: 200, reason: "eof".into() }.server_message(), None);
    }
}
