//! API utilities for talking to the social-network REST API.
//!
//! Provides URL construction, the bearer header, and a single response
//! classification used by every call site.

use contracts::auth::ApiErrorBody;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests.
///
/// Constructed from the current window location; the API is served on
/// port 8000. Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Successful response payload: a decoded body, or no body at all (204).
#[derive(Debug, Clone, PartialEq)]
pub enum ApiData<T> {
    Ok(T),
    Empty,
}

/// Classify a response: 204 -> `Empty` with no body decode attempted,
/// other 2xx -> decode the body, non-2xx -> error message from the body
/// with a generic fallback.
pub async fn classify<T: DeserializeOwned>(response: Response) -> Result<ApiData<T>, String> {
    if response.status() == 204 {
        return Ok(ApiData::Empty);
    }
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(error_detail(response.status(), &body));
    }
    response
        .json::<T>()
        .await
        .map(ApiData::Ok)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Classify a response from an endpoint expected to return a body.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    match classify(response).await? {
        ApiData::Ok(data) => Ok(data),
        ApiData::Empty => Err("Empty response from server".to_string()),
    }
}

/// Classify a response from a mutation whose body, if any, is ignored.
pub async fn read_ok(response: Response) -> Result<(), String> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(error_detail(status, &body))
}

/// Human-readable message for a non-2xx response. Tries the API's
/// `{"detail": ...}` shape first; an empty or non-JSON body falls back to
/// a generic message instead of failing the parse step.
pub fn error_detail(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

/// First field error out of a register-style validation body
/// (`{"username": ["..."], "email": ["..."], ...}`).
pub fn field_error(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for field in ["username", "email", "password", "detail"] {
        match value.get(field) {
            Some(serde_json::Value::String(message)) => return Some(message.clone()),
            Some(serde_json::Value::Array(messages)) => {
                if let Some(serde_json::Value::String(message)) = messages.first() {
                    return Some(message.clone());
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_from_body() {
        assert_eq!(
            error_detail(400, r#"{"detail":"You already liked this post."}"#),
            "You already liked this post."
        );
    }

    #[test]
    fn test_error_detail_empty_body_falls_back() {
        assert_eq!(error_detail(500, ""), "Request failed with status 500");
    }

    #[test]
    fn test_error_detail_junk_body_falls_back() {
        assert_eq!(
            error_detail(502, "<html>Bad Gateway</html>"),
            "Request failed with status 502"
        );
        assert_eq!(
            error_detail(404, r#"{"other":"shape"}"#),
            "Request failed with status 404"
        );
    }

    #[test]
    fn test_field_error_picks_first_message() {
        let body = r#"{"email":["Enter a valid email address."]}"#;
        assert_eq!(
            field_error(body).as_deref(),
            Some("Enter a valid email address.")
        );

        let body = r#"{"username":["This username is taken."],"email":["bad"]}"#;
        assert_eq!(
            field_error(body).as_deref(),
            Some("This username is taken.")
        );
    }

    #[test]
    fn test_field_error_none_for_unknown_shape() {
        assert_eq!(field_error(""), None);
        assert_eq!(field_error(r#"{"age":["too young"]}"#), None);
    }
}
