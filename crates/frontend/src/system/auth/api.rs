use contracts::auth::{LoginRequest, RegisterRequest, TokenPair};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_detail, field_error, read_json};

/// Login with username and password; returns the bearer pair on success.
pub async fn login(username: String, password: String) -> Result<TokenPair, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/accounts/token/"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_json(response).await
}

/// Create a new account. Non-2xx surfaces the server's field error
/// (username/email/password) when present.
pub async fn register(request: RegisterRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/api/accounts/register/"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(field_error(&body).unwrap_or_else(|| error_detail(status, &body)))
}
