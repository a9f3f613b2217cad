use contracts::accounts::{Profile, User};
use contracts::auth::ChangePasswordRequest;
use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::shared::api_utils::{api_url, bearer, read_json, read_ok};

fn account_path(username: &str, action: &str) -> String {
    format!("/api/accounts/{}{}/", action, urlencoding::encode(username))
}

/// Fetch all users
pub async fn fetch_users(token: &str) -> Result<Vec<User>, String> {
    let response = Request::get(&api_url("/api/accounts/"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_json(response).await
}

/// Fetch the logged-in user's own profile
pub async fn fetch_own_profile(token: &str) -> Result<Profile, String> {
    let response = Request::get(&api_url("/api/accounts/profile/"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_json(response).await
}

/// Fetch another user's profile by username
pub async fn fetch_profile(token: &str, username: &str) -> Result<Profile, String> {
    let response = Request::get(&api_url(&account_path(username, "")))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_json(response).await
}

/// Update own profile. Multipart because the update may carry an image.
pub async fn update_profile(
    token: &str,
    username: &str,
    bio: &str,
    website: &str,
    picture: Option<File>,
) -> Result<Profile, String> {
    let form = FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_str("bio", bio)
        .map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_str("website", website)
        .map_err(|_| "Failed to build form data".to_string())?;
    if let Some(file) = picture {
        form.append_with_blob_and_filename("profile_picture", &file, &file.name())
            .map_err(|_| "Failed to attach image".to_string())?;
    }

    let response = Request::patch(&api_url(&account_path(username, "")))
        .header("Authorization", &bearer(token))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_json(response).await
}

/// Change own password
pub async fn change_password(token: &str, request: ChangePasswordRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/api/accounts/change-password/"))
        .header("Authorization", &bearer(token))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_ok(response).await
}

/// Start following a user
pub async fn follow(token: &str, username: &str) -> Result<(), String> {
    let response = Request::post(&api_url(&account_path(username, "follow/")))
        .header("Authorization", &bearer(token))
        .json(&serde_json::json!({}))
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_ok(response).await
}

/// Stop following a user
pub async fn unfollow(token: &str, username: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&account_path(username, "follow/")))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_ok(response).await
}

/// Users who follow both the viewer and the given user
pub async fn mutual_followers(token: &str, username: &str) -> Result<Vec<User>, String> {
    let response = Request::get(&api_url(&account_path(username, "mutual-followers/")))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_json(response).await
}

/// Admin: delete a user account by id
pub async fn admin_delete_user(token: &str, user_id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/accounts/admin-users/{}/", user_id)))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_ok(response).await
}
