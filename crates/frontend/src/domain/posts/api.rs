use contracts::posts::{Comment, NewComment, NewLike, Post};
use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::shared::api_utils::{api_url, bearer, read_json, read_ok};

/// Fetch the whole feed
pub async fn fetch_posts(token: &str) -> Result<Vec<Post>, String> {
    let response = Request::get(&api_url("/api/posts/"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_json(response).await
}

/// Fetch the logged-in user's own posts
pub async fn fetch_my_posts(token: &str) -> Result<Vec<Post>, String> {
    let response = Request::get(&api_url("/api/posts/my-posts/"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_json(response).await
}

/// Fetch another user's posts
pub async fn fetch_user_posts(token: &str, username: &str) -> Result<Vec<Post>, String> {
    let path = format!("/api/posts/user/{}/", urlencoding::encode(username));
    let response = Request::get(&api_url(&path))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_json(response).await
}

/// Create a post. Multipart because the post may carry an image.
pub async fn create_post(token: &str, content: &str, image: Option<File>) -> Result<Post, String> {
    let form = FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_str("content", content)
        .map_err(|_| "Failed to build form data".to_string())?;
    if let Some(file) = image {
        form.append_with_blob_and_filename("image", &file, &file.name())
            .map_err(|_| "Failed to attach image".to_string())?;
    }

    let response = Request::post(&api_url("/api/posts/"))
        .header("Authorization", &bearer(token))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_json(response).await
}

/// Delete own post
pub async fn delete_post(token: &str, post_id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/posts/{}/", post_id)))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_ok(response).await
}

/// Admin: delete any post
pub async fn admin_delete_post(token: &str, post_id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/admin-posts/{}/", post_id)))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_ok(response).await
}

/// Fetch all comments (admin view)
pub async fn fetch_comments(token: &str) -> Result<Vec<Comment>, String> {
    let response = Request::get(&api_url("/api/comments/"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_json(response).await
}

/// Comment on a post
pub async fn create_comment(token: &str, post_id: i64, text: &str) -> Result<Comment, String> {
    let request = NewComment {
        post: post_id,
        text: text.to_string(),
    };

    let response = Request::post(&api_url("/api/comments/"))
        .header("Authorization", &bearer(token))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_json(response).await
}

/// Delete a comment (author or admin)
pub async fn delete_comment(token: &str, comment_id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/comments/{}/", comment_id)))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_ok(response).await
}

/// Like a post
pub async fn like_post(token: &str, post_id: i64) -> Result<(), String> {
    let request = NewLike { post: post_id };

    let response = Request::post(&api_url("/api/likes/"))
        .header("Authorization", &bearer(token))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_ok(response).await
}

/// Remove a like. The API answers 204 with no body on success; `read_ok`
/// never touches the body of a successful response.
pub async fn unlike_post(token: &str) -> Result<(), String> {
    let response = Request::delete(&api_url("/api/likes/"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| "Network error or server unreachable".to_string())?;

    read_ok(response).await
}
