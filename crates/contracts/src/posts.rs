use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::accounts::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post: i64,
    pub author: User,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: i64,
    pub post: i64,
    pub user: User,
}

/// Post as returned by the feed endpoints. `image_url` is an absolute URL
/// built by the server; the upload field itself is write-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub author: User,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub likes_count: i64,
}

/// Body of `POST /api/likes/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLike {
    pub post: i64,
}

/// Body of `POST /api/comments/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub post: i64,
    pub text: String,
}
