use serde::{Deserialize, Serialize};

/// User as returned by `GET /api/accounts/`.
///
/// `following`/`followers` carry the related user ids only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub following: Vec<i64>,
    #[serde(default)]
    pub followers: Vec<i64>,
    #[serde(default)]
    pub is_staff: bool,
}

/// Profile view of a user (`GET /api/accounts/{username}/`,
/// `GET /api/accounts/profile/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub followers_count: i64,
    #[serde(default)]
    pub following_count: i64,
    #[serde(default)]
    pub is_following: bool,
}
