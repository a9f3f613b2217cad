//! Wire types shared with the social-network REST API.
//!
//! The API owns every entity here; the client holds ephemeral,
//! non-authoritative copies fetched per view.

pub mod accounts;
pub mod auth;
pub mod posts;
