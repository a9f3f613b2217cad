pub mod accounts;
pub mod admin;
pub mod posts;
