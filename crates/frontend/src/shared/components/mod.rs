pub mod avatar;
pub mod feedback;
