pub mod follow_button;
pub mod own_profile;
pub mod public_profile;
pub mod user_list;
