pub mod composer;
pub mod feed;
pub mod post_card;
