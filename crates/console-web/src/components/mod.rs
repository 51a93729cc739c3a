//! Components Module

pub mod like_card;
pub mod like_form;
pub mod notices;

pub use like_card::LikeCard;
pub use like_form::LikeForm;
pub use notices::Notices;
