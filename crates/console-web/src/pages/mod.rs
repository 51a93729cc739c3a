//! Pages Module

pub mod likes;

pub use likes::Likes;
