pub mod badge;
pub mod field;

pub use badge::{Badge, StatusBadge};
pub use field::TextField;
