pub mod catalog;
pub mod play;
pub mod validate;
