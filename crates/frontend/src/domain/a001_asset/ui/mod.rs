pub mod details;
pub mod select;
