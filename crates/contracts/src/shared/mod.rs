pub mod select_option;

pub use select_option::{CreateOptionRequest, SelectOption};
