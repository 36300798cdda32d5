pub mod components;
pub mod dynamic_select;
pub mod icons;
