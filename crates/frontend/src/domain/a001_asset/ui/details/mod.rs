//! Asset Details UI Module
//!
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::AssetDetails;
pub use view_model::AssetDetailsViewModel;
