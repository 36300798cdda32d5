//! Dynamic Select
//!
//! Async-backed selection field used by every entity dropdown of the app.
//!
//! - `cache`, `selection`, `reconciler`, `controller`, `chips`: the field's
//!   state machine, plain Rust with no DOM access
//! - `coordinator`: one open popover per form
//! - `component`, `chip_view`: Leptos components
//! - `api`: HTTP client of `/api/options`
//!
//! ## Usage
//!
//! ```ignore
//! provide_dropdown_coordinator();
//!
//! view! {
//!     <DynamicSelect
//!         name="vendor"
//!         value=Signal::derive(move || SelectionValue::single(form.get().vendor_id))
//!         on_select=Callback::new(move |v: SelectionValue| form.update(|f| f.vendor_id = v.into_single()))
//!         fetcher=fetcher_for(EntityKind::Vendor)
//!         creator=creator_for(EntityKind::Vendor)
//!     />
//! }
//! ```

pub mod api;
pub mod cache;
pub mod chip_view;
pub mod chips;
pub mod component;
pub mod config;
pub mod controller;
pub mod coordinator;
pub mod error;
pub mod reconciler;
pub mod selection;

pub use api::{creator_for, fetcher_for, OptionCreator, OptionFetcher};
pub use cache::{FetchTicket, OptionCache};
pub use chip_view::SelectedChips;
pub use chips::{layout_chips, Chip, ChipLayout, ChipMode, OverflowBadge};
pub use component::DynamicSelect;
pub use config::{SearchMode, SelectConfig};
pub use controller::{CreateState, FieldEvent, ListState, SelectController};
pub use coordinator::{
    provide_dropdown_coordinator, use_dropdown_coordinator, ActiveSlot, DropdownCoordinator,
};
pub use error::SelectError;
pub use reconciler::PendingLabels;
pub use selection::SelectionValue;
