use crate::shared::dynamic_select::{fetcher_for, ChipMode, DynamicSelect, SelectionValue};
use contracts::enums::EntityKind;
use leptos::prelude::*;

/// Локация. Locations carry an address and a parent, so they are not created
/// inline; `on_add` opens the full location form instead.
#[component]
pub fn LocationSelect(
    #[prop(into)]
    value: Signal<Option<String>>,
    on_change: Callback<Option<String>>,
    #[prop(optional_no_strip)]
    on_add: Option<Callback<()>>,
    #[prop(optional)]
    labels: Vec<(String, String)>,
) -> impl IntoView {
    let selection = Signal::derive(move || SelectionValue::single(value.get()));
    let on_select = Callback::new(move |v: SelectionValue| on_change.run(v.into_single()));
    let cta_text = on_add.map(|_| "Add location".to_string());

    view! {
        <DynamicSelect
            name="location"
            label="Location"
            placeholder="Select location"
            value=selection
            on_select=on_select
            fetcher=fetcher_for(EntityKind::Location)
            chip_mode=ChipMode::Single
            cta_text=cta_text
            on_cta_click=on_add.unwrap_or_else(|| Callback::new(|_| ()))
            initial_labels=labels
        />
    }
}
