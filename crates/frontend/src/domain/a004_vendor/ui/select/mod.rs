use crate::shared::dynamic_select::{
    creator_for, fetcher_for, ChipMode, DynamicSelect, SelectionValue,
};
use contracts::enums::EntityKind;
use leptos::prelude::*;

/// Поставщик: одиночный выбор с созданием нового поставщика из строки поиска
#[component]
pub fn VendorSelect(
    #[prop(into)]
    value: Signal<Option<String>>,
    on_change: Callback<Option<String>>,
    #[prop(optional, into)]
    name: Option<String>,
    /// `(id, name)` pairs of the saved record
    #[prop(optional)]
    labels: Vec<(String, String)>,
) -> impl IntoView {
    let selection = Signal::derive(move || SelectionValue::single(value.get()));
    let on_select = Callback::new(move |v: SelectionValue| on_change.run(v.into_single()));

    view! {
        <DynamicSelect
            name=name.unwrap_or_else(|| "vendor".to_string())
            label="Vendor"
            placeholder="Select vendor"
            value=selection
            on_select=on_select
            fetcher=fetcher_for(EntityKind::Vendor)
            creator=creator_for(EntityKind::Vendor)
            chip_mode=ChipMode::Single
            initial_labels=labels
        />
    }
}
