use crate::shared::dynamic_select::{
    creator_for, fetcher_for, ChipMode, DynamicSelect, SelectionValue,
};
use contracts::enums::EntityKind;
use leptos::prelude::*;

/// Asset type tagging. The list per asset stays short, so every type gets
/// its own removable chip; names are cut short to keep several on one line.
#[component]
pub fn AssetTypeSelect(
    #[prop(into)]
    value: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    #[prop(optional)]
    labels: Vec<(String, String)>,
) -> impl IntoView {
    let selection = Signal::derive(move || SelectionValue::multi(value.get()));
    let on_select = Callback::new(move |v: SelectionValue| on_change.run(v.into_multi()));

    view! {
        <DynamicSelect
            name="asset_types"
            label="Asset types"
            placeholder="Add asset types"
            value=selection
            on_select=on_select
            fetcher=fetcher_for(EntityKind::AssetType)
            creator=creator_for(EntityKind::AssetType)
            chip_mode=ChipMode::Full
            chip_max_chars=16
            initial_labels=labels
        />
    }
}
