use crate::shared::dynamic_select::{
    creator_for, fetcher_for, ChipMode, DynamicSelect, SelectionValue,
};
use contracts::enums::EntityKind;
use leptos::prelude::*;

/// Запчасти: множественный выбор, компактные чипы (`Bolt +2`)
#[component]
pub fn PartDynamicSelect(
    #[prop(into)]
    value: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    #[prop(optional, into)]
    name: Option<String>,
    #[prop(optional)]
    labels: Vec<(String, String)>,
) -> impl IntoView {
    let selection = Signal::derive(move || SelectionValue::multi(value.get()));
    let on_select = Callback::new(move |v: SelectionValue| on_change.run(v.into_multi()));

    view! {
        <DynamicSelect
            name=name.unwrap_or_else(|| "parts".to_string())
            label="Parts"
            placeholder="Select parts"
            value=selection
            on_select=on_select
            fetcher=fetcher_for(EntityKind::Part)
            creator=creator_for(EntityKind::Part)
            chip_mode=ChipMode::Compact
            limit_options=8
            initial_labels=labels
        />
    }
}
