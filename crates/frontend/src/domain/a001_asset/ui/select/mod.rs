use crate::shared::dynamic_select::api::{list_options, search_options};
use crate::shared::dynamic_select::{ChipMode, DynamicSelect, SelectionValue};
use contracts::enums::EntityKind;
use contracts::shared::SelectOption;
use leptos::prelude::*;

/// Актив. The asset list is too large to fetch whole, so the field runs in
/// host-managed mode: this component loads pages from the server and the
/// search term is sent to `/api/options/assets?search=`.
#[component]
pub fn AssetSelect(
    #[prop(into)]
    value: Signal<Option<String>>,
    on_change: Callback<Option<String>>,
    #[prop(optional)]
    labels: Vec<(String, String)>,
) -> impl IntoView {
    let (options, set_options) = signal::<Vec<SelectOption>>(Vec::new());
    let (loading, set_loading) = signal(false);
    // Sequence number of the latest request; older responses are dropped
    let latest = StoredValue::new(0u64);

    let load = move |term: String| {
        let seq = latest.get_value() + 1;
        latest.set_value(seq);
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = if term.trim().is_empty() {
                list_options(EntityKind::Asset).await
            } else {
                search_options(EntityKind::Asset, &term).await
            };
            if latest.try_get_value() != Some(seq) {
                return;
            }
            match result {
                Ok(list) => set_options.set(list),
                Err(e) => log::error!("Failed to load assets: {}", e),
            }
            set_loading.set(false);
        });
    };

    let selection = Signal::derive(move || SelectionValue::single(value.get()));
    let on_select = Callback::new(move |v: SelectionValue| on_change.run(v.into_single()));

    view! {
        <DynamicSelect
            name="asset"
            label="Asset"
            placeholder="Search assets"
            value=selection
            on_select=on_select
            options=options
            loading=loading
            on_fetch=Callback::new(move |_| load(String::new()))
            on_search=Callback::new(move |term: String| load(term))
            chip_mode=ChipMode::Single
            initial_labels=labels
        />
    }
}
