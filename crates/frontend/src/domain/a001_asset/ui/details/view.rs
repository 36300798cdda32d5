use super::view_model::AssetDetailsViewModel;
use crate::domain::a004_vendor::ui::select::VendorSelect;
use crate::domain::a005_asset_type::ui::select::AssetTypeSelect;
use crate::domain::a006_location::ui::select::LocationSelect;
use crate::shared::dynamic_select::provide_dropdown_coordinator;
use crate::shared::icons::icon;
use contracts::domain::a001_asset::aggregate::AssetDto;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn AssetDetails(
    #[prop(optional)]
    initial: Option<AssetDto>,
    on_saved: Rc<dyn Fn(AssetDto)>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    provide_dropdown_coordinator();

    let vm = AssetDetailsViewModel::new(initial);
    let labels = vm.labels();
    let form = vm.form;
    let vm_clone = vm.clone();

    view! {
        <div class="details-container asset-details">
            <div class="details-header">
                <h3>
                    {icon("assets")}
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit asset" } else { "New asset" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="asset-name">{"Name"}</label>
                    <input
                        type="text"
                        id="asset-name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        placeholder="e.g. Air compressor #2"
                    />
                </div>

                <AssetTypeSelect
                    value=Signal::derive(move || form.get().asset_type_ids)
                    on_change=Callback::new(move |ids: Vec<String>| form.update(|f| f.asset_type_ids = ids))
                    labels=labels.clone()
                />

                <LocationSelect
                    value=Signal::derive(move || form.get().location_id)
                    on_change=Callback::new(move |id: Option<String>| form.update(|f| f.location_id = id))
                    on_add=None
                    labels=labels.clone()
                />

                <VendorSelect
                    value=Signal::derive(move || form.get().vendor_id)
                    on_change=Callback::new(move |id: Option<String>| form.update(|f| f.vendor_id = id))
                    labels=labels.clone()
                />
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || !vm.is_form_valid()()
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Save" } else { "Create" }
                    }
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    {icon("cancel")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
