use super::view_model::PurchaseOrderDetailsViewModel;
use crate::domain::a001_asset::ui::select::AssetSelect;
use crate::domain::a003_part::ui::select::PartDynamicSelect;
use crate::domain::a004_vendor::ui::select::VendorSelect;
use crate::domain::a006_location::ui::select::LocationSelect;
use crate::shared::dynamic_select::provide_dropdown_coordinator;
use crate::shared::icons::icon;
use contracts::domain::a002_purchase_order::aggregate::PurchaseOrderDto;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn PurchaseOrderDetails(
    #[prop(optional)]
    initial: Option<PurchaseOrderDto>,
    on_saved: Rc<dyn Fn(PurchaseOrderDto)>,
    on_cancel: Rc<dyn Fn(())>,
    /// Opens the location form
    #[prop(optional)]
    on_add_location: Option<Callback<()>>,
) -> impl IntoView {
    // one open dropdown at a time across the whole form
    provide_dropdown_coordinator();

    let vm = PurchaseOrderDetailsViewModel::new(initial);
    let labels = vm.labels();
    let form = vm.form;
    let vm_clone = vm.clone();

    view! {
        <div class="details-container purchase-order-details">
            <div class="details-header">
                <h3>
                    {icon("purchases")}
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit purchase order" } else { "New purchase order" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <VendorSelect
                    value=Signal::derive(move || form.get().vendor_id)
                    on_change=Callback::new(move |id: Option<String>| form.update(|f| f.vendor_id = id))
                    labels=labels.clone()
                />

                <PartDynamicSelect
                    value=Signal::derive(move || form.get().part_ids)
                    on_change=Callback::new(move |ids: Vec<String>| form.update(|f| f.part_ids = ids))
                    labels=labels.clone()
                />

                <LocationSelect
                    value=Signal::derive(move || form.get().location_id)
                    on_change=Callback::new(move |id: Option<String>| form.update(|f| f.location_id = id))
                    on_add=on_add_location
                    labels=labels.clone()
                />

                <AssetSelect
                    value=Signal::derive(move || form.get().asset_id)
                    on_change=Callback::new(move |id: Option<String>| form.update(|f| f.asset_id = id))
                    labels=labels.clone()
                />

                <div class="form-group">
                    <label for="comment">{"Comment"}</label>
                    <textarea
                        id="comment"
                        prop:value=move || form.get().comment.unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                f.comment = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                        placeholder="Notes for the vendor (optional)"
                        rows="3"
                    />
                </div>
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
