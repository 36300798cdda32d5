use crate::domain::a001_asset::ui::details::AssetDetails;
use crate::domain::a002_purchase_order::ui::details::PurchaseOrderDetails;
use crate::shared::icons::icon;
use contracts::domain::a001_asset::aggregate::AssetDto;
use contracts::domain::a002_purchase_order::aggregate::PurchaseOrderDto;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
    PurchaseOrder,
    Asset,
}

#[component]
pub fn App() -> impl IntoView {
    let (screen, set_screen) = signal(Screen::PurchaseOrder);
    // bumped to remount the form after save/cancel
    let (revision, set_revision) = signal(0u32);

    let reset = move || set_revision.update(|r| *r += 1);

    view! {
        <div class="app">
            <nav class="app-nav">
                <button
                    class="app-nav__item"
                    class:app-nav__item--active=move || screen.get() == Screen::PurchaseOrder
                    on:click=move |_| set_screen.set(Screen::PurchaseOrder)
                >
                    {icon("purchases")}
                    {"Purchase orders"}
                </button>
                <button
                    class="app-nav__item"
                    class:app-nav__item--active=move || screen.get() == Screen::Asset
                    on:click=move |_| set_screen.set(Screen::Asset)
                >
                    {icon("assets")}
                    {"Assets"}
                </button>
            </nav>

            <main class="app-main">
                {move || {
                    revision.track();
                    match screen.get() {
                        Screen::PurchaseOrder => view! {
                            <PurchaseOrderDetails
                                on_saved=Rc::new(move |dto: PurchaseOrderDto| {
                                    log::info!("purchase order submitted: {:?}", dto);
                                    reset();
                                })
                                on_cancel=Rc::new(move |_: ()| reset())
                                on_add_location=Callback::new(move |_| {
                                    log::info!("location form requested from purchase order");
                                })
                            />
                        }.into_any(),
                        Screen::Asset => view! {
                            <AssetDetails
                                on_saved=Rc::new(move |dto: AssetDto| {
                                    log::info!("asset submitted: {:?}", dto);
                                    reset();
                                })
                                on_cancel=Rc::new(move |_: ()| reset())
                            />
                        }.into_any(),
                    }
                }}
            </main>
        </div>
    }
}
