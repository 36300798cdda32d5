use super::chips::ChipLayout;
use crate::shared::components::ui::Badge;
use leptos::prelude::*;

/// Selected options inside the control of a `DynamicSelect`
#[component]
pub fn SelectedChips(
    #[prop(into)]
    layout: Signal<ChipLayout>,
    /// Remove control of a chip, called with the option id
    on_remove: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="dynamic-select__chips">
            <For
                each=move || layout.get().chips
                key=|chip| (chip.id.clone(), chip.label.clone())
                children=move |chip| {
                    let id = chip.id.clone();
                    let removable = chip.removable;
                    view! {
                        <span class="dynamic-select__chip" title=chip.tooltip()>
                            <span class="dynamic-select__chip-label">{chip.label.clone()}</span>
                            {removable.then(move || view! {
                                <button
                                    type="button"
                                    class="dynamic-select__chip-remove"
                                    aria-label="Remove"
                                    on:click=move |ev| {
                                        // the chip sits inside the control; don't toggle the popover
                                        ev.stop_propagation();
                                        on_remove.run(id.clone());
                                    }
                                >
                                    "×"
                                </button>
                            })}
                        </span>
                    }
                }
            />
            {move || layout.get().overflow.map(|badge| {
                let tooltip = badge.tooltip();
                view! {
                    <Badge variant="neutral" class="dynamic-select__overflow" title=tooltip>
                        {badge.label}
                    </Badge>
                }
            })}
        </div>
    }
}
