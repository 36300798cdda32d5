use super::api::{OptionCreator, OptionFetcher};
use super::chip_view::SelectedChips;
use super::chips::{layout_chips, ChipMode};
use super::config::{SearchMode, SelectConfig};
use super::controller::{CreateState, FieldEvent, ListState, SelectController};
use super::coordinator::{use_dropdown_coordinator, ActiveSlot, DropdownCoordinator};
use super::error::SelectError;
use super::selection::SelectionValue;
use crate::shared::icons::icon;
use contracts::shared::SelectOption;
use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

/// Everything a field needs to carry out controller events.
/// All handles are arena ids, so the struct is `Copy` and can be moved into
/// any number of event handlers and async tasks.
#[derive(Clone, Copy)]
struct FieldHandles {
    state: RwSignal<SelectController>,
    coordinator: DropdownCoordinator,
    fetcher: StoredValue<Option<OptionFetcher>, LocalStorage>,
    creator: StoredValue<Option<OptionCreator>, LocalStorage>,
    on_select: Callback<SelectionValue>,
    on_fetch: Option<Callback<()>>,
    on_search: Option<Callback<String>>,
    on_error: Option<Callback<SelectError>>,
}

impl FieldHandles {
    /// Runs a transition that reads or writes the form's open-popover register
    fn transition(
        self,
        f: impl FnOnce(&mut SelectController, &mut ActiveSlot) -> Vec<FieldEvent>,
    ) {
        let events = self
            .coordinator
            .with_slot(|slot| self.state.try_update(|c| f(c, slot)))
            .flatten();
        if let Some(events) = events {
            self.dispatch(events);
        }
    }

    /// Runs a transition local to this field.
    /// Silently does nothing once the field is unmounted.
    fn local(self, f: impl FnOnce(&mut SelectController) -> Vec<FieldEvent>) {
        if let Some(events) = self.state.try_update(f) {
            self.dispatch(events);
        }
    }

    fn dispatch(self, events: Vec<FieldEvent>) {
        for event in events {
            match event {
                FieldEvent::Fetch(ticket) => {
                    let pending = self
                        .fetcher
                        .try_with_value(|fetcher| fetcher.as_ref().map(|fetch| fetch()))
                        .flatten();
                    match pending {
                        Some(future) => spawn_local(async move {
                            let result = future.await;
                            self.local(move |c| c.complete_fetch(ticket, result));
                        }),
                        None => {
                            _ = self.state.try_update(|c| c.hand_over_fetch(ticket));
                            match self.on_fetch {
                                Some(on_fetch) => on_fetch.run(()),
                                None => log::warn!(
                                    "select field has neither a fetcher nor on_fetch; options stay empty"
                                ),
                            }
                        }
                    }
                }
                FieldEvent::Commit(value) => self.on_select.run(value),
                FieldEvent::Search(term) => {
                    if let Some(on_search) = self.on_search {
                        on_search.run(term);
                    }
                }
                FieldEvent::Create(name) => {
                    let pending = self
                        .creator
                        .try_with_value(|creator| creator.as_ref().map(|create| create(name)))
                        .flatten();
                    match pending {
                        Some(future) => spawn_local(async move {
                            let result = future.await;
                            self.transition(move |c, slot| c.complete_create(result, slot));
                        }),
                        None => self.transition(|c, slot| {
                            c.complete_create(Err("creating options is not available".into()), slot)
                        }),
                    }
                }
                FieldEvent::Failed(error) => {
                    if let Some(on_error) = self.on_error {
                        on_error.run(error);
                    }
                }
            }
        }
    }
}

fn defer(f: impl FnOnce() + 'static) {
    spawn_local(async move {
        // Closing the popover unmounts the row whose click handler is still on
        // the stack; run the transition on the next tick instead.
        TimeoutFuture::new(0).await;
        f();
    });
}

/// Async-backed selection field.
///
/// Options come either from `fetcher` (fetched once, on first open) or from
/// the host through `options`/`loading`/`on_fetch`. All fields rendered under
/// one `provide_dropdown_coordinator()` are mutually exclusive: opening one
/// closes the others.
#[component]
pub fn DynamicSelect(
    /// Unique within the form's coordinator
    #[prop(into)]
    name: String,
    /// Current value; `SelectionValue::Multi` makes the field multi-select
    #[prop(into)]
    value: Signal<SelectionValue>,
    on_select: Callback<SelectionValue>,
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Self-managed list: called once, on first open
    #[prop(optional)]
    fetcher: Option<OptionFetcher>,
    /// Enables inline "create" for terms that match no option
    #[prop(optional)]
    creator: Option<OptionCreator>,
    /// Host-managed list
    #[prop(optional, into)]
    options: Option<Signal<Vec<SelectOption>>>,
    #[prop(optional, into)]
    loading: Option<Signal<bool>>,
    /// Host-managed fetch trigger, used when there is no `fetcher`
    #[prop(optional)]
    on_fetch: Option<Callback<()>>,
    /// Delegates search to the host instead of filtering locally
    #[prop(optional)]
    on_search: Option<Callback<String>>,
    /// Fixed action row, e.g. "Add location" opening another screen
    #[prop(optional, into)]
    cta_text: MaybeProp<String>,
    #[prop(optional)]
    on_cta_click: Option<Callback<()>>,
    /// Rows visible before the list scrolls
    #[prop(optional)]
    limit_options: Option<usize>,
    #[prop(optional)]
    chip_mode: Option<ChipMode>,
    /// Chip labels longer than this are cut with an ellipsis
    #[prop(optional)]
    chip_max_chars: Option<usize>,
    /// `(id, name)` labels of the current value, e.g. from a saved record
    #[prop(optional)]
    initial_labels: Vec<(String, String)>,
    #[prop(optional)]
    on_error: Option<Callback<SelectError>>,
) -> impl IntoView {
    let mut config = SelectConfig::default();
    if let Some(text) = placeholder.get_untracked() {
        config = config.with_placeholder(text);
    }
    if let Some(limit) = limit_options {
        config = config.with_limit_options(limit);
    }
    if let Some(max_chars) = chip_max_chars {
        config = config.with_chip_max_chars(max_chars);
    }

    let initial_value = value.get_untracked();
    let chip_mode = chip_mode.unwrap_or(if initial_value.is_multi() {
        ChipMode::Compact
    } else {
        ChipMode::Single
    });
    let search_mode = if on_search.is_some() {
        SearchMode::Remote
    } else {
        SearchMode::Local
    };

    let mut controller = SelectController::new(name.clone(), initial_value)
        .with_search_mode(search_mode)
        .with_creatable(creator.is_some())
        .with_pending_label(config.pending_label.clone());
    if let Some(host_options) = options {
        let initial = host_options.get_untracked();
        if !initial.is_empty() {
            controller.seed_options(initial);
        }
    }
    for (id, label) in initial_labels {
        controller.hydrate_label(id, label);
    }

    let state = RwSignal::new(controller);
    let coordinator = use_dropdown_coordinator();
    let config = StoredValue::new(config);
    let handles = FieldHandles {
        state,
        coordinator,
        fetcher: StoredValue::new_local(fetcher),
        creator: StoredValue::new_local(creator),
        on_select,
        on_fetch,
        on_search,
        on_error,
    };

    // Host-controlled value
    Effect::new(move |_| {
        let current = value.get();
        if state.with_untracked(|c| c.value() != &current) {
            state.update(|c| c.set_value(current));
        }
    });

    if let Some(host_options) = options {
        Effect::new(move |seen: Option<()>| {
            let list = host_options.get();
            // the initial list was seeded above; an empty one means "not loaded yet"
            if seen.is_some() || !list.is_empty() {
                state.update(|c| c.seed_options(list));
            }
        });
    }
    if let Some(host_loading) = loading {
        Effect::new(move |_| {
            let busy = host_loading.get();
            state.update(|c| c.set_host_loading(busy));
        });
    }

    let is_open = {
        let name = name.clone();
        Signal::derive(move || coordinator.is_open(&name))
    };

    let container = NodeRef::<Div>::new();
    let listener = window_event_listener(leptos::ev::pointerdown, move |ev| {
        if !is_open.get_untracked() {
            return;
        }
        let inside = match (container.get_untracked(), ev.target()) {
            (Some(root), Some(target)) => target
                .dyn_ref::<web_sys::Node>()
                .map(|node| root.contains(Some(node)))
                .unwrap_or(false),
            _ => false,
        };
        if !inside {
            handles.transition(|c, slot| c.dismiss(slot));
        }
    });
    on_cleanup(move || {
        listener.remove();
        coordinator.with_slot(|slot| {
            if slot.is_open(&name) {
                slot.close();
            }
        });
    });

    let layout = Signal::derive(move || {
        let selected = state.with(|c| c.selected_options());
        let max_chars = config.with_value(|c| c.chip_max_chars);
        layout_chips(&selected, chip_mode, max_chars)
    });
    let on_remove = Callback::new(move |id: String| handles.local(|c| c.remove(&id)));

    view! {
        <div class="form__group dynamic-select" node_ref=container>
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <div
                class="dynamic-select__control"
                class:dynamic-select__control--open=move || is_open.get()
                on:click=move |_| handles.transition(|c, slot| c.activate(slot))
            >
                <Show
                    when=move || !layout.with(|l| l.is_empty())
                    fallback=move || view! {
                        <span class="dynamic-select__placeholder">
                            {config.with_value(|c| c.placeholder.clone())}
                        </span>
                    }
                >
                    <SelectedChips layout=layout on_remove=on_remove />
                </Show>
                <span class="dynamic-select__chevron">{icon("chevron-down")}</span>
            </div>

            <Show when=move || is_open.get()>
                <div class="dynamic-select__popover">
                    <input
                        type="text"
                        class="form__input dynamic-select__search"
                        placeholder=move || config.with_value(|c| c.search_placeholder.clone())
                        prop:value=move || state.with(|c| c.search_term().to_string())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            handles.local(move |c| c.search(term));
                        }
                    />

                    <div
                        class="dynamic-select__options"
                        style=move || config.with_value(|c| c.list_max_height())
                    >
                        {move || {
                            let rows = state
                                .with(|c| {
                                    c.visible_options()
                                        .into_iter()
                                        .map(|option| (c.is_selected(&option.id), option))
                                        .collect::<Vec<_>>()
                                })
                                .into_iter()
                                .map(|(selected, option)| {
                                    let name = option.name.clone();
                                    view! {
                                        <div
                                            class="dynamic-select__option"
                                            class:dynamic-select__option--selected=selected
                                            on:click=move |_| {
                                                let option = option.clone();
                                                defer(move || {
                                                    handles.transition(move |c, slot| c.choose(&option, slot))
                                                });
                                            }
                                        >
                                            {name}
                                        </div>
                                    }
                                })
                                .collect_view();
                            match state.with(|c| c.list_state()) {
                                ListState::Loading => view! {
                                    {rows}
                                    <div class="dynamic-select__status">
                                        <Spinner size=SpinnerSize::Small />
                                        {config.with_value(|c| c.loading_text.clone())}
                                    </div>
                                }.into_any(),
                                ListState::Empty => view! {
                                    <div class="dynamic-select__status">
                                        {config.with_value(|c| c.empty_text.clone())}
                                    </div>
                                }.into_any(),
                                ListState::Ready => rows.into_any(),
                            }
                        }}
                    </div>

                    {move || state.with(|c| c.can_create()).then(|| {
                        let term = state.with(|c| c.search_term().trim().to_string());
                        view! {
                            <button
                                type="button"
                                class="dynamic-select__create"
                                on:click=move |_| handles.local(|c| c.begin_create())
                            >
                                {icon("plus")}
                                {format!("Create \"{}\"", term)}
                            </button>
                        }
                    })}

                    {move || match state.with(|c| c.create_state().clone()) {
                        CreateState::Idle => None,
                        CreateState::Creating(name) => Some(view! {
                            <div class="dynamic-select__status">
                                <Spinner size=SpinnerSize::Small />
                                {format!("Creating \"{}\"...", name)}
                            </div>
                        }.into_any()),
                        CreateState::Failed(error) => Some(view! {
                            <div class="dynamic-select__error">{error.user_message()}</div>
                        }.into_any()),
                    }}

                    {move || cta_text.get().map(|text| view! {
                        <button
                            type="button"
                            class="dynamic-select__cta"
                            on:click=move |_| {
                                handles.transition(|c, slot| c.dismiss(slot));
                                if let Some(on_cta_click) = on_cta_click {
                                    on_cta_click.run(());
                                }
                            }
                        >
                            {text}
                        </button>
                    })}
                </div>
            </Show>
        </div>
    }
}
