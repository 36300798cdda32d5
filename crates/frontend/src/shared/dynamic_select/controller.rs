//! State machine of one selection field.
//!
//! The controller is plain data: it never spawns, never touches the DOM and
//! never calls the host. Every operation returns the side effects the caller
//! has to carry out as a list of [`FieldEvent`]s. The open/closed state lives
//! in the form's shared [`ActiveSlot`], which the caller passes in.

use super::cache::{FetchTicket, OptionCache};
use super::config::{SearchMode, PENDING_LABEL};
use super::coordinator::ActiveSlot;
use super::error::SelectError;
use super::reconciler::{self, PendingLabels};
use super::selection::SelectionValue;
use contracts::shared::SelectOption;

/// Side effect requested by the controller
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// Start the fetch identified by the ticket
    Fetch(FetchTicket),
    /// Report the new value to the host
    Commit(SelectionValue),
    /// Server-side search: hand the term to the host
    Search(String),
    /// Call the create function with this name
    Create(String),
    Failed(SelectError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CreateState {
    #[default]
    Idle,
    Creating(String),
    Failed(SelectError),
}

/// What the option list area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Empty,
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectController {
    name: String,
    search_mode: SearchMode,
    creatable: bool,
    pending_label: String,
    value: SelectionValue,
    cache: OptionCache,
    pending: PendingLabels,
    search: String,
    create: CreateState,
    host_loading: bool,
}

impl SelectController {
    pub fn new(name: impl Into<String>, value: SelectionValue) -> Self {
        Self {
            name: name.into(),
            search_mode: SearchMode::Local,
            creatable: false,
            pending_label: PENDING_LABEL.to_string(),
            value,
            cache: OptionCache::new(),
            pending: PendingLabels::new(),
            search: String::new(),
            create: CreateState::Idle,
            host_loading: false,
        }
    }

    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        // server results are already filtered by the term
        self.cache.set_carry_created(mode == SearchMode::Local);
        self
    }

    pub fn with_creatable(mut self, creatable: bool) -> Self {
        self.creatable = creatable;
        self
    }

    pub fn with_pending_label(mut self, label: impl Into<String>) -> Self {
        self.pending_label = label.into();
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.seed_options(options);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &SelectionValue {
        &self.value
    }

    pub fn is_multi(&self) -> bool {
        self.value.is_multi()
    }

    pub fn cache(&self) -> &OptionCache {
        &self.cache
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn create_state(&self) -> &CreateState {
        &self.create
    }

    pub fn fetch_error(&self) -> Option<&SelectError> {
        self.cache.error()
    }

    pub fn is_loading(&self) -> bool {
        self.cache.is_loading() || self.host_loading
    }

    pub fn is_open(&self, slot: &ActiveSlot) -> bool {
        slot.is_open(&self.name)
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Click on the control: opens the popover (fetching on first open) or,
    /// if this field is already open, toggles it shut.
    pub fn activate(&mut self, slot: &mut ActiveSlot) -> Vec<FieldEvent> {
        if self.is_open(slot) {
            return self.close_popover(slot);
        }
        slot.open(&self.name);
        match self.cache.begin_fetch() {
            Some(ticket) => vec![FieldEvent::Fetch(ticket)],
            None => Vec::new(),
        }
    }

    pub fn search(&mut self, term: impl Into<String>) -> Vec<FieldEvent> {
        self.search = term.into();
        if matches!(self.create, CreateState::Failed(_)) {
            self.create = CreateState::Idle;
        }
        match self.search_mode {
            SearchMode::Local => Vec::new(),
            SearchMode::Remote => vec![FieldEvent::Search(self.search.clone())],
        }
    }

    /// Click on an option row.
    ///
    /// Single-select commits and closes; choosing the current value again
    /// clears it. Multi-select toggles the id and stays open.
    pub fn choose(&mut self, option: &SelectOption, slot: &mut ActiveSlot) -> Vec<FieldEvent> {
        if self.cache.contains(&option.id) {
            self.pending.remember(option.id.clone(), option.name.clone());
        }
        self.value.select(&option.id);

        let mut events = Vec::new();
        if !self.is_multi() {
            events.extend(self.close_popover(slot));
        }
        events.push(FieldEvent::Commit(self.value.clone()));
        events
    }

    /// Remove control of a chip
    pub fn remove(&mut self, id: &str) -> Vec<FieldEvent> {
        if !self.value.contains(id) {
            return Vec::new();
        }
        self.value.remove(id);
        vec![FieldEvent::Commit(self.value.clone())]
    }

    pub fn clear(&mut self) -> Vec<FieldEvent> {
        if self.value.is_empty() {
            return Vec::new();
        }
        self.value.clear();
        vec![FieldEvent::Commit(self.value.clone())]
    }

    /// Pointer-down outside the field, or an explicit cancel
    pub fn dismiss(&mut self, slot: &mut ActiveSlot) -> Vec<FieldEvent> {
        if !self.is_open(slot) {
            return Vec::new();
        }
        self.close_popover(slot)
    }

    /// "Create" row clicked: asks for the current search term to be created
    pub fn begin_create(&mut self) -> Vec<FieldEvent> {
        if !self.can_create() {
            return Vec::new();
        }
        let name = self.search.trim().to_string();
        self.create = CreateState::Creating(name.clone());
        vec![FieldEvent::Create(name)]
    }

    pub fn complete_create(
        &mut self,
        result: Result<SelectOption, String>,
        slot: &mut ActiveSlot,
    ) -> Vec<FieldEvent> {
        let name = match &self.create {
            CreateState::Creating(name) => name.clone(),
            _ => return Vec::new(),
        };

        match result {
            Ok(option) => {
                self.create = CreateState::Idle;
                self.pending.remember(option.id.clone(), option.name.clone());
                self.value.insert(&option.id);
                self.cache.append_created(option);

                let mut events = Vec::new();
                if self.is_multi() {
                    events.extend(self.reset_search());
                } else {
                    events.extend(self.close_popover(slot));
                }
                events.push(FieldEvent::Commit(self.value.clone()));
                events
            }
            Err(reason) => {
                log::warn!("Failed to create option \"{}\": {}", name, reason);
                let error = SelectError::CreateFailed { name, reason };
                self.create = CreateState::Failed(error.clone());
                vec![FieldEvent::Failed(error)]
            }
        }
    }

    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<SelectOption>, String>,
    ) -> Vec<FieldEvent> {
        match self.cache.complete_fetch(ticket, result) {
            Some(error) => vec![FieldEvent::Failed(error)],
            None => {
                self.prune_pending();
                Vec::new()
            }
        }
    }

    /// The host took over the fetch (`on_fetch`); stop waiting for it
    pub fn hand_over_fetch(&mut self, ticket: FetchTicket) {
        self.cache.abandon(ticket);
    }

    // ------------------------------------------------------------------
    // Host inputs
    // ------------------------------------------------------------------

    /// Value changed by the host form
    pub fn set_value(&mut self, value: SelectionValue) {
        self.value = value;
    }

    /// Options list supplied by the host
    pub fn seed_options(&mut self, options: Vec<SelectOption>) {
        self.cache.seed(options);
        self.prune_pending();
    }

    pub fn set_host_loading(&mut self, loading: bool) {
        self.host_loading = loading;
    }

    /// Label of a selected id known from a saved record
    pub fn hydrate_label(&mut self, id: impl Into<String>, name: impl Into<String>) {
        let id = id.into();
        if !self.cache.contains(&id) {
            self.pending.remember(id, name);
        }
    }

    /// Drops the cached state so the next open refetches
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    pub fn display_options(&self) -> Vec<SelectOption> {
        reconciler::reconcile(
            &self.value,
            self.cache.options(),
            &self.pending,
            &self.pending_label,
        )
    }

    /// Rows of the popover list
    pub fn visible_options(&self) -> Vec<SelectOption> {
        let display = self.display_options();
        match self.search_mode {
            SearchMode::Local => reconciler::filter_options(&display, &self.search),
            SearchMode::Remote => display,
        }
    }

    pub fn selected_options(&self) -> Vec<SelectOption> {
        reconciler::selected_options(&self.value, &self.display_options())
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.value.contains(id)
    }

    pub fn can_create(&self) -> bool {
        self.creatable
            && !matches!(self.create, CreateState::Creating(_))
            && reconciler::can_create(self.cache.options(), &self.search)
    }

    /// `Loading` while a fetch is in flight and nothing fetched is shown yet;
    /// placeholder rows of the current value are listed above the spinner.
    pub fn list_state(&self) -> ListState {
        let visible = self.visible_options();
        let has_fetched = visible.iter().any(|o| self.cache.contains(&o.id));
        if self.is_loading() && !has_fetched {
            ListState::Loading
        } else if !visible.is_empty() {
            ListState::Ready
        } else {
            ListState::Empty
        }
    }

    /// A remote field's cache holds one page of results, so a selected id
    /// missing from it says nothing about its name
    fn prune_pending(&mut self) {
        if self.search_mode == SearchMode::Local {
            self.pending.prune(self.cache.options());
        }
    }

    fn close_popover(&mut self, slot: &mut ActiveSlot) -> Vec<FieldEvent> {
        slot.close();
        if matches!(self.create, CreateState::Failed(_)) {
            self.create = CreateState::Idle;
        }
        self.reset_search()
    }

    fn reset_search(&mut self) -> Vec<FieldEvent> {
        if self.search.is_empty() {
            return Vec::new();
        }
        self.search.clear();
        match self.search_mode {
            SearchMode::Local => Vec::new(),
            SearchMode::Remote => vec![FieldEvent::Search(String::new())],
        }
    }
}
