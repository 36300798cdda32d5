use super::error::SelectError;
use contracts::shared::SelectOption;

/// Token of one fetch request.
///
/// Only the completion carrying the current generation is applied; anything
/// older belongs to a request that was superseded or invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Per-field store of fetched options.
///
/// Fetches at most once: a request while a fetch is in flight, or after a
/// successful one, is a no-op. A failed fetch is not cached, so the next
/// request retries.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionCache {
    options: Vec<SelectOption>,
    created: Vec<SelectOption>,
    carry_created: bool,
    loaded: bool,
    loading: bool,
    error: Option<SelectError>,
    generation: u64,
}

impl Default for OptionCache {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            created: Vec::new(),
            carry_created: true,
            loaded: false,
            loading: false,
            error: None,
            generation: 0,
        }
    }
}

impl OptionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether options created inline are kept on top of later loads.
    /// Off for lists that hold one page of server results.
    pub fn set_carry_created(&mut self, carry: bool) {
        self.carry_created = carry;
    }

    /// Cache pre-filled by the host; counts as loaded
    pub fn seeded(options: Vec<SelectOption>) -> Self {
        let mut cache = Self::new();
        cache.seed(options);
        cache
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error of the last failed fetch, cleared when a new fetch starts
    pub fn error(&self) -> Option<&SelectError> {
        self.error.as_ref()
    }

    pub fn needs_fetch(&self) -> bool {
        !self.loaded && !self.loading
    }

    pub fn contains(&self, id: &str) -> bool {
        self.options.iter().any(|o| o.id == id)
    }

    /// Marks a fetch as in flight and hands out its ticket.
    /// Returns `None` when the cache is loaded or already loading.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if !self.needs_fetch() {
            return None;
        }
        self.loading = true;
        self.error = None;
        self.generation += 1;
        Some(FetchTicket(self.generation))
    }

    /// Invokes `fetcher` only if a fetch may start, returning its ticket and
    /// whatever the fetcher produced (typically the pending future).
    pub fn request_fetch<F, T>(&mut self, fetcher: F) -> Option<(FetchTicket, T)>
    where
        F: FnOnce() -> T,
    {
        let ticket = self.begin_fetch()?;
        Some((ticket, fetcher()))
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Returns the error of a failed fetch so the caller can report it.
    /// Late completions of superseded requests are dropped and return `None`.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<SelectOption>, String>,
    ) -> Option<SelectError> {
        if ticket.0 != self.generation || !self.loading {
            log::debug!(
                "dropping stale options response (ticket {}, current {})",
                ticket.0,
                self.generation
            );
            return None;
        }
        self.loading = false;

        match result {
            Ok(fetched) => {
                self.store(fetched);
                self.loaded = true;
                None
            }
            Err(reason) => {
                log::error!("Failed to load options: {}", reason);
                let error = SelectError::FetchFailed(reason);
                self.error = Some(error.clone());
                Some(error)
            }
        }
    }

    /// Stops waiting for `ticket` without caching anything; used when the host
    /// loads the list itself and feeds it back through `seed`.
    pub fn abandon(&mut self, ticket: FetchTicket) {
        if ticket.0 == self.generation {
            self.loading = false;
        }
    }

    /// Adds an option created inline, without refetching
    pub fn append_created(&mut self, option: SelectOption) {
        if !self.created.contains(&option) {
            self.created.push(option.clone());
        }
        if !self.contains(&option.id) {
            self.options.push(option);
        }
    }

    /// Replaces the list with one supplied by the host
    pub fn seed(&mut self, options: Vec<SelectOption>) {
        self.store(options);
        self.loaded = true;
        self.loading = false;
        self.error = None;
    }

    /// Forgets the in-flight request and the loaded state; the next
    /// request fetches again. Cached options stay visible until replaced.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.loading = false;
        self.loaded = false;
    }

    fn store(&mut self, fetched: Vec<SelectOption>) {
        let mut options: Vec<SelectOption> = Vec::with_capacity(fetched.len());
        for option in fetched {
            if !options.contains(&option) {
                options.push(option);
            }
        }
        if self.carry_created {
            for created in &self.created {
                if !options.contains(created) {
                    options.push(created.clone());
                }
            }
        }
        self.options = options;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn opts(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
        pairs
            .iter()
            .map(|(id, name)| SelectOption::new(*id, *name))
            .collect()
    }

    #[test]
    fn test_second_request_while_loading_does_not_fetch() {
        let calls = Cell::new(0);
        let mut cache = OptionCache::new();

        let first = cache.request_fetch(|| calls.set(calls.get() + 1));
        let second = cache.request_fetch(|| calls.set(calls.get() + 1));

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(calls.get(), 1);
        assert!(cache.is_loading());
    }

    #[test]
    fn test_loaded_cache_is_never_refetched() {
        let mut cache = OptionCache::new();
        let ticket = cache.begin_fetch().unwrap();
        cache.complete_fetch(ticket, Ok(opts(&[("1", "Red")])));

        assert!(cache.is_loaded());
        assert!(!cache.is_loading());
        assert!(cache.begin_fetch().is_none());
        assert_eq!(cache.options().len(), 1);
    }

    #[test]
    fn test_failed_fetch_allows_retry() {
        let mut cache = OptionCache::new();
        let ticket = cache.begin_fetch().unwrap();
        let error = cache.complete_fetch(ticket, Err("HTTP 500".into()));

        assert_eq!(error, Some(SelectError::FetchFailed("HTTP 500".into())));
        assert!(!cache.is_loaded());
        assert!(!cache.is_loading());
        assert!(cache.options().is_empty());
        assert!(cache.error().is_some());

        let retry = cache.begin_fetch().unwrap();
        assert!(cache.error().is_none());
        cache.complete_fetch(retry, Ok(opts(&[("1", "Red")])));
        assert!(cache.is_loaded());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut cache = OptionCache::new();
        let old = cache.begin_fetch().unwrap();
        cache.invalidate();
        let current = cache.begin_fetch().unwrap();

        assert_eq!(cache.complete_fetch(old, Ok(opts(&[("x", "Old")]))), None);
        assert!(cache.options().is_empty());
        assert!(cache.is_loading());

        cache.complete_fetch(current, Ok(opts(&[("1", "New")])));
        assert_eq!(cache.options()[0].name, "New");
    }

    #[test]
    fn test_abandoned_fetch_can_be_requested_again() {
        let mut cache = OptionCache::new();
        let ticket = cache.begin_fetch().unwrap();
        cache.abandon(ticket);
        assert!(!cache.is_loading());
        assert!(cache.needs_fetch());
    }

    #[test]
    fn test_fetch_order_is_kept_and_duplicates_dropped() {
        let mut cache = OptionCache::new();
        let ticket = cache.begin_fetch().unwrap();
        cache.complete_fetch(
            ticket,
            Ok(opts(&[("3", "Green"), ("1", "Red"), ("3", "Green again")])),
        );

        let ids: Vec<&str> = cache.options().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
        assert_eq!(cache.options()[0].name, "Green");
    }

    #[test]
    fn test_created_option_survives_later_fetch() {
        let mut cache = OptionCache::new();
        let ticket = cache.begin_fetch().unwrap();
        cache.append_created(SelectOption::new("9", "Fresh"));
        cache.complete_fetch(ticket, Ok(opts(&[("1", "Red")])));

        let ids: Vec<&str> = cache.options().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "9"]);
    }

    #[test]
    fn test_append_created_does_not_duplicate() {
        let mut cache = OptionCache::seeded(opts(&[("1", "Red")]));
        cache.append_created(SelectOption::new("1", "Red"));
        cache.append_created(SelectOption::new("2", "Blue"));
        assert_eq!(cache.options().len(), 2);
        assert!(cache.is_loaded());
    }

    #[test]
    fn test_created_options_not_carried_when_disabled() {
        let mut cache = OptionCache::seeded(vec![SelectOption::new("1", "Pump")]);
        cache.set_carry_created(false);
        cache.append_created(SelectOption::new("9", "Gasket"));
        assert!(cache.contains("9"));

        cache.seed(vec![SelectOption::new("2", "Valve")]);
        assert_eq!(cache.options().len(), 1);
        assert!(!cache.contains("9"));
    }
}
