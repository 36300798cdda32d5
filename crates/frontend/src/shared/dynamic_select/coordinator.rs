use leptos::prelude::*;

/// Name of the one field whose popover is open.
///
/// Opening a field overwrites the slot, which is how every sibling closes:
/// they read `is_open` as false on their next render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSlot {
    active: Option<String>,
}

impl ActiveSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.active.as_deref() == Some(name)
    }

    pub fn open(&mut self, name: &str) {
        self.active = Some(name.to_string());
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}

/// Shared open-popover register of one form.
///
/// Provide it once per form with `provide_dropdown_coordinator`; every
/// `DynamicSelect` inside picks it up with `use_dropdown_coordinator`.
#[derive(Clone, Copy)]
pub struct DropdownCoordinator {
    slot: RwSignal<ActiveSlot>,
}

impl DropdownCoordinator {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(ActiveSlot::new()),
        }
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.slot.with(|slot| slot.is_open(name))
    }

    /// Runs `f` against the register; `None` if the form is gone
    pub fn with_slot<R>(&self, f: impl FnOnce(&mut ActiveSlot) -> R) -> Option<R> {
        self.slot.try_update(f)
    }
}

impl Default for DropdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_dropdown_coordinator() -> DropdownCoordinator {
    let coordinator = DropdownCoordinator::new();
    provide_context(coordinator);
    coordinator
}

/// Coordinator of the enclosing form. A field mounted outside any form gets
/// a private one, so it still opens and closes but is exclusive with nobody.
pub fn use_dropdown_coordinator() -> DropdownCoordinator {
    use_context::<DropdownCoordinator>().unwrap_or_else(|| {
        log::warn!("DropdownCoordinator not provided in context; using a private one");
        DropdownCoordinator::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_one_closes_the_other() {
        let mut slot = ActiveSlot::new();
        slot.open("a");
        slot.open("b");
        assert!(!slot.is_open("a"));
        assert!(slot.is_open("b"));
    }

    #[test]
    fn test_close_and_repeated_open() {
        let mut slot = ActiveSlot::new();
        slot.open("a");
        slot.open("a");
        assert_eq!(slot.active(), Some("a"));
        slot.close();
        slot.close();
        assert_eq!(slot.active(), None);
        assert!(!slot.is_open("a"));
    }
}
