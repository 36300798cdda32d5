//! Merges the committed value with the fetched options so that a selected id
//! always has something to render, even before its option has been fetched.

use super::selection::SelectionValue;
use contracts::shared::SelectOption;
use std::collections::HashMap;

/// Names remembered for selected ids, captured when the selection was made
/// or supplied by the host together with a saved record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingLabels {
    labels: HashMap<String, String>,
}

impl PendingLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remember(&mut self, id: impl Into<String>, name: impl Into<String>) {
        let name = name.into();
        if !name.trim().is_empty() {
            self.labels.insert(id.into(), name);
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Drops labels whose authoritative option is now present
    pub fn prune(&mut self, options: &[SelectOption]) {
        self.labels
            .retain(|id, _| !options.iter().any(|option| &option.id == id));
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Options to display for `value` given the fetched `options`.
///
/// Every selected id missing from `options` gets a placeholder named after its
/// pending label (or `fallback`). Placeholders come first, in selection order,
/// followed by the fetched options in fetch order.
pub fn reconcile(
    value: &SelectionValue,
    options: &[SelectOption],
    pending: &PendingLabels,
    fallback: &str,
) -> Vec<SelectOption> {
    let mut display: Vec<SelectOption> = value
        .ids()
        .into_iter()
        .filter(|id| !options.iter().any(|option| option.id == *id))
        .map(|id| SelectOption::new(id, pending.get(id).unwrap_or(fallback)))
        .collect();
    display.extend(options.iter().cloned());
    display
}

/// The selected subset of `display`, in selection order
pub fn selected_options(value: &SelectionValue, display: &[SelectOption]) -> Vec<SelectOption> {
    value
        .ids()
        .into_iter()
        .filter_map(|id| display.iter().find(|option| option.id == id).cloned())
        .collect()
}

pub fn filter_options(options: &[SelectOption], term: &str) -> Vec<SelectOption> {
    options
        .iter()
        .filter(|option| option.matches(term))
        .cloned()
        .collect()
}

/// Inline create is offered for a non-empty term that names no cached option
pub fn can_create(options: &[SelectOption], term: &str) -> bool {
    let term = term.trim();
    !term.is_empty() && !options.iter().any(|option| option.has_name(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dynamic_select::config::PENDING_LABEL;

    fn opts(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
        pairs
            .iter()
            .map(|(id, name)| SelectOption::new(*id, *name))
            .collect()
    }

    #[test]
    fn test_unfetched_selection_gets_placeholder() {
        let value = SelectionValue::single(Some("v1"));
        let display = reconcile(&value, &[], &PendingLabels::new(), PENDING_LABEL);

        assert_eq!(display.len(), 1);
        assert_eq!(display[0].id, "v1");
        assert_eq!(display[0].name, "Selected (Pending)");
    }

    #[test]
    fn test_authoritative_name_supersedes_placeholder() {
        let value = SelectionValue::single(Some("v1"));
        let mut pending = PendingLabels::new();
        pending.remember("v1", "Widget (saved)");

        let before = reconcile(&value, &[], &pending, PENDING_LABEL);
        assert_eq!(before[0].name, "Widget (saved)");

        let fetched = opts(&[("v0", "Gadget"), ("v1", "Widget")]);
        let after = reconcile(&value, &fetched, &pending, PENDING_LABEL);
        assert_eq!(after.len(), 2);
        let selected = selected_options(&value, &after);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Widget");
    }

    #[test]
    fn test_placeholders_precede_fetched_options() {
        let value = SelectionValue::multi(["9", "2", "8"]);
        let fetched = opts(&[("1", "Red"), ("2", "Blue")]);
        let display = reconcile(&value, &fetched, &PendingLabels::new(), "?");

        let ids: Vec<&str> = display.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["9", "8", "1", "2"]);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let value = SelectionValue::multi(["3", "1"]);
        let fetched = opts(&[("1", "Red")]);
        let mut pending = PendingLabels::new();
        pending.remember("3", "Green");

        let first = reconcile(&value, &fetched, &pending, PENDING_LABEL);
        let second = reconcile(&value, &fetched, &pending, PENDING_LABEL);
        let names = |list: &[SelectOption]| list.iter().map(|o| o.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&first), names(&second));
        assert_eq!(names(&first), vec!["Green", "Red"]);
    }

    #[test]
    fn test_prune_drops_resolved_labels() {
        let mut pending = PendingLabels::new();
        pending.remember("1", "Red");
        pending.remember("2", "Blue");
        pending.prune(&opts(&[("1", "Red")]));

        assert_eq!(pending.get("1"), None);
        assert_eq!(pending.get("2"), Some("Blue"));
    }

    #[test]
    fn test_blank_label_is_not_remembered() {
        let mut pending = PendingLabels::new();
        pending.remember("1", "  ");
        assert!(pending.is_empty());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let options = opts(&[("1", "Red"), ("2", "Dark red"), ("3", "Blue")]);
        let filtered = filter_options(&options, "RED");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filter_options(&options, "").len(), 3);
    }

    #[test]
    fn test_create_eligibility() {
        let options = opts(&[("1", "Acme")]);
        assert!(!can_create(&options, "acme"));
        assert!(!can_create(&options, "ACME"));
        assert!(can_create(&options, "Acme Co"));
        assert!(!can_create(&options, "   "));
    }
}
