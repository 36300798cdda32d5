/// Committed value of a selection field.
///
/// `Multi` keeps ids unique, in the order they were selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionValue {
    Single(Option<String>),
    Multi(Vec<String>),
}

impl Default for SelectionValue {
    fn default() -> Self {
        SelectionValue::Single(None)
    }
}

impl SelectionValue {
    /// Single value; an empty id means "nothing selected"
    pub fn single(id: Option<impl Into<String>>) -> Self {
        SelectionValue::Single(id.map(Into::into).filter(|id: &String| !id.is_empty()))
    }

    /// Multi value with duplicates and empty ids removed
    pub fn multi<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for id in ids.into_iter().map(Into::into) {
            if !id.is_empty() && !unique.contains(&id) {
                unique.push(id);
            }
        }
        SelectionValue::Multi(unique)
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, SelectionValue::Multi(_))
    }

    pub fn ids(&self) -> Vec<&str> {
        match self {
            SelectionValue::Single(id) => id.as_deref().into_iter().collect(),
            SelectionValue::Multi(ids) => ids.iter().map(String::as_str).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        match self {
            SelectionValue::Single(current) => current.as_deref() == Some(id),
            SelectionValue::Multi(ids) => ids.iter().any(|x| x == id),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SelectionValue::Single(id) => usize::from(id.is_some()),
            SelectionValue::Multi(ids) => ids.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A click on `id` in the popover.
    ///
    /// Single: choosing the current id again clears the value.
    /// Multi: toggles membership.
    pub fn select(&mut self, id: &str) {
        match self {
            SelectionValue::Single(current) => {
                if current.as_deref() == Some(id) {
                    *current = None;
                } else if !id.is_empty() {
                    *current = Some(id.to_string());
                }
            }
            SelectionValue::Multi(_) => self.toggle(id),
        }
    }

    /// Flips membership of `id`. On a single value this is `select`.
    pub fn toggle(&mut self, id: &str) {
        match self {
            SelectionValue::Multi(ids) => {
                if let Some(pos) = ids.iter().position(|x| x == id) {
                    ids.remove(pos);
                } else if !id.is_empty() {
                    ids.push(id.to_string());
                }
            }
            SelectionValue::Single(_) => self.select(id),
        }
    }

    /// Makes `id` selected without ever deselecting it
    pub fn insert(&mut self, id: &str) {
        if id.is_empty() {
            return;
        }
        match self {
            SelectionValue::Single(current) => *current = Some(id.to_string()),
            SelectionValue::Multi(ids) => {
                if !ids.iter().any(|x| x == id) {
                    ids.push(id.to_string());
                }
            }
        }
    }

    pub fn remove(&mut self, id: &str) {
        match self {
            SelectionValue::Single(current) => {
                if current.as_deref() == Some(id) {
                    *current = None;
                }
            }
            SelectionValue::Multi(ids) => ids.retain(|x| x != id),
        }
    }

    pub fn clear(&mut self) {
        match self {
            SelectionValue::Single(current) => *current = None,
            SelectionValue::Multi(ids) => ids.clear(),
        }
    }

    pub fn into_single(self) -> Option<String> {
        match self {
            SelectionValue::Single(id) => id,
            SelectionValue::Multi(ids) => ids.into_iter().next(),
        }
    }

    pub fn into_multi(self) -> Vec<String> {
        match self {
            SelectionValue::Single(id) => id.into_iter().collect(),
            SelectionValue::Multi(ids) => ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_self_select_clears() {
        let mut value = SelectionValue::single(Some("x"));
        value.select("x");
        assert_eq!(value, SelectionValue::Single(None));
        assert!(value.is_empty());
    }

    #[test]
    fn test_single_select_replaces() {
        let mut value = SelectionValue::single(Some("x"));
        value.select("y");
        assert_eq!(value.into_single().as_deref(), Some("y"));
    }

    #[test]
    fn test_empty_single_id_is_absent() {
        assert_eq!(SelectionValue::single(Some("")), SelectionValue::Single(None));
    }

    #[test]
    fn test_toggle_twice_restores_set() {
        let start = SelectionValue::multi(["a", "b"]);
        for id in ["a", "c"] {
            let mut value = start.clone();
            value.toggle(id);
            value.toggle(id);
            let mut expected = start.clone().into_multi();
            let mut actual = value.into_multi();
            expected.sort();
            actual.sort();
            assert_eq!(actual, expected, "toggling {id} twice");
        }
    }

    #[test]
    fn test_multi_ids_stay_unique() {
        let mut value = SelectionValue::multi(["a", "a", "b", ""]);
        assert_eq!(value.ids(), vec!["a", "b"]);

        value.insert("b");
        value.insert("c");
        value.toggle("a");
        assert_eq!(value.ids(), vec!["b", "c"]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut single = SelectionValue::single(Some("x"));
        single.remove("y");
        assert!(single.contains("x"));
        single.remove("x");
        assert!(single.is_empty());

        let mut multi = SelectionValue::multi(["1", "2", "3"]);
        multi.remove("2");
        assert_eq!(multi.ids(), vec!["1", "3"]);
        multi.clear();
        assert!(multi.is_empty());
        assert!(multi.is_multi());
    }
}
