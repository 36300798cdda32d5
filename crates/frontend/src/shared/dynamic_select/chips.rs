use contracts::shared::SelectOption;

/// How the selected options are shown inside the control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChipMode {
    /// At most one chip
    Single,
    /// First chip plus a `+N` badge listing the rest on hover
    #[default]
    Compact,
    /// One removable chip per selected option
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub id: String,
    pub label: String,
    pub full_name: String,
    pub truncated: bool,
    pub removable: bool,
}

impl Chip {
    /// Hover text: the full name, only when the label was cut
    pub fn tooltip(&self) -> Option<String> {
        self.truncated.then(|| self.full_name.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowBadge {
    pub label: String,
    pub names: Vec<String>,
}

impl OverflowBadge {
    pub fn tooltip(&self) -> String {
        self.names.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChipLayout {
    pub chips: Vec<Chip>,
    pub overflow: Option<OverflowBadge>,
}

impl ChipLayout {
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }
}

/// Cuts `name` to `max_chars` characters followed by an ellipsis.
/// Returns the label and whether it was cut.
pub fn truncate_label(name: &str, max_chars: usize) -> (String, bool) {
    if name.chars().count() <= max_chars {
        return (name.to_string(), false);
    }
    let mut label: String = name.chars().take(max_chars).collect::<String>().trim_end().to_string();
    label.push('…');
    (label, true)
}

fn chip(option: &SelectOption, max_chars: usize, removable: bool) -> Chip {
    let (label, truncated) = truncate_label(&option.name, max_chars);
    Chip {
        id: option.id.clone(),
        label,
        full_name: option.name.clone(),
        truncated,
        removable,
    }
}

/// Lays out the selected options (in selection order) for `mode`
pub fn layout_chips(selected: &[SelectOption], mode: ChipMode, max_chars: usize) -> ChipLayout {
    match mode {
        ChipMode::Single => ChipLayout {
            chips: selected.iter().take(1).map(|o| chip(o, max_chars, true)).collect(),
            overflow: None,
        },
        ChipMode::Compact => {
            let Some((first, rest)) = selected.split_first() else {
                return ChipLayout::default();
            };
            let overflow = (!rest.is_empty()).then(|| OverflowBadge {
                label: format!("+{}", rest.len()),
                names: rest.iter().map(|o| o.name.clone()).collect(),
            });
            ChipLayout {
                chips: vec![chip(first, max_chars, true)],
                overflow,
            }
        }
        ChipMode::Full => ChipLayout {
            chips: selected.iter().map(|o| chip(o, max_chars, true)).collect(),
            overflow: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(names: &[&str]) -> Vec<SelectOption> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| SelectOption::new((i + 1).to_string(), *name))
            .collect()
    }

    #[test]
    fn test_compact_shows_first_chip_and_badge() {
        let layout = layout_chips(&selected(&["Red", "Blue"]), ChipMode::Compact, 24);

        assert_eq!(layout.chips.len(), 1);
        assert_eq!(layout.chips[0].label, "Red");
        assert!(layout.chips[0].removable);
        let badge = layout.overflow.unwrap();
        assert_eq!(badge.label, "+1");
        assert_eq!(badge.tooltip(), "Blue");
    }

    #[test]
    fn test_compact_badge_lists_all_remaining() {
        let layout = layout_chips(
            &selected(&["Red", "Blue", "Green", "Black"]),
            ChipMode::Compact,
            24,
        );
        let badge = layout.overflow.unwrap();
        assert_eq!(badge.label, "+3");
        assert_eq!(badge.names, vec!["Blue", "Green", "Black"]);
    }

    #[test]
    fn test_compact_single_selection_has_no_badge() {
        let layout = layout_chips(&selected(&["Red"]), ChipMode::Compact, 24);
        assert_eq!(layout.chips.len(), 1);
        assert!(layout.overflow.is_none());
    }

    #[test]
    fn test_full_renders_every_chip() {
        let layout = layout_chips(&selected(&["Pump", "Motor", "Valve"]), ChipMode::Full, 24);
        assert_eq!(layout.chips.len(), 3);
        assert!(layout.chips.iter().all(|c| c.removable));
        assert!(layout.overflow.is_none());
    }

    #[test]
    fn test_single_and_empty() {
        assert!(layout_chips(&[], ChipMode::Single, 24).is_empty());
        assert!(layout_chips(&[], ChipMode::Compact, 24).is_empty());
        assert_eq!(
            layout_chips(&selected(&["A", "B"]), ChipMode::Single, 24).chips.len(),
            1
        );
    }

    #[test]
    fn test_long_name_is_truncated_with_tooltip() {
        let layout = layout_chips(
            &selected(&["Centrifugal pump housing gasket"]),
            ChipMode::Single,
            10,
        );
        let chip = &layout.chips[0];
        assert!(chip.truncated);
        assert_eq!(chip.label, "Centrifuga…");
        assert_eq!(chip.tooltip().as_deref(), Some("Centrifugal pump housing gasket"));
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_label("Насос", 5), ("Насос".to_string(), false));
        assert_eq!(truncate_label("Насосная", 5), ("Насос…".to_string(), true));
        assert_eq!(truncate_label("Pump house", 5), ("Pump…".to_string(), true));
    }
}
