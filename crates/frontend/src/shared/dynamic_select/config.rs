/// Default label of a selected id whose option has not been fetched yet
pub const PENDING_LABEL: &str = "Selected (Pending)";
pub const EMPTY_TEXT: &str = "No options found";

/// Where the search term goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Filter the cached options in place
    #[default]
    Local,
    /// Hand the term to the host (`on_search`) and show its list unfiltered
    Remote,
}

/// Presentation settings of a selection field
#[derive(Debug, Clone, PartialEq)]
pub struct SelectConfig {
    pub pending_label: String,
    pub empty_text: String,
    pub loading_text: String,
    pub search_placeholder: String,
    pub placeholder: String,
    /// Names longer than this are truncated in chips
    pub chip_max_chars: usize,
    /// Rows visible before the popover list scrolls
    pub limit_options: usize,
    pub row_height_px: usize,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            pending_label: PENDING_LABEL.to_string(),
            empty_text: EMPTY_TEXT.to_string(),
            loading_text: "Loading...".to_string(),
            search_placeholder: "Search...".to_string(),
            placeholder: "Select...".to_string(),
            chip_max_chars: 24,
            limit_options: 6,
            row_height_px: 36,
        }
    }
}

impl SelectConfig {
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_limit_options(mut self, limit: usize) -> Self {
        self.limit_options = limit.max(1);
        self
    }

    pub fn with_chip_max_chars(mut self, max_chars: usize) -> Self {
        self.chip_max_chars = max_chars;
        self
    }

    /// CSS max-height of the option list
    pub fn list_max_height(&self) -> String {
        format!("max-height: {}px;", self.limit_options * self.row_height_px)
    }
}
