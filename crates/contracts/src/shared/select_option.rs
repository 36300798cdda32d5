use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// One selectable choice returned by `GET /api/options/{entity}`.
///
/// Identity is the `id`: two options with the same id are the same option,
/// even if one of them carries a stale or placeholder name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub name: String,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Case-insensitive substring match on the display name.
    /// An empty (or whitespace-only) term matches every option.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term.to_lowercase())
    }

    /// Case-insensitive equality of the whole name
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

impl PartialEq for SelectOption {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SelectOption {}

impl Hash for SelectOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Тело запроса `POST /api/options/{entity}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOptionRequest {
    pub name: String,
}
