use thiserror::Error;

/// Failures of the two remote boundaries of a selection field.
///
/// Neither is ever returned to the host form as an `Err`: the controller
/// records them and the component reports them through `on_error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("failed to load options: {0}")]
    FetchFailed(String),

    #[error("failed to create \"{name}\": {reason}")]
    CreateFailed { name: String, reason: String },
}

impl SelectError {
    /// Message shown inline in the popover
    pub fn user_message(&self) -> String {
        match self {
            SelectError::FetchFailed(_) => "Could not load options".to_string(),
            SelectError::CreateFailed { name, .. } => format!("Could not create \"{}\"", name),
        }
    }
}
