use contracts::domain::a001_asset::aggregate::AssetDto;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the asset form
#[derive(Clone)]
pub struct AssetDetailsViewModel {
    pub form: RwSignal<AssetDto>,
    pub error: RwSignal<Option<String>>,
}

impl AssetDetailsViewModel {
    pub fn new(initial: Option<AssetDto>) -> Self {
        Self {
            form: RwSignal::new(initial.unwrap_or_default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || !self.form.get().name.trim().is_empty()
    }

    pub fn labels(&self) -> Vec<(String, String)> {
        self.form.with_untracked(|f| f.labels.clone())
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(AssetDto)>) {
        let current = self.form.get_untracked();
        if current.name.trim().is_empty() {
            self.error.set(Some("Name is required".to_string()));
            return;
        }
        self.error.set(None);
        (on_saved)(current);
    }
}
