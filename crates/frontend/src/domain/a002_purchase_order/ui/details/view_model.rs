use contracts::domain::a002_purchase_order::aggregate::PurchaseOrderDto;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the purchase order form
#[derive(Clone)]
pub struct PurchaseOrderDetailsViewModel {
    pub form: RwSignal<PurchaseOrderDto>,
    pub error: RwSignal<Option<String>>,
}

impl PurchaseOrderDetailsViewModel {
    pub fn new(initial: Option<PurchaseOrderDto>) -> Self {
        Self {
            form: RwSignal::new(initial.unwrap_or_default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || self.form.with(|f| f.validate().is_ok())
    }

    /// Labels of the saved record, for fields whose options are not loaded yet
    pub fn labels(&self) -> Vec<(String, String)> {
        self.form.with_untracked(|f| f.labels.clone())
    }

    /// Validate and hand the form to the host
    pub fn save_command(&self, on_saved: Rc<dyn Fn(PurchaseOrderDto)>) {
        let current = self.form.get_untracked();
        if let Err(message) = current.validate() {
            self.error.set(Some(message));
            return;
        }
        self.error.set(None);
        log::debug!(
            "purchase order ready: vendor={:?}, {} part(s)",
            current.vendor_id,
            current.part_ids.len()
        );
        (on_saved)(current);
    }
}
