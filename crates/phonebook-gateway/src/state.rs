use std::sync::Arc;

use phonebook_core::PersonStore;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn PersonStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn PersonStore {
        self.store.as_ref()
    }
}
