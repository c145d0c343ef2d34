use std::sync::Arc;

use crate::coach::CoachModel;
use crate::store::{EntryStore, UserStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub entries: Arc<dyn EntryStore>,
    pub users: Arc<dyn UserStore>,
    /// `None` when no AI provider key is configured; the coach endpoint then refuses.
    pub coach: Option<Arc<dyn CoachModel>>,
}

#[cfg(test)]
impl AppState {
    /// State over a single in-memory store with no coach model.
    pub fn for_store(store: Arc<crate::store::memory::MemoryStore>) -> Self {
        Self {
            entries: store.clone(),
            users: store,
            coach: None,
        }
    }
}
