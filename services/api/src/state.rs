//! State handed to every route.

use std::sync::Arc;

use crate::store::ListStore;

/// Cheap-to-clone handle on the checklist store.
///
/// Handlers never hold list data of their own; every read and write goes
/// through the one [`ListStore`] behind this handle.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: ListStore,
}

impl AppState {
    /// Serve lists out of `store`.
    pub fn new(store: ListStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    /// The in-memory lists and items, shared by all requests.
    pub fn store(&self) -> &ListStore {
        &self.inner.store
    }
}
