//! Shared application state.

use std::sync::Arc;

use crate::store::Store;

/// State shared by every request handler.
///
/// Created once at startup and cloned (cheaply) into each request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: impl Store + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
