//! Shared application state for all routes.

use crate::service::ProductStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: impl ProductStore + 'static) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
