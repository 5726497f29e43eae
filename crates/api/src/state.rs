//! Shared application state.

use defi_yield_data::YieldDataProvider;
use std::sync::Arc;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn YieldDataProvider>,
}

impl AppState {
    pub fn new(provider: impl YieldDataProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    #[must_use]
    pub fn from_arc(provider: Arc<dyn YieldDataProvider>) -> Self {
        Self { provider }
    }
}
