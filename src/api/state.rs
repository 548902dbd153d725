//! Application state for the payroll API.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::service::PayrollService;
use crate::store::InMemoryStore;

/// Shared application state.
///
/// Holds the payroll service; the store behind it is shared by every
/// request handler.
#[derive(Clone)]
pub struct AppState {
    service: PayrollService<InMemoryStore>,
}

impl AppState {
    /// Creates application state around an existing service.
    pub fn new(service: PayrollService<InMemoryStore>) -> Self {
        Self { service }
    }

    /// Creates application state backed by an in-memory store seeded from
    /// the loaded configuration.
    pub fn from_config(config: ConfigLoader) -> Self {
        let store = InMemoryStore::from_seed(config.into_seed());
        Self::new(PayrollService::new(Arc::new(store)))
    }

    /// Returns the payroll service.
    pub fn service(&self) -> &PayrollService<InMemoryStore> {
        &self.service
    }
}
