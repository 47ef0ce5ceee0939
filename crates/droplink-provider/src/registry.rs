//! Provider registry keyed by numeric provider id.

use std::collections::HashMap;
use std::sync::Arc;

use droplink_core::error::AppError;
use droplink_core::result::AppResult;
use droplink_core::types::ProviderId;
use droplink_domain::traits::StorageProvider;

/// Lookup table of registered storage providers.
///
/// Built once at startup and shared read-only; a lookup miss means the
/// caller supplied a provider id this deployment does not support.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    pool: HashMap<ProviderId, Arc<dyn StorageProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its own id.
    pub fn register(&mut self, provider: Arc<dyn StorageProvider>) {
        self.pool.insert(provider.id(), provider);
    }

    /// Look up a provider by id.
    pub fn get(&self, provider_id: ProviderId) -> AppResult<Arc<dyn StorageProvider>> {
        self.pool
            .get(&provider_id)
            .cloned()
            .ok_or_else(AppError::invalid_provider)
    }
}
