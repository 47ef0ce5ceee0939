//! In-memory storage credential store.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use droplink_core::result::AppResult;
use droplink_core::types::CredentialFilter;
use droplink_domain::credential::UserStorageCredential;
use droplink_domain::traits::CredentialStore;

/// In-memory [`CredentialStore`] keyed by credential id.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    credentials: DashMap<Uuid, UserStorageCredential>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn create(&self, credential: &UserStorageCredential) -> AppResult<UserStorageCredential> {
        self.credentials.insert(credential.id, credential.clone());
        Ok(credential.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserStorageCredential>> {
        Ok(self.credentials.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find(&self, filter: &CredentialFilter) -> AppResult<Vec<UserStorageCredential>> {
        Ok(self
            .credentials
            .iter()
            .filter(|entry| {
                let cred = entry.value();
                filter.matches(cred.user_id, cred.provider_id)
            })
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn update(&self, credential: &UserStorageCredential) -> AppResult<UserStorageCredential> {
        self.credentials.insert(credential.id, credential.clone());
        Ok(credential.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.credentials.remove(&id).is_some())
    }
}
