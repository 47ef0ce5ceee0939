//! In-memory link store.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use droplink_core::result::AppResult;
use droplink_domain::link::Link;
use droplink_domain::traits::LinkStore;

/// In-memory [`LinkStore`] keyed by link id.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    links: DashMap<Uuid, Link>,
}

impl MemoryLinkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn create(&self, link: &Link) -> AppResult<Link> {
        self.links.insert(link.id, link.clone());
        Ok(link.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Link>> {
        Ok(self.links.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Link>> {
        Ok(self
            .links
            .iter()
            .find(|entry| entry.value().slug == slug)
            .map(|entry| entry.value().clone()))
    }

    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Link>> {
        Ok(self
            .links
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn update(&self, link: &Link) -> AppResult<Link> {
        self.links.insert(link.id, link.clone());
        Ok(link.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.links.remove(&id).is_some())
    }
}
