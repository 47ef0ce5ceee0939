//! In-memory user store.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use droplink_core::result::AppResult;
use droplink_domain::traits::UserStore;
use droplink_domain::user::User;

/// In-memory [`UserStore`] keyed by user id.
///
/// Email uniqueness is enforced by the services' duplicate check, not by
/// the map itself, mirroring the application-level check a unique index
/// would back in a real database.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<Uuid, User>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: &User) -> AppResult<User> {
        self.users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.value().email.eq_ignore_ascii_case(email))
            .map(|entry| entry.value().clone()))
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        self.users.insert(user.id, user.clone());
        Ok(user.clone())
    }
}
