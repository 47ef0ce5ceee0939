//! Persistence store traits.
//!
//! Lookups return `Ok(None)` on a miss so that callers decide whether a
//! miss is an error: a primary fetch maps it to the entity's not-found
//! kind, while a secondary probe (slug collision check, upsert lookup)
//! treats it as an expected non-error.

use async_trait::async_trait;
use uuid::Uuid;

use droplink_core::result::AppResult;
use droplink_core::types::CredentialFilter;

use crate::credential::UserStorageCredential;
use crate::link::Link;
use crate::user::User;

/// Store for [`User`] rows.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Persist a new user and return it.
    async fn create(&self, user: &User) -> AppResult<User>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by unique email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Update an existing user and return the updated version.
    async fn update(&self, user: &User) -> AppResult<User>;
}

/// Store for [`Link`] rows.
#[async_trait]
pub trait LinkStore: Send + Sync + 'static {
    /// Persist a new link and return it.
    async fn create(&self, link: &Link) -> AppResult<Link>;

    /// Find a link by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Link>>;

    /// Find a link by unique slug.
    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Link>>;

    /// List all links owned by a user.
    async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Link>>;

    /// Update an existing link and return the updated version.
    async fn update(&self, link: &Link) -> AppResult<Link>;

    /// Delete a link by primary key. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Store for [`UserStorageCredential`] rows.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Persist a new credential and return it.
    async fn create(&self, credential: &UserStorageCredential) -> AppResult<UserStorageCredential>;

    /// Find a credential by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserStorageCredential>>;

    /// Find credentials matching a conjunctive filter. See
    /// [`CredentialFilter`] for the none-vs-empty list semantics.
    async fn find(&self, filter: &CredentialFilter) -> AppResult<Vec<UserStorageCredential>>;

    /// Update an existing credential and return the updated version.
    async fn update(&self, credential: &UserStorageCredential) -> AppResult<UserStorageCredential>;

    /// Delete a credential by primary key. Returns `true` if a row was
    /// deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
