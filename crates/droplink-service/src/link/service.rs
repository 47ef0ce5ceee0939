//! Owner-facing drop link management.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use droplink_core::error::AppError;
use droplink_core::result::AppResult;
use droplink_core::types::{CredentialFilter, Patch, ProviderId};
use droplink_domain::link::Link;
use droplink_domain::traits::{CredentialStore, Hasher, LinkStore};
use droplink_provider::ProviderRegistry;

use crate::context::Identity;

/// Data for creating a new drop link.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CreateLinkRequest {
    /// Display title.
    pub title: String,
    /// Public slug, unique across all links.
    pub slug: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Optional upload deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Optional upload password. Empty or absent means unprotected.
    pub password: Option<String>,
    /// Storage provider to bind at creation time.
    pub provider_id: Option<ProviderId>,
}

/// Data for updating an existing drop link.
///
/// Title and slug are always written. The remaining fields use
/// [`Patch`] three-way semantics so a caller can distinguish "leave
/// alone" from "clear".
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateLinkRequest {
    /// New display title.
    pub title: String,
    /// New slug.
    pub slug: String,
    /// New description, when present.
    pub description: Option<String>,
    /// Deadline patch.
    #[serde(default)]
    pub deadline: Patch<DateTime<Utc>>,
    /// Password patch. Setting an empty string clears protection.
    #[serde(default)]
    pub password: Patch<String>,
    /// Storage provider binding patch.
    #[serde(default)]
    pub provider: Patch<ProviderId>,
}

/// Manages drop links on behalf of their owners.
pub struct LinkService {
    /// Link store.
    link_store: Arc<dyn LinkStore>,
    /// Storage credential store, consulted when binding a provider.
    credential_store: Arc<dyn CredentialStore>,
    /// Registered storage providers.
    registry: Arc<ProviderRegistry>,
    /// Password hasher for link protection.
    hasher: Arc<dyn Hasher>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        link_store: Arc<dyn LinkStore>,
        credential_store: Arc<dyn CredentialStore>,
        registry: Arc<ProviderRegistry>,
        hasher: Arc<dyn Hasher>,
    ) -> Self {
        Self {
            link_store,
            credential_store,
            registry,
            hasher,
        }
    }

    /// Creates a drop link owned by the acting user.
    pub async fn create_link(
        &self,
        identity: &Identity,
        req: CreateLinkRequest,
    ) -> AppResult<Link> {
        if self.link_store.find_by_slug(&req.slug).await?.is_some() {
            return Err(AppError::duplicate_slug());
        }

        let password_hash = match req.password.as_deref() {
            Some(plain) if !plain.is_empty() => self.hasher.hash(plain)?,
            _ => String::new(),
        };

        let (credential_id, provider_id) = match req.provider_id {
            Some(provider_id) => {
                let credential_id = self.resolve_credential(identity.user_id, provider_id).await?;
                (Some(credential_id), Some(provider_id))
            }
            None => (None, None),
        };

        let now = Utc::now();
        let link = self
            .link_store
            .create(&Link {
                id: Uuid::new_v4(),
                user_id: identity.user_id,
                title: req.title,
                slug: req.slug,
                description: req.description,
                password_hash,
                deadline: req.deadline,
                credential_id,
                provider_id,
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!(link_id = %link.id, slug = %link.slug, "Link created");

        Ok(link)
    }

    /// Updates a drop link owned by the acting user.
    ///
    /// The whole update is validated before anything is written, so a
    /// failed provider binding leaves the stored link untouched.
    pub async fn update_link(
        &self,
        identity: &Identity,
        link_id: Uuid,
        req: UpdateLinkRequest,
    ) -> AppResult<Link> {
        let mut link = self.fetch_owned(identity, link_id).await?;

        if req.slug != link.slug {
            let collision = self.link_store.find_by_slug(&req.slug).await?;
            if collision.is_some_and(|other| other.id != link.id) {
                return Err(AppError::duplicate_slug());
            }
        }

        link.title = req.title;
        link.slug = req.slug;
        if let Some(description) = req.description {
            link.description = description;
        }

        req.deadline.apply(&mut link.deadline);

        match req.password {
            Patch::Keep => {}
            Patch::Clear => link.password_hash = String::new(),
            // An explicit empty password also clears protection.
            Patch::Set(plain) if plain.is_empty() => link.password_hash = String::new(),
            Patch::Set(plain) => link.password_hash = self.hasher.hash(&plain)?,
        }

        match req.provider {
            Patch::Keep => {}
            Patch::Clear => link.unbind_credential(),
            Patch::Set(provider_id) => {
                let credential_id = self.resolve_credential(identity.user_id, provider_id).await?;
                link.credential_id = Some(credential_id);
                link.provider_id = Some(provider_id);
            }
        }

        link.updated_at = Utc::now();
        let link = self.link_store.update(&link).await?;

        info!(link_id = %link.id, slug = %link.slug, "Link updated");

        Ok(link)
    }

    /// Deletes a drop link owned by the acting user.
    pub async fn delete_link(&self, identity: &Identity, link_id: Uuid) -> AppResult<()> {
        let link = self.fetch_owned(identity, link_id).await?;
        self.link_store.delete(link.id).await?;

        info!(link_id = %link.id, "Link deleted");

        Ok(())
    }

    /// Fetches a single link owned by the acting user.
    pub async fn fetch_link(&self, identity: &Identity, link_id: Uuid) -> AppResult<Link> {
        self.fetch_owned(identity, link_id).await
    }

    /// Finds a link by its public slug.
    pub async fn find_link_by_slug(&self, slug: &str) -> AppResult<Link> {
        self.link_store
            .find_by_slug(slug)
            .await?
            .ok_or_else(AppError::link_not_found)
    }

    /// Lists all links owned by the acting user.
    pub async fn list_links(&self, identity: &Identity) -> AppResult<Vec<Link>> {
        self.link_store.list_by_user(identity.user_id).await
    }

    /// Checks a plaintext password against a link's protection.
    ///
    /// An unprotected link accepts any input, including none.
    pub fn check_link_password(&self, link: &Link, password: &str) -> bool {
        if !link.is_protected() {
            return true;
        }
        self.hasher.verify(&link.password_hash, password)
    }

    async fn fetch_owned(&self, identity: &Identity, link_id: Uuid) -> AppResult<Link> {
        let link = self
            .link_store
            .find_by_id(link_id)
            .await?
            .ok_or_else(AppError::link_not_found)?;

        if link.user_id != identity.user_id {
            return Err(AppError::unauthorized("Link is owned by another user"));
        }

        Ok(link)
    }

    /// Resolves the acting user's credential for a provider, validating
    /// the provider id against the registry first.
    async fn resolve_credential(
        &self,
        user_id: Uuid,
        provider_id: ProviderId,
    ) -> AppResult<Uuid> {
        self.registry.get(provider_id)?;

        let filter = CredentialFilter::by_user_and_provider(user_id, provider_id);
        let credential = self
            .credential_store
            .find(&filter)
            .await?
            .into_iter()
            .next()
            .ok_or_else(AppError::credential_not_found)?;

        Ok(credential.id)
    }
}
