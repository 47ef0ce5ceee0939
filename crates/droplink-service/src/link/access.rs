//! Public upload surface: slug resolution, password gating, and upload
//! relay. No identity is involved; anyone holding the slug may upload.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use droplink_core::error::AppError;
use droplink_core::result::AppResult;
use droplink_domain::link::Link;
use droplink_domain::traits::{ByteStream, CredentialStore, Hasher, LinkStore};
use droplink_provider::ProviderRegistry;

/// Serves unauthenticated visitors uploading through a drop link.
pub struct AccessService {
    /// Link store.
    link_store: Arc<dyn LinkStore>,
    /// Storage credential store.
    credential_store: Arc<dyn CredentialStore>,
    /// Registered storage providers.
    registry: Arc<ProviderRegistry>,
    /// Password hasher for link protection checks.
    hasher: Arc<dyn Hasher>,
}

impl AccessService {
    /// Creates a new access service.
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

    /// Resolves a public slug to its link.
    pub async fn resolve_slug(&self, slug: &str) -> AppResult<Link> {
        self.link_store
            .find_by_slug(slug)
            .await?
            .ok_or_else(AppError::link_not_found)
    }

    /// Verifies a visitor-supplied password against a link.
    ///
    /// An unprotected link accepts any input. A protected link treats a
    /// missing password the same as a wrong one.
    pub fn verify_password(&self, link: &Link, password: Option<&str>) -> AppResult<()> {
        if !link.is_protected() {
            return Ok(());
        }
        let plain = password.unwrap_or_default();
        if !self.hasher.verify(&link.password_hash, plain) {
            return Err(AppError::invalid_password());
        }
        Ok(())
    }

    /// Relays a visitor upload through the link's bound storage provider.
    ///
    /// Gates apply in order: slug resolution, deadline, password, then
    /// the storage binding. Provider failures propagate unchanged.
    pub async fn relay_upload(
        &self,
        slug: &str,
        password: Option<&str>,
        file_name: &str,
        file: ByteStream,
    ) -> AppResult<()> {
        let link = self.resolve_slug(slug).await?;

        if link.is_expired_at(Utc::now()) {
            debug!(link_id = %link.id, "Upload rejected, link expired");
            return Err(AppError::link_expired());
        }

        self.verify_password(&link, password)?;

        let credential_id = link.credential_id.ok_or_else(AppError::credential_not_found)?;
        let credential = self
            .credential_store
            .find_by_id(credential_id)
            .await?
            .ok_or_else(AppError::credential_not_found)?;

        let provider = self.registry.get(credential.provider_id)?;
        provider
            .upload(&credential.provider_credential, file, file_name, slug)
            .await?;

        info!(link_id = %link.id, file_name, "Upload relayed");

        Ok(())
    }
}
