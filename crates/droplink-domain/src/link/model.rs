//! Drop link entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use droplink_core::types::ProviderId;

/// A slug-addressed upload destination owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    /// Unique link identifier.
    pub id: Uuid,
    /// The owning user. Only the owner may mutate or delete the link.
    pub user_id: Uuid,
    /// Display title shown on the drop page.
    pub title: String,
    /// Public addressing slug, unique across all links.
    pub slug: String,
    /// Free-form description.
    pub description: String,
    /// Password hash. Empty when the link is unprotected.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Upload deadline. Absent means the link never expires.
    pub deadline: Option<DateTime<Utc>>,
    /// Bound storage credential, if a provider is connected.
    pub credential_id: Option<Uuid>,
    /// Provider id of the bound credential, denormalized for display.
    pub provider_id: Option<ProviderId>,
    /// When the link was created.
    pub created_at: DateTime<Utc>,
    /// When the link was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Returns whether the link requires a password for uploads.
    pub fn is_protected(&self) -> bool {
        !self.password_hash.is_empty()
    }

    /// Returns whether the upload deadline has passed at `now`.
    ///
    /// A link without a deadline never expires.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.deadline {
            Some(deadline) => deadline < now,
            None => false,
        }
    }

    /// Clear the storage binding (both credential fields).
    pub fn unbind_credential(&mut self) {
        self.credential_id = None;
        self.provider_id = None;
    }
}
