//! User storage credential entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use droplink_core::types::ProviderId;

/// A user's account on a storage provider.
///
/// Join entity between a user and a provider. At most one credential
/// exists per (user, provider) pair; connecting again replaces the
/// stored token and account info in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStorageCredential {
    /// Unique credential identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// The storage provider this credential belongs to.
    pub provider_id: ProviderId,
    /// Provider-specific access token or secret.
    #[serde(skip_serializing)]
    pub provider_credential: String,
    /// Account email, fetched from the provider at connect time.
    pub email: String,
    /// Account photo URL, fetched from the provider at connect time.
    pub photo: String,
    /// When the credential was first connected.
    pub created_at: DateTime<Utc>,
    /// When the credential was last refreshed.
    pub updated_at: DateTime<Utc>,
}

impl UserStorageCredential {
    /// Create a new credential row for a (user, provider) pair.
    pub fn new(
        user_id: Uuid,
        provider_id: ProviderId,
        provider_credential: String,
        email: String,
        photo: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            provider_id,
            provider_credential,
            email,
            photo,
            created_at: now,
            updated_at: now,
        }
    }
}
