//! Filter types for storage credential queries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::id::ProviderId;

/// Conjunctive filter for storage credential lookups.
///
/// All supplied predicates are AND-ed. For each list: `None` matches
/// every row, while `Some(vec![])` matches no row at all. The
/// distinction matters — "no providers connected" must come back empty,
/// not as the full table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialFilter {
    /// Restrict to credentials owned by these users.
    pub user_ids: Option<Vec<Uuid>>,
    /// Restrict to credentials for these providers.
    pub provider_ids: Option<Vec<ProviderId>>,
}

impl CredentialFilter {
    /// Filter on a single (user, provider) pair.
    pub fn by_user_and_provider(user_id: Uuid, provider_id: ProviderId) -> Self {
        Self {
            user_ids: Some(vec![user_id]),
            provider_ids: Some(vec![provider_id]),
        }
    }

    /// Filter on a single user.
    pub fn by_user(user_id: Uuid) -> Self {
        Self {
            user_ids: Some(vec![user_id]),
            provider_ids: None,
        }
    }

    /// Check a credential's keys against this filter.
    pub fn matches(&self, user_id: Uuid, provider_id: ProviderId) -> bool {
        if let Some(ref user_ids) = self.user_ids {
            if !user_ids.contains(&user_id) {
                return false;
            }
        }
        if let Some(ref provider_ids) = self.provider_ids {
            if !provider_ids.contains(&provider_id) {
                return false;
            }
        }
        true
    }
}
