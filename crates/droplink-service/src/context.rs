//! Acting identity threaded through operations where ownership matters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use droplink_core::error::AppError;
use droplink_core::result::AppResult;

/// The authenticated identity behind a request.
///
/// Resolved by the transport boundary from its session mechanism and
/// passed explicitly into the operations where ownership is the business
/// rule. Public operations (slug lookup, password check, upload) take no
/// identity at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The authenticated user's id.
    pub user_id: Uuid,
}

impl Identity {
    /// Creates an identity for the given user.
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

/// Rejects unauthenticated requests at the transport boundary.
///
/// Call before invoking any mutation operation; `None` means the request
/// carried no valid session.
pub fn require_identity(identity: Option<&Identity>) -> AppResult<&Identity> {
    identity.ok_or_else(AppError::unauthenticated)
}
