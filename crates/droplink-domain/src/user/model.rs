//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique email address used for login.
    pub email: String,
    /// Human-readable display name.
    pub name: String,
    /// Argon2 password hash. Plaintext passwords are never stored.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Legacy single Dropbox access token, superseded by
    /// [`UserStorageCredential`](crate::credential::UserStorageCredential).
    pub dropbox_token: Option<String>,
    /// Legacy single Google Drive access token, superseded by
    /// [`UserStorageCredential`](crate::credential::UserStorageCredential).
    pub drive_token: Option<String>,
    /// Outstanding password recovery token, if one was requested.
    #[serde(skip_serializing)]
    pub recover_password_token: Option<String>,
    /// Expiry of the outstanding recovery token. Set and cleared
    /// together with `recover_password_token`.
    pub recover_password_token_expiry: Option<DateTime<Utc>>,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a pre-hashed password.
    pub fn new(email: impl Into<String>, name: impl Into<String>, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            name: name.into(),
            password_hash,
            dropbox_token: None,
            drive_token: None,
            recover_password_token: None,
            recover_password_token_expiry: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns whether a recovery token is currently stored.
    pub fn has_outstanding_recovery(&self) -> bool {
        self.recover_password_token.is_some()
    }

    /// Store a freshly issued recovery token and its expiry. Any
    /// previously outstanding token is overwritten.
    pub fn issue_recovery_token(&mut self, token: String, expiry: DateTime<Utc>) {
        self.recover_password_token = Some(token);
        self.recover_password_token_expiry = Some(expiry);
    }

    /// Clear both recovery fields after a successful redemption.
    pub fn clear_recovery_token(&mut self) {
        self.recover_password_token = None;
        self.recover_password_token_expiry = None;
    }
}

/// Ephemeral credentials issued on successful authentication.
///
/// Never persisted; produced fresh on every login, registration, or
/// password recovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCredentials {
    /// Opaque signed token.
    pub token: String,
    /// Token expiration timestamp, if the authenticator sets one.
    pub expiry: Option<DateTime<Utc>>,
}
