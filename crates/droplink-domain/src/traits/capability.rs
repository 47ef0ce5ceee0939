//! External capability traits: hashing, token generation, token signing,
//! mail delivery, and template rendering.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use droplink_core::result::AppResult;

use crate::user::{User, UserCredentials};

/// One-way hashing and verification for secrets.
pub trait Hasher: Send + Sync + 'static {
    /// Hash a plaintext secret.
    fn hash(&self, plain: &str) -> AppResult<String>;

    /// Verify a plaintext secret against a stored digest.
    fn verify(&self, digest: &str, plain: &str) -> bool;
}

/// Produces opaque random token strings.
pub trait StringGenerator: Send + Sync + 'static {
    /// Generate a fresh opaque token.
    fn generate(&self) -> String;
}

/// Issues signed credentials for an authenticated user.
///
/// Token signing is opaque to the services; the concrete implementation
/// decides algorithm, claims, and lifetime.
pub trait Authenticator: Send + Sync + 'static {
    /// Issue fresh credentials for the given user.
    fn authenticate(&self, user: &User) -> AppResult<UserCredentials>;
}

/// A mail sender or recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailAddress {
    /// Bare email address.
    pub address: String,
    /// Display name.
    pub name: String,
}

impl MailAddress {
    /// Create a mail address with a display name.
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
        }
    }
}

/// Delivers transactional mail.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Send a message with both plain-text and HTML bodies.
    async fn send(
        &self,
        from: &MailAddress,
        to: &MailAddress,
        subject: &str,
        plain_body: &str,
        html_body: &str,
    ) -> AppResult<()>;
}

/// Renders named templates against a string value map.
pub trait TemplateRenderer: Send + Sync + 'static {
    /// Render the template registered under `name`.
    ///
    /// An unknown name is a fatal configuration error — it indicates a
    /// broken deployment, not bad user input.
    fn render(&self, name: &str, values: &HashMap<String, String>) -> AppResult<String>;
}
