//! Token signing configuration.

use serde::{Deserialize, Serialize};

/// Authentication token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign issued tokens.
    pub jwt_secret: String,
    /// Issued token lifetime in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
}

fn default_token_ttl() -> u64 {
    60 * 24
}
