//! JWT credential issuance with configurable signing secret and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use droplink_core::config::auth::AuthConfig;
use droplink_core::error::AppError;
use droplink_core::result::AppResult;
use droplink_domain::traits::Authenticator;
use droplink_domain::user::{User, UserCredentials};

/// Claims embedded in an issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated user's id.
    pub sub: Uuid,
    /// Issued-at timestamp (seconds).
    pub iat: i64,
    /// Expiry timestamp (seconds).
    pub exp: i64,
}

/// [`Authenticator`] implementation issuing HS256-signed JWTs.
#[derive(Clone)]
pub struct JwtAuthenticator {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in minutes.
    token_ttl_minutes: i64,
}

impl JwtAuthenticator {
    /// Creates a new authenticator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_minutes: config.token_ttl_minutes as i64,
        }
    }
}

impl Authenticator for JwtAuthenticator {
    fn authenticate(&self, user: &User) -> AppResult<UserCredentials> {
        let now = Utc::now();
        let expiry = now + chrono::Duration::minutes(self.token_ttl_minutes);

        let claims = Claims {
            sub: user.id,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::with_source(droplink_core::ErrorKind::Internal, "Token signing failed", e))?;

        Ok(UserCredentials {
            token,
            expiry: Some(expiry),
        })
    }
}
