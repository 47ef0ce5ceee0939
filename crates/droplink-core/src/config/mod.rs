//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Environment variables prefixed with `DROPLINK_` override
//! file values (e.g. `DROPLINK_AUTH__JWT_SECRET`).

pub mod auth;
pub mod logging;
pub mod mail;
pub mod provider;

use serde::{Deserialize, Serialize};

use self::auth::AuthConfig;
use self::logging::LoggingConfig;
use self::mail::{MailConfig, RecoveryConfig};
use self::provider::ProviderConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration file plus environment overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Token signing settings.
    pub auth: AuthConfig,
    /// SMTP and sender settings.
    pub mail: MailConfig,
    /// Password recovery settings.
    #[serde(default)]
    pub recovery: RecoveryConfig,
    /// Storage provider settings.
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file, applying `DROPLINK_` prefixed
    /// environment variable overrides on top.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(
                config::Environment::with_prefix("DROPLINK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::with_source(crate::ErrorKind::Configuration, "Failed to read configuration", e))?;

        settings.try_deserialize().map_err(|e| {
            AppError::with_source(
                crate::ErrorKind::Configuration,
                "Failed to deserialize configuration",
                e,
            )
        })
    }
}
