//! SMTP, sender, and password recovery configuration.

use serde::{Deserialize, Serialize};

/// SMTP transport and sender identity configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// SMTP relay host.
    pub smtp_host: String,
    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username.
    pub smtp_username: String,
    /// SMTP password.
    pub smtp_password: String,
    /// Sender address for outgoing mail.
    pub from_address: String,
    /// Sender display name for outgoing mail.
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

/// Password recovery flow configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Recovery token lifetime in minutes.
    #[serde(default = "default_token_expiry")]
    pub token_expiry_minutes: u64,
    /// Web frontend URL embedded in the recovery mail; the token and
    /// email are appended as query parameters.
    #[serde(default = "default_web_url")]
    pub web_url: String,
    /// Subject line for the recovery mail.
    #[serde(default = "default_subject")]
    pub subject: String,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            token_expiry_minutes: default_token_expiry(),
            web_url: default_web_url(),
            subject: default_subject(),
        }
    }
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_name() -> String {
    "Droplink Bot".to_string()
}

fn default_token_expiry() -> u64 {
    5
}

fn default_web_url() -> String {
    "https://droplink.example/recover".to_string()
}

fn default_subject() -> String {
    "Recover Password".to_string()
}
