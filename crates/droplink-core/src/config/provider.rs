//! Storage provider configuration.

use serde::{Deserialize, Serialize};

/// Settings for all registered storage providers.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderConfig {
    /// Dropbox provider settings.
    #[serde(default)]
    pub dropbox: DropboxConfig,
}

/// Dropbox storage provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropboxConfig {
    /// Remote directory files are uploaded under; the link slug is
    /// appended as a sub-directory.
    #[serde(default = "default_remote_directory")]
    pub remote_directory: String,
    /// HTTP request timeout in seconds for provider API calls.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for DropboxConfig {
    fn default() -> Self {
        Self {
            remote_directory: default_remote_directory(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_remote_directory() -> String {
    "droplink".to_string()
}

fn default_request_timeout() -> u64 {
    5
}
