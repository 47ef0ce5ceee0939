//! Dropbox storage provider client.

use async_trait::async_trait;
use tracing::debug;

use droplink_core::config::provider::DropboxConfig;
use droplink_core::error::AppError;
use droplink_core::result::AppResult;
use droplink_core::types::ProviderId;
use droplink_domain::traits::{ByteStream, ProviderAccountInfo, StorageProvider};

/// Registry id of the Dropbox provider.
pub const DROPBOX_PROVIDER_ID: ProviderId = ProviderId(1);

const ACCOUNT_INFO_URL: &str = "https://api.dropboxapi.com/2/users/get_current_account";
const UPLOAD_URL: &str = "https://content.dropboxapi.com/2/files/upload";

/// [`StorageProvider`] implementation over the Dropbox HTTP API.
///
/// All requests carry the user's access token and a short timeout; no
/// call is retried.
#[derive(Debug, Clone)]
pub struct DropboxProvider {
    client: reqwest::Client,
    remote_directory: String,
}

impl DropboxProvider {
    /// Create a provider from Dropbox configuration.
    pub fn new(config: &DropboxConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    droplink_core::ErrorKind::Configuration,
                    "Failed to build Dropbox HTTP client",
                    e,
                )
            })?;

        Ok(Self {
            client,
            remote_directory: config.remote_directory.clone(),
        })
    }

    async fn check_status(response: reqwest::Response, action: &str) -> AppResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let summary = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<unreadable body>"));
        Err(AppError::external(format!(
            "Dropbox {action} failed with status {status}: {summary}"
        )))
    }
}

#[async_trait]
impl StorageProvider for DropboxProvider {
    fn id(&self) -> ProviderId {
        DROPBOX_PROVIDER_ID
    }

    async fn account_info(&self, credential: &str) -> AppResult<ProviderAccountInfo> {
        let response = self
            .client
            .post(ACCOUNT_INFO_URL)
            .bearer_auth(credential)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    droplink_core::ErrorKind::ExternalService,
                    "Dropbox account info request failed",
                    e,
                )
            })?;
        let response = Self::check_status(response, "account info").await?;

        let body: serde_json::Value = response.json().await.map_err(|e| {
            AppError::with_source(
                droplink_core::ErrorKind::ExternalService,
                "Dropbox account info response was not valid JSON",
                e,
            )
        })?;

        Ok(ProviderAccountInfo {
            email: body
                .get("email")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
            photo: body
                .get("profile_photo_url")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
        })
    }

    async fn upload(
        &self,
        credential: &str,
        file: ByteStream,
        file_name: &str,
        slug: &str,
    ) -> AppResult<()> {
        let api_arg = serde_json::json!({
            "path": format!("/{}/{}/{}", self.remote_directory, slug, file_name),
            "mode": "add",
            "autorename": true,
            "mute": false,
        });

        let response = self
            .client
            .post(UPLOAD_URL)
            .bearer_auth(credential)
            .header("Content-Type", "application/octet-stream")
            .header("Dropbox-API-Arg", api_arg.to_string())
            .body(reqwest::Body::wrap_stream(file))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    droplink_core::ErrorKind::ExternalService,
                    "Dropbox upload request failed",
                    e,
                )
            })?;
        Self::check_status(response, "upload").await?;

        debug!(file_name, slug, "File relayed to Dropbox");
        Ok(())
    }
}
