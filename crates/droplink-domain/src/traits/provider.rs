//! Storage provider capability trait.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use serde::{Deserialize, Serialize};

use droplink_core::result::AppResult;
use droplink_core::types::ProviderId;

/// A byte stream type used for relaying uploaded file contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Account display info fetched from a provider at connect time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderAccountInfo {
    /// Account email on the provider.
    pub email: String,
    /// Account photo URL on the provider.
    pub photo: String,
}

/// Capability interface for an external storage provider.
///
/// Implementations wrap a provider's HTTP API. Calls apply a short
/// timeout and are never retried; failures propagate to the caller
/// unchanged.
#[async_trait]
pub trait StorageProvider: std::fmt::Debug + Send + Sync + 'static {
    /// The fixed registry id of this provider.
    fn id(&self) -> ProviderId;

    /// Fetch account display info using a user's access token.
    async fn account_info(&self, credential: &str) -> AppResult<ProviderAccountInfo>;

    /// Upload a file into the drop directory for `slug`.
    async fn upload(
        &self,
        credential: &str,
        file: ByteStream,
        file_name: &str,
        slug: &str,
    ) -> AppResult<()>;
}
