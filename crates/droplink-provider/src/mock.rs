//! In-memory mock storage provider for tests and local wiring.

use std::sync::Mutex;

use async_trait::async_trait;
use futures::TryStreamExt;

use droplink_core::error::AppError;
use droplink_core::result::AppResult;
use droplink_core::types::ProviderId;
use droplink_domain::traits::{ByteStream, ProviderAccountInfo, StorageProvider};

/// A recorded upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpload {
    /// Credential the upload was made with.
    pub credential: String,
    /// Uploaded file name.
    pub file_name: String,
    /// Slug of the target link.
    pub slug: String,
    /// Number of bytes received.
    pub size_bytes: usize,
}

/// [`StorageProvider`] that keeps everything in memory.
///
/// Constructed per test and injected explicitly; account info and
/// failure behavior are configured on the instance.
#[derive(Debug)]
pub struct MockProvider {
    id: ProviderId,
    account_info: ProviderAccountInfo,
    fail_account_info: bool,
    uploads: Mutex<Vec<RecordedUpload>>,
}

impl MockProvider {
    /// Create a mock provider with the given registry id.
    pub fn new(id: ProviderId) -> Self {
        Self {
            id,
            account_info: ProviderAccountInfo {
                email: "mock@example.com".to_string(),
                photo: String::new(),
            },
            fail_account_info: false,
            uploads: Mutex::new(Vec::new()),
        }
    }

    /// Set the account info returned by `account_info`.
    pub fn with_account_info(mut self, email: impl Into<String>, photo: impl Into<String>) -> Self {
        self.account_info = ProviderAccountInfo {
            email: email.into(),
            photo: photo.into(),
        };
        self
    }

    /// Make `account_info` fail, simulating a provider-side error.
    pub fn with_failing_account_info(mut self) -> Self {
        self.fail_account_info = true;
        self
    }

    /// Snapshot of all recorded uploads.
    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().expect("uploads lock").clone()
    }
}

#[async_trait]
impl StorageProvider for MockProvider {
    fn id(&self) -> ProviderId {
        self.id
    }

    async fn account_info(&self, _credential: &str) -> AppResult<ProviderAccountInfo> {
        if self.fail_account_info {
            return Err(AppError::external("mock provider rejected the credential"));
        }
        Ok(self.account_info.clone())
    }

    async fn upload(
        &self,
        credential: &str,
        file: ByteStream,
        file_name: &str,
        slug: &str,
    ) -> AppResult<()> {
        let chunks: Vec<_> = file.try_collect().await.map_err(|e| {
            AppError::with_source(
                droplink_core::ErrorKind::ExternalService,
                "mock provider failed to read upload stream",
                e,
            )
        })?;
        let size_bytes = chunks.iter().map(|chunk| chunk.len()).sum();

        self.uploads.lock().expect("uploads lock").push(RecordedUpload {
            credential: credential.to_string(),
            file_name: file_name.to_string(),
            slug: slug.to_string(),
            size_bytes,
        });
        Ok(())
    }
}
