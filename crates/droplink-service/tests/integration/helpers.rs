//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use uuid::Uuid;

use droplink_core::config::mail::RecoveryConfig;
use droplink_core::result::AppResult;
use droplink_core::types::ProviderId;
use droplink_domain::traits::{
    Authenticator, ByteStream, Hasher, MailAddress, Mailer, StringGenerator,
};
use droplink_domain::user::{User, UserCredentials};
use droplink_mailer::MailTemplateRegistry;
use droplink_provider::{MockProvider, ProviderRegistry};
use droplink_service::{AccessService, AccountService, Identity, LinkService};
use droplink_store::{MemoryCredentialStore, MemoryLinkStore, MemoryUserStore};

/// Registry id the test provider is registered under.
pub const TEST_PROVIDER_ID: ProviderId = ProviderId::new(1);

/// Registry id of a provider whose account lookup always fails.
pub const FAILING_PROVIDER_ID: ProviderId = ProviderId::new(2);

/// Reversible "hash" so tests can assert on stored digests.
pub struct PlainHasher;

impl Hasher for PlainHasher {
    fn hash(&self, plain: &str) -> AppResult<String> {
        Ok(format!("plain:{plain}"))
    }

    fn verify(&self, digest: &str, plain: &str) -> bool {
        digest == format!("plain:{plain}")
    }
}

/// Returns queued tokens in order, then random ones.
pub struct PresetGenerator {
    queue: Mutex<VecDeque<String>>,
}

impl PresetGenerator {
    pub fn new<const N: usize>(tokens: [&str; N]) -> Self {
        Self {
            queue: Mutex::new(tokens.iter().map(|t| t.to_string()).collect()),
        }
    }
}

impl StringGenerator for PresetGenerator {
    fn generate(&self) -> String {
        self.queue
            .lock()
            .expect("token queue lock")
            .pop_front()
            .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
    }
}

/// Issues a predictable token derived from the user id.
pub struct StaticAuthenticator;

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, user: &User) -> AppResult<UserCredentials> {
        Ok(UserCredentials {
            token: format!("token-{}", user.id),
            expiry: None,
        })
    }
}

/// A captured outgoing mail.
#[derive(Debug, Clone)]
pub struct SentMail {
    pub from: MailAddress,
    pub to: MailAddress,
    pub subject: String,
    pub plain_body: String,
    pub html_body: String,
}

/// Mailer that records messages instead of sending them.
#[derive(Default)]
pub struct CaptureMailer {
    sent: Mutex<Vec<SentMail>>,
}

impl CaptureMailer {
    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().expect("sent mail lock").clone()
    }
}

#[async_trait]
impl Mailer for CaptureMailer {
    async fn send(
        &self,
        from: &MailAddress,
        to: &MailAddress,
        subject: &str,
        plain_body: &str,
        html_body: &str,
    ) -> AppResult<()> {
        self.sent.lock().expect("sent mail lock").push(SentMail {
            from: from.clone(),
            to: to.clone(),
            subject: subject.to_string(),
            plain_body: plain_body.to_string(),
            html_body: html_body.to_string(),
        });
        Ok(())
    }
}

/// Fully wired service stack over in-memory stores and a mock provider.
pub struct TestApp {
    pub users: Arc<MemoryUserStore>,
    pub links: Arc<MemoryLinkStore>,
    pub credentials: Arc<MemoryCredentialStore>,
    pub provider: Arc<MockProvider>,
    pub mailer: Arc<CaptureMailer>,
    pub account: AccountService,
    pub link: LinkService,
    pub access: AccessService,
}

impl TestApp {
    /// Wire a test application with no pre-queued recovery tokens.
    pub fn new() -> Self {
        Self::with_tokens([])
    }

    /// Wire a test application whose recovery token generator yields the
    /// given tokens in order.
    pub fn with_tokens<const N: usize>(tokens: [&str; N]) -> Self {
        let users = Arc::new(MemoryUserStore::new());
        let links = Arc::new(MemoryLinkStore::new());
        let credentials = Arc::new(MemoryCredentialStore::new());

        let provider = Arc::new(
            MockProvider::new(TEST_PROVIDER_ID)
                .with_account_info("storage@example.com", "https://example.com/photo.jpg"),
        );
        let mut registry = ProviderRegistry::new();
        registry.register(provider.clone());
        registry.register(Arc::new(
            MockProvider::new(FAILING_PROVIDER_ID).with_failing_account_info(),
        ));
        let registry = Arc::new(registry);

        let hasher = Arc::new(PlainHasher);
        let mailer = Arc::new(CaptureMailer::default());

        let recovery = RecoveryConfig {
            token_expiry_minutes: 5,
            web_url: "https://droplink.test/recover-password".to_string(),
            subject: "Recover Password".to_string(),
        };
        let sender = MailAddress::new("bot@droplink.test", "Droplink Bot");

        let account = AccountService::new(
            users.clone(),
            credentials.clone(),
            Arc::new(StaticAuthenticator),
            mailer.clone(),
            Arc::new(MailTemplateRegistry::new()),
            hasher.clone(),
            Arc::new(PresetGenerator::new(tokens)),
            registry.clone(),
            sender,
            recovery,
        );
        let link = LinkService::new(
            links.clone(),
            credentials.clone(),
            registry.clone(),
            hasher.clone(),
        );
        let access = AccessService::new(links.clone(), credentials.clone(), registry, hasher);

        Self {
            users,
            links,
            credentials,
            provider,
            mailer,
            account,
            link,
            access,
        }
    }

    /// Register a user and return them together with their identity.
    pub async fn register_user(&self, email: &str) -> (User, Identity) {
        let user = self
            .account
            .register(email, "Test User", "secret")
            .await
            .expect("register user");
        let identity = Identity::new(user.id);
        (user, identity)
    }

    /// Register a user and connect the test provider for them.
    pub async fn register_connected_user(&self, email: &str) -> (User, Identity) {
        let (user, identity) = self.register_user(email).await;
        self.account
            .connect_storage_provider(user.id, TEST_PROVIDER_ID, "provider-token")
            .await
            .expect("connect provider");
        (user, identity)
    }
}

/// Single-chunk byte stream over static data.
pub fn byte_stream(data: &'static [u8]) -> ByteStream {
    Box::pin(stream::once(async move { Ok(Bytes::from_static(data)) }))
}
