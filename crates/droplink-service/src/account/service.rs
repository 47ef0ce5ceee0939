//! Account service — identity, password recovery, and provider bindings.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use droplink_core::config::mail::RecoveryConfig;
use droplink_core::error::AppError;
use droplink_core::result::AppResult;
use droplink_core::types::{CredentialFilter, ProviderId};
use droplink_domain::credential::UserStorageCredential;
use droplink_domain::traits::{
    Authenticator, CredentialStore, Hasher, MailAddress, Mailer, StringGenerator,
    TemplateRenderer, UserStore,
};
use droplink_domain::user::{User, UserCredentials};
use droplink_provider::ProviderRegistry;

/// Template names for the password recovery mail bodies.
const RECOVERY_TEMPLATE_TEXT: &str = "recover_password_text";
const RECOVERY_TEMPLATE_HTML: &str = "recover_password_html";

/// Manages account registration, authentication, profile and password
/// updates, password recovery, and storage provider connections.
pub struct AccountService {
    /// User store.
    user_store: Arc<dyn UserStore>,
    /// Storage credential store.
    credential_store: Arc<dyn CredentialStore>,
    /// External token issuer.
    authenticator: Arc<dyn Authenticator>,
    /// Mail delivery.
    mailer: Arc<dyn Mailer>,
    /// Mail template renderer.
    templates: Arc<dyn TemplateRenderer>,
    /// Password hasher.
    hasher: Arc<dyn Hasher>,
    /// Opaque recovery token generator.
    string_generator: Arc<dyn StringGenerator>,
    /// Registered storage providers.
    registry: Arc<ProviderRegistry>,
    /// Sender identity for outgoing mail.
    sender: MailAddress,
    /// Password recovery settings.
    recovery: RecoveryConfig,
}

/// Data for updating a user's own profile.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateProfileRequest {
    /// New display name (optional).
    pub name: Option<String>,
    /// New password (optional; requires `old_password`).
    pub new_password: Option<String>,
    /// Current password, verified before a password change.
    pub old_password: Option<String>,
}

impl AccountService {
    /// Creates a new account service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_store: Arc<dyn UserStore>,
        credential_store: Arc<dyn CredentialStore>,
        authenticator: Arc<dyn Authenticator>,
        mailer: Arc<dyn Mailer>,
        templates: Arc<dyn TemplateRenderer>,
        hasher: Arc<dyn Hasher>,
        string_generator: Arc<dyn StringGenerator>,
        registry: Arc<ProviderRegistry>,
        sender: MailAddress,
        recovery: RecoveryConfig,
    ) -> Self {
        Self {
            user_store,
            credential_store,
            authenticator,
            mailer,
            templates,
            hasher,
            string_generator,
            registry,
            sender,
            recovery,
        }
    }

    /// Registers a new account.
    ///
    /// The email must not already be registered; the password is hashed
    /// before anything is stored.
    pub async fn register(&self, email: &str, name: &str, password: &str) -> AppResult<User> {
        if self.user_store.find_by_email(email).await?.is_some() {
            return Err(AppError::duplicate_email());
        }

        let password_hash = self.hasher.hash(password)?;
        let user = self
            .user_store
            .create(&User::new(email, name, password_hash))
            .await?;

        info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Authenticates by email and password, returning fresh credentials.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<UserCredentials> {
        let user = self
            .user_store
            .find_by_email(email)
            .await?
            .ok_or_else(AppError::user_not_found)?;

        if !self.hasher.verify(&user.password_hash, password) {
            return Err(AppError::invalid_password());
        }

        self.authenticator.authenticate(&user)
    }

    /// Updates the user's name and/or password.
    ///
    /// A password change requires the current password; a missing or
    /// wrong current password both fail the same way.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        req: UpdateProfileRequest,
    ) -> AppResult<User> {
        let mut user = self
            .user_store
            .find_by_id(user_id)
            .await?
            .ok_or_else(AppError::user_not_found)?;

        if let Some(ref new_password) = req.new_password {
            let verified = req
                .old_password
                .as_deref()
                .is_some_and(|old| self.hasher.verify(&user.password_hash, old));
            if !verified {
                return Err(AppError::invalid_password());
            }
            user.password_hash = self.hasher.hash(new_password)?;
        }

        if let Some(name) = req.name {
            user.name = name;
        }

        user.updated_at = Utc::now();
        let user = self.user_store.update(&user).await?;

        info!(user_id = %user.id, "Profile updated");

        Ok(user)
    }

    /// Issues a time-boxed recovery token and mails it to the account.
    ///
    /// Re-requesting while a token is outstanding overwrites it.
    pub async fn request_password_recovery(&self, email: &str) -> AppResult<()> {
        let mut user = self
            .user_store
            .find_by_email(email)
            .await?
            .ok_or_else(AppError::user_not_found)?;

        let token = self.string_generator.generate();
        let expiry = Utc::now() + chrono::Duration::minutes(self.recovery.token_expiry_minutes as i64);
        user.issue_recovery_token(token.clone(), expiry);
        user.updated_at = Utc::now();
        let user = self.user_store.update(&user).await?;

        self.send_recovery_mail(&user, &token).await?;

        info!(user_id = %user.id, "Password recovery requested");

        Ok(())
    }

    /// Redeems a recovery token and sets a new password.
    ///
    /// A missing user, empty token argument, absent stored token, and a
    /// token mismatch all collapse into the same not-found error so the
    /// response does not leak which case applied.
    pub async fn recover_password(
        &self,
        email: &str,
        token: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let mut user = self
            .user_store
            .find_by_email(email)
            .await?
            .ok_or_else(AppError::user_not_found)?;

        let matches = !token.is_empty()
            && user
                .recover_password_token
                .as_deref()
                .is_some_and(|stored| stored == token);
        if !matches {
            return Err(AppError::user_not_found());
        }

        // A token without an expiry violates the invariant; treat it as expired.
        match user.recover_password_token_expiry {
            Some(expiry) if Utc::now() <= expiry => {}
            _ => return Err(AppError::token_expired()),
        }

        user.password_hash = self.hasher.hash(new_password)?;
        user.clear_recovery_token();
        user.updated_at = Utc::now();
        self.user_store.update(&user).await?;

        info!(user_id = %user.id, "Password recovered");

        Ok(())
    }

    /// Connects a storage provider account, upserting the credential for
    /// the (user, provider) pair.
    ///
    /// Provider-side failures propagate unchanged and leave no state behind.
    pub async fn connect_storage_provider(
        &self,
        user_id: Uuid,
        provider_id: ProviderId,
        provider_credential: &str,
    ) -> AppResult<()> {
        let provider = self.registry.get(provider_id)?;

        let user = self
            .user_store
            .find_by_id(user_id)
            .await?
            .ok_or_else(AppError::user_not_found)?;

        let account_info = provider.account_info(provider_credential).await?;

        let filter = CredentialFilter::by_user_and_provider(user.id, provider_id);
        let existing = self.credential_store.find(&filter).await?.into_iter().next();

        match existing {
            Some(mut credential) => {
                credential.provider_credential = provider_credential.to_string();
                credential.email = account_info.email;
                credential.photo = account_info.photo;
                credential.updated_at = Utc::now();
                self.credential_store.update(&credential).await?;
            }
            None => {
                let credential = UserStorageCredential::new(
                    user.id,
                    provider_id,
                    provider_credential.to_string(),
                    account_info.email,
                    account_info.photo,
                );
                self.credential_store.create(&credential).await?;
            }
        }

        info!(user_id = %user.id, %provider_id, "Storage provider connected");

        Ok(())
    }

    /// Disconnects a storage provider. Disconnecting a provider that was
    /// never connected is a no-op.
    pub async fn disconnect_storage_provider(
        &self,
        user_id: Uuid,
        provider_id: ProviderId,
    ) -> AppResult<()> {
        // Validate the provider id even though no provider call is made.
        self.registry.get(provider_id)?;

        let user = self
            .user_store
            .find_by_id(user_id)
            .await?
            .ok_or_else(AppError::user_not_found)?;

        let filter = CredentialFilter::by_user_and_provider(user.id, provider_id);
        if let Some(credential) = self.credential_store.find(&filter).await?.into_iter().next() {
            self.credential_store.delete(credential.id).await?;
            info!(user_id = %user.id, %provider_id, "Storage provider disconnected");
        }

        Ok(())
    }

    /// Lists the user's connected storage providers.
    pub async fn list_storage_providers(
        &self,
        user_id: Uuid,
    ) -> AppResult<Vec<UserStorageCredential>> {
        self.credential_store
            .find(&CredentialFilter::by_user(user_id))
            .await
    }

    /// Sets or clears the legacy single Dropbox token on the user row.
    pub async fn update_storage_token(
        &self,
        user_id: Uuid,
        dropbox_token: Option<String>,
    ) -> AppResult<User> {
        let mut user = self
            .user_store
            .find_by_id(user_id)
            .await?
            .ok_or_else(AppError::user_not_found)?;

        user.dropbox_token = dropbox_token;
        user.updated_at = Utc::now();
        self.user_store.update(&user).await
    }

    async fn send_recovery_mail(&self, user: &User, token: &str) -> AppResult<()> {
        let reset_password_link = format!(
            "{}?token={}&email={}",
            self.recovery.web_url, token, user.email
        );
        let values = HashMap::from([
            ("reset_password_link".to_string(), reset_password_link),
            ("token".to_string(), token.to_string()),
        ]);

        let plain_body = self.templates.render(RECOVERY_TEMPLATE_TEXT, &values)?;
        let html_body = self.templates.render(RECOVERY_TEMPLATE_HTML, &values)?;

        let to = MailAddress::new(user.email.clone(), user.name.clone());
        self.mailer
            .send(&self.sender, &to, &self.recovery.subject, &plain_body, &html_body)
            .await
    }
}
