//! Unified application error types for Droplink.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
///
/// Each domain entity has its own not-found kind so that callers can tell
/// a missing user apart from a missing link without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The user being operated on does not exist.
    UserNotFound,
    /// The link being operated on does not exist.
    LinkNotFound,
    /// No storage credential exists for the (user, provider) pair.
    CredentialNotFound,
    /// The provider id is not registered in the provider registry.
    InvalidProvider,
    /// A user with that email is already registered.
    DuplicateEmail,
    /// Another link already claims that slug.
    DuplicateSlug,
    /// The supplied password does not match the stored hash.
    InvalidPassword,
    /// The password recovery token matched but is past its expiry.
    TokenExpired,
    /// The link's upload deadline has passed.
    LinkExpired,
    /// No authenticated identity was supplied.
    Unauthenticated,
    /// The acting identity is not allowed to perform the action.
    Unauthorized,
    /// Input validation failed.
    Validation,
    /// A configuration or deployment error occurred (e.g. missing mail template).
    Configuration,
    /// An external service call failed (mail delivery, provider API).
    ExternalService,
    /// A store/database error occurred.
    Database,
    /// An internal error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserNotFound => write!(f, "USER_NOT_FOUND"),
            Self::LinkNotFound => write!(f, "LINK_NOT_FOUND"),
            Self::CredentialNotFound => write!(f, "CREDENTIAL_NOT_FOUND"),
            Self::InvalidProvider => write!(f, "INVALID_PROVIDER"),
            Self::DuplicateEmail => write!(f, "DUPLICATE_EMAIL"),
            Self::DuplicateSlug => write!(f, "DUPLICATE_SLUG"),
            Self::InvalidPassword => write!(f, "INVALID_PASSWORD"),
            Self::TokenExpired => write!(f, "TOKEN_EXPIRED"),
            Self::LinkExpired => write!(f, "LINK_EXPIRED"),
            Self::Unauthenticated => write!(f, "UNAUTHENTICATED"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::ExternalService => write!(f, "EXTERNAL_SERVICE"),
            Self::Database => write!(f, "DATABASE"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Droplink.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a user-not-found error.
    pub fn user_not_found() -> Self {
        Self::new(ErrorKind::UserNotFound, "User not found")
    }

    /// Create a link-not-found error.
    pub fn link_not_found() -> Self {
        Self::new(ErrorKind::LinkNotFound, "Link not found")
    }

    /// Create a credential-not-found error.
    pub fn credential_not_found() -> Self {
        Self::new(ErrorKind::CredentialNotFound, "Storage credential not found")
    }

    /// Create an invalid-provider error.
    pub fn invalid_provider() -> Self {
        Self::new(ErrorKind::InvalidProvider, "Invalid storage provider id")
    }

    /// Create a duplicate-email error.
    pub fn duplicate_email() -> Self {
        Self::new(ErrorKind::DuplicateEmail, "Duplicated email")
    }

    /// Create a duplicate-slug error.
    pub fn duplicate_slug() -> Self {
        Self::new(ErrorKind::DuplicateSlug, "Duplicated slug")
    }

    /// Create an invalid-password error.
    pub fn invalid_password() -> Self {
        Self::new(ErrorKind::InvalidPassword, "Invalid password")
    }

    /// Create a token-expired error.
    pub fn token_expired() -> Self {
        Self::new(ErrorKind::TokenExpired, "Password recovery token is expired")
    }

    /// Create a link-expired error.
    pub fn link_expired() -> Self {
        Self::new(ErrorKind::LinkExpired, "Link deadline has passed")
    }

    /// Create an unauthenticated error.
    pub fn unauthenticated() -> Self {
        Self::new(ErrorKind::Unauthenticated, "Authentication required")
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an external-service error.
    pub fn external(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExternalService, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}
