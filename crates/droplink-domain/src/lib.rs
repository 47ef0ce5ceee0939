//! # droplink-domain
//!
//! Domain entity models and collaborator traits for Droplink. Every
//! struct in the entity modules represents a persisted row or a domain
//! value object; the `traits` module defines the narrow interfaces the
//! services use to reach external collaborators (stores, hasher, mailer,
//! authenticator, storage providers).

pub mod credential;
pub mod link;
pub mod traits;
pub mod user;

pub use credential::UserStorageCredential;
pub use link::Link;
pub use user::{User, UserCredentials};
