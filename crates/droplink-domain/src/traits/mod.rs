//! Collaborator traits the services depend on.
//!
//! Each trait is a narrow interface over an external capability:
//! persistence stores, one-way hashing, token signing, mail delivery,
//! template rendering, and storage provider APIs. Implementations live
//! in the infrastructure crates and are injected via `Arc` at
//! construction time.

pub mod capability;
pub mod provider;
pub mod store;

pub use capability::{Authenticator, Hasher, MailAddress, Mailer, StringGenerator, TemplateRenderer};
pub use provider::{ByteStream, ProviderAccountInfo, StorageProvider};
pub use store::{CredentialStore, LinkStore, UserStore};
