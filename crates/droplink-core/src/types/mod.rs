//! Shared value types used across the Droplink crates.

pub mod filter;
pub mod id;
pub mod patch;

pub use filter::CredentialFilter;
pub use id::ProviderId;
pub use patch::Patch;
