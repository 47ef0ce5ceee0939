//! DashMap-backed store implementations.

pub mod credential;
pub mod link;
pub mod user;

pub use credential::MemoryCredentialStore;
pub use link::MemoryLinkStore;
pub use user::MemoryUserStore;
