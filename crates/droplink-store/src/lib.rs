//! # droplink-store
//!
//! In-memory implementations of the Droplink store traits, backed by
//! [`dashmap`]. These stand in for the external persistence collaborator
//! in tests and single-process deployments; a database-backed
//! implementation can replace them behind the same traits.

pub mod memory;

pub use memory::{MemoryCredentialStore, MemoryLinkStore, MemoryUserStore};
