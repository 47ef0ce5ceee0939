//! # droplink-provider
//!
//! Storage provider infrastructure for Droplink: the provider registry
//! and the concrete provider API clients. Providers implement the
//! `StorageProvider` trait from `droplink-domain` and are registered in
//! a [`ProviderRegistry`] keyed by their numeric id.

pub mod dropbox;
pub mod mock;
pub mod registry;

pub use dropbox::{DROPBOX_PROVIDER_ID, DropboxProvider};
pub use mock::MockProvider;
pub use registry::ProviderRegistry;
