//! Storage credential domain entities.

pub mod model;

pub use model::UserStorageCredential;
