//! Account management — registration, authentication, profile updates,
//! password recovery, and storage provider connections.

pub mod service;

pub use service::{AccountService, UpdateProfileRequest};
