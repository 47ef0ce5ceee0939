//! # droplink-service
//!
//! Business logic service layer for Droplink. Each service orchestrates
//! stores and external capabilities to implement application-level use
//! cases: account lifecycle, drop link management, and the public
//! (unauthenticated) upload surface.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod context;
pub mod link;

pub use account::{AccountService, UpdateProfileRequest};
pub use context::{Identity, require_identity};
pub use link::{AccessService, CreateLinkRequest, LinkService, UpdateLinkRequest};
