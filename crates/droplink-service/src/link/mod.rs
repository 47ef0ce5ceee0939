//! Drop link management and the public upload surface.

pub mod access;
pub mod service;

pub use access::AccessService;
pub use service::{CreateLinkRequest, LinkService, UpdateLinkRequest};
