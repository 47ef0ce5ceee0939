//! # droplink-auth
//!
//! Credential infrastructure for Droplink:
//!
//! - `password` — Argon2id implementation of the `Hasher` trait
//! - `jwt` — JWT implementation of the `Authenticator` trait
//! - `token` — UUID implementation of the `StringGenerator` trait

pub mod jwt;
pub mod password;
pub mod token;

pub use jwt::JwtAuthenticator;
pub use password::Argon2Hasher;
pub use token::UuidGenerator;
