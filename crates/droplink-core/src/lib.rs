//! # droplink-core
//!
//! Core crate for Droplink. Contains configuration schemas, shared value
//! types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Droplink crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
