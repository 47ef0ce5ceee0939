//! Drop link domain entities.

pub mod model;

pub use model::Link;
