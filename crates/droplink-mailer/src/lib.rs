//! # droplink-mailer
//!
//! Mail delivery for Droplink: an SMTP implementation of the `Mailer`
//! trait via lettre, and an askama-backed named template registry
//! implementing the `TemplateRenderer` trait.

pub mod smtp;
pub mod templates;

pub use smtp::SmtpMailer;
pub use templates::MailTemplateRegistry;
