//! Askama-backed named mail template registry.
//!
//! Templates are compiled in via askama but looked up at runtime by
//! name, so the services stay decoupled from the concrete template set.
//! An unknown name is a configuration error: it means the deployment
//! references a template that was never registered.

use std::collections::HashMap;

use askama::Template;

use droplink_core::error::AppError;
use droplink_core::result::AppResult;
use droplink_domain::traits::TemplateRenderer;

/// Name of the plain-text password recovery template.
pub const RECOVER_PASSWORD_TEXT: &str = "recover_password_text";
/// Name of the HTML password recovery template.
pub const RECOVER_PASSWORD_HTML: &str = "recover_password_html";

/// HTML body for the password recovery mail.
#[derive(Template)]
#[template(path = "email/recover_password.html")]
struct RecoverPasswordHtml<'a> {
    reset_password_link: &'a str,
    token: &'a str,
}

/// Plain-text body for the password recovery mail.
#[derive(Template)]
#[template(path = "email/recover_password.txt")]
struct RecoverPasswordText<'a> {
    reset_password_link: &'a str,
    token: &'a str,
}

type RenderFn = fn(&HashMap<String, String>) -> AppResult<String>;

/// [`TemplateRenderer`] over the compiled-in mail templates.
#[derive(Clone)]
pub struct MailTemplateRegistry {
    templates: HashMap<&'static str, RenderFn>,
}

impl MailTemplateRegistry {
    /// Create a registry with all mail templates registered.
    pub fn new() -> Self {
        let mut templates: HashMap<&'static str, RenderFn> = HashMap::new();
        templates.insert(RECOVER_PASSWORD_HTML, render_recover_password_html);
        templates.insert(RECOVER_PASSWORD_TEXT, render_recover_password_text);
        Self { templates }
    }
}

impl Default for MailTemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MailTemplateRegistry {
    fn render(&self, name: &str, values: &HashMap<String, String>) -> AppResult<String> {
        let render = self
            .templates
            .get(name)
            .ok_or_else(|| AppError::configuration(format!("Template not found: {name}")))?;
        render(values)
    }
}

fn value<'a>(values: &'a HashMap<String, String>, key: &str) -> &'a str {
    values.get(key).map(String::as_str).unwrap_or_default()
}

fn render_recover_password_html(values: &HashMap<String, String>) -> AppResult<String> {
    RecoverPasswordHtml {
        reset_password_link: value(values, "reset_password_link"),
        token: value(values, "token"),
    }
    .render()
    .map_err(|e| AppError::with_source(droplink_core::ErrorKind::Internal, "Template render failed", e))
}

fn render_recover_password_text(values: &HashMap<String, String>) -> AppResult<String> {
    RecoverPasswordText {
        reset_password_link: value(values, "reset_password_link"),
        token: value(values, "token"),
    }
    .render()
    .map_err(|e| AppError::with_source(droplink_core::ErrorKind::Internal, "Template render failed", e))
}
