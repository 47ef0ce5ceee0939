//! SMTP mail delivery via lettre.

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use tracing::debug;

use droplink_core::config::mail::MailConfig;
use droplink_core::error::AppError;
use droplink_core::result::AppResult;
use droplink_domain::traits::{MailAddress, Mailer};

/// [`Mailer`] implementation delivering through an SMTP relay.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Create a mailer from SMTP configuration.
    pub fn new(config: &MailConfig) -> AppResult<Self> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| {
                AppError::with_source(
                    droplink_core::ErrorKind::Configuration,
                    "Invalid SMTP relay configuration",
                    e,
                )
            })?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self { transport })
    }

    fn mailbox(address: &MailAddress) -> AppResult<Mailbox> {
        let parsed = address
            .address
            .parse()
            .map_err(|e| AppError::with_source(
                droplink_core::ErrorKind::Validation,
                format!("Invalid mail address: {}", address.address),
                e,
            ))?;
        Ok(Mailbox::new(Some(address.name.clone()), parsed))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(
        &self,
        from: &MailAddress,
        to: &MailAddress,
        subject: &str,
        plain_body: &str,
        html_body: &str,
    ) -> AppResult<()> {
        let message = Message::builder()
            .from(Self::mailbox(from)?)
            .to(Self::mailbox(to)?)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(
                plain_body.to_string(),
                html_body.to_string(),
            ))
            .map_err(|e| {
                AppError::with_source(
                    droplink_core::ErrorKind::Internal,
                    "Failed to build mail message",
                    e,
                )
            })?;

        self.transport.send(message).await.map_err(|e| {
            AppError::with_source(
                droplink_core::ErrorKind::ExternalService,
                "SMTP delivery failed",
                e,
            )
        })?;

        debug!(to = %to.address, subject, "Mail sent");
        Ok(())
    }
}
