//! Transactional email for workflow events.
//!
//! Configured entirely from environment variables. When SMTP is not
//! configured the mailer logs the message instead of sending it, so
//! development and test environments never need a relay. Mail failures are
//! the caller's to swallow: workflow operations treat email as best-effort.

use crate::models::DecisionStatus;
use anyhow::{Context, Result};
use lettre::{
    Message, SmtpTransport, Transport, message::header::ContentType,
    transport::smtp::authentication::Credentials,
};
use tracing::info;

const APP_NAME: &str = "Journal Workflow";

/// SMTP configuration read from the environment.
#[derive(Clone, Debug)]
pub struct MailConfig {
    pub host: Option<String>,
    pub port: u16,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub from: String,
}

impl MailConfig {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("SMTP_HOST").ok().filter(|v| !v.is_empty()),
            port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            user: std::env::var("SMTP_USER").ok().filter(|v| !v.is_empty()),
            pass: std::env::var("SMTP_PASS").ok().filter(|v| !v.is_empty()),
            from: std::env::var("SMTP_FROM")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "no-reply@journal-workflow.local".to_string()),
        }
    }
}

/// Outbound mailer for decision emails.
pub struct Mailer {
    transport: Option<SmtpTransport>,
    from: String,
}

impl Mailer {
    /// Build a mailer from environment configuration. Missing SMTP settings
    /// produce a log-only mailer rather than an error.
    pub fn from_env() -> Self {
        Self::new(MailConfig::from_env())
    }

    pub fn new(config: MailConfig) -> Self {
        let transport = match (&config.host, &config.user, &config.pass) {
            (Some(host), Some(user), Some(pass)) => Some(
                SmtpTransport::builder_dangerous(host)
                    .port(config.port)
                    .credentials(Credentials::new(user.clone(), pass.clone()))
                    .build(),
            ),
            _ => None,
        };

        Self {
            transport,
            from: config.from,
        }
    }

    /// Send a plain-text email, or log it when SMTP is not configured.
    pub fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        let Some(transport) = &self.transport else {
            info!("SMTP not configured. Email not sent.");
            info!("To: {}", to);
            info!("Subject: {}", subject);
            info!("{}", body);
            return Ok(());
        };

        let message = Message::builder()
            .from(self.from.parse().context("Invalid from address")?)
            .to(to.parse().context("Invalid recipient address")?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .context("Failed to build email")?;

        transport.send(&message).context("Failed to send email")?;
        Ok(())
    }

    /// Email an author about a recorded editorial decision.
    pub fn send_decision_email(
        &self,
        to: &str,
        submission_title: &str,
        status: DecisionStatus,
        notes: Option<&str>,
    ) -> Result<()> {
        let subject = format!("{} - Decision on \"{}\"", APP_NAME, submission_title);
        let mut body = format!(
            "An editorial decision has been recorded for your submission \"{}\".\n\nDecision: {}\n",
            submission_title,
            status.as_str()
        );
        if let Some(notes) = notes {
            body.push_str(&format!("\nEditor notes:\n{}\n", notes));
        }
        self.send(to, &subject, &body)
    }
}
