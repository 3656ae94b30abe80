//! Email service for delivering invitation links.
//!
//! Supports multiple providers:
//! - `console`: Logs emails to console (development)
//! - `smtp`: Sends via SMTP server (stub; logs only)
//! - `sendgrid`: Uses SendGrid API
//!
//! Delivery is best-effort: callers log failures and move on; a failed send
//! never rolls back the invitation it belongs to.

use crate::config::EmailConfig;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that can occur during email operations.
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Email service not configured")]
    NotConfigured,

    #[error("Failed to send email: {0}")]
    SendFailed(String),

    #[error("Provider error: {0}")]
    ProviderError(String),
}

/// Email message to be sent.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub to_name: Option<String>,
    pub subject: String,
    pub body_text: String,
}

/// Email service for sending transactional emails.
#[derive(Clone)]
pub struct EmailService {
    config: Arc<EmailConfig>,
}

impl EmailService {
    /// Creates a new EmailService with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Send an email message.
    pub async fn send(&self, message: EmailMessage) -> Result<(), EmailError> {
        if !self.config.enabled {
            debug!(
                to = %message.to,
                subject = %message.subject,
                "Email service disabled, skipping send"
            );
            return Ok(());
        }

        match self.config.provider.as_str() {
            "console" => self.send_console(message).await,
            "smtp" => self.send_smtp(message).await,
            "sendgrid" => self.send_sendgrid(message).await,
            provider => {
                error!(provider = %provider, "Unknown email provider");
                Err(EmailError::NotConfigured)
            }
        }
    }

    /// Send an invitation email with the registration link.
    pub async fn send_invitation_email(
        &self,
        to_email: &str,
        to_name: &str,
        organization_name: &str,
        registration_url: &str,
    ) -> Result<(), EmailError> {
        let subject = format!("You've been invited to join {} on Studio Portal", organization_name);

        let body_text = format!(
            r#"Hi {name},

You've been invited to join {org} on Studio Portal.

Complete your registration here:

{url}

This invitation expires in 7 days.

If you weren't expecting this invitation, you can safely ignore this email.

Best regards,
The Studio Portal Team"#,
            name = to_name,
            org = organization_name,
            url = registration_url
        );

        self.send(EmailMessage {
            to: to_email.to_string(),
            to_name: Some(to_name.to_string()),
            subject,
            body_text,
        })
        .await
    }

    /// Console provider - logs the email instead of sending it.
    async fn send_console(&self, message: EmailMessage) -> Result<(), EmailError> {
        info!(
            to = %message.to,
            to_name = ?message.to_name,
            subject = %message.subject,
            from = %self.config.sender_email,
            from_name = %self.config.sender_name,
            "Email (console provider)"
        );

        info!(body_text = %message.body_text, "Email body");

        Ok(())
    }

    /// SMTP provider - stub; logs what would have been sent.
    async fn send_smtp(&self, message: EmailMessage) -> Result<(), EmailError> {
        if self.config.smtp_host.is_empty() {
            return Err(EmailError::NotConfigured);
        }

        warn!(
            provider = "smtp",
            host = %self.config.smtp_host,
            port = %self.config.smtp_port,
            "SMTP provider configured but full implementation requires an SMTP client crate"
        );

        info!(
            to = %message.to,
            subject = %message.subject,
            smtp_host = %self.config.smtp_host,
            "Email would be sent via SMTP"
        );

        Ok(())
    }

    /// SendGrid provider - sends via SendGrid API.
    async fn send_sendgrid(&self, message: EmailMessage) -> Result<(), EmailError> {
        if self.config.sendgrid_api_key.is_empty() {
            return Err(EmailError::NotConfigured);
        }

        let client = reqwest::Client::new();

        let payload = serde_json::json!({
            "personalizations": [{
                "to": [{ "email": message.to, "name": message.to_name }]
            }],
            "from": {
                "email": self.config.sender_email,
                "name": self.config.sender_name
            },
            "subject": message.subject,
            "content": [{
                "type": "text/plain",
                "value": message.body_text
            }]
        });

        let response = client
            .post("https://api.sendgrid.com/v3/mail/send")
            .bearer_auth(&self.config.sendgrid_api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| EmailError::ProviderError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EmailError::SendFailed(format!(
                "SendGrid returned {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(enabled: bool, provider: &str) -> EmailConfig {
        EmailConfig {
            enabled,
            provider: provider.to_string(),
            ..EmailConfig::default()
        }
    }

    fn message() -> EmailMessage {
        EmailMessage {
            to: "a@b.com".to_string(),
            to_name: Some("Ada".to_string()),
            subject: "Test".to_string(),
            body_text: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_disabled_service_skips_send() {
        let service = EmailService::new(config(false, "sendgrid"));
        assert!(service.send(message()).await.is_ok());
    }

    #[tokio::test]
    async fn test_console_provider_always_succeeds() {
        let service = EmailService::new(config(true, "console"));
        assert!(service.send(message()).await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_provider_is_not_configured() {
        let service = EmailService::new(config(true, "pigeon"));
        let result = service.send(message()).await;
        assert!(matches!(result, Err(EmailError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_sendgrid_without_key_is_not_configured() {
        let service = EmailService::new(config(true, "sendgrid"));
        let result = service.send(message()).await;
        assert!(matches!(result, Err(EmailError::NotConfigured)));
    }
}
