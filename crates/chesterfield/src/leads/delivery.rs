use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info};

use super::domain::LeadSubmission;
use super::notification::LeadNotification;
use crate::config::LeadsConfig;

/// How a notification left the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryReceipt {
    /// The provider accepted the message.
    Sent,
    /// No provider is configured; the notification was only logged.
    Logged,
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("email provider rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("email provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Outbound seam for lead notifications, chosen once at startup.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(
        &self,
        notification: &LeadNotification,
        submission: &LeadSubmission,
    ) -> Result<DeliveryReceipt, DeliveryError>;
}

/// Delivers notifications through Resend's HTTP API.
pub struct ResendSender {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    sender: String,
}

impl ResendSender {
    pub fn new(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            sender: sender.into(),
        }
    }
}

impl std::fmt::Debug for ResendSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendSender")
            .field("endpoint", &self.endpoint)
            .field("sender", &self.sender)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct ResendEmail<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[async_trait]
impl NotificationSender for ResendSender {
    async fn send(
        &self,
        notification: &LeadNotification,
        _submission: &LeadSubmission,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let payload = ResendEmail {
            from: &self.sender,
            to: [notification.recipient.as_str()],
            subject: &notification.subject,
            html: &notification.html,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|err| {
                error!(error = %err, "resend unreachable for lead notification");
                DeliveryError::Transport(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %body, "resend rejected lead notification");
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(recipient = %notification.recipient, "lead notification delivered");
        Ok(DeliveryReceipt::Sent)
    }
}

/// Fallback sender used when no provider credential is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOnlySender;

#[async_trait]
impl NotificationSender for LogOnlySender {
    async fn send(
        &self,
        notification: &LeadNotification,
        submission: &LeadSubmission,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        info!(
            to = %notification.recipient,
            subject = %notification.subject,
            lead = ?submission,
            "lead captured without email provider configured"
        );
        Ok(DeliveryReceipt::Logged)
    }
}

/// Pick the delivery strategy for the lifetime of the process.
pub fn select_sender(config: &LeadsConfig, client: reqwest::Client) -> Arc<dyn NotificationSender> {
    match &config.resend_api_key {
        Some(api_key) => Arc::new(ResendSender::new(
            client,
            config.resend_endpoint.clone(),
            api_key.clone(),
            config.sender.clone(),
        )),
        None => Arc::new(LogOnlySender),
    }
}
