use std::sync::Arc;

use tracing::warn;

use super::delivery::{select_sender, DeliveryError, DeliveryReceipt, NotificationSender};
use super::domain::{LeadRejection, LeadSubmission};
use super::notification::LeadNotification;
use crate::config::LeadsConfig;

/// Composes lead notifications and hands them to the configured sender.
#[derive(Clone)]
pub struct LeadIntakeService {
    sender: Arc<dyn NotificationSender>,
    default_recipient: Option<String>,
}

impl LeadIntakeService {
    pub fn new(sender: Arc<dyn NotificationSender>, default_recipient: Option<String>) -> Self {
        Self {
            sender,
            default_recipient,
        }
    }

    pub fn from_config(config: &LeadsConfig, client: reqwest::Client) -> Self {
        Self::new(
            select_sender(config, client),
            config.default_recipient.clone(),
        )
    }

    pub fn notification_for(&self, submission: &LeadSubmission) -> LeadNotification {
        let recipient = submission.recipient(self.default_recipient.as_deref());
        LeadNotification::compose(submission, recipient)
    }

    /// Validate and forward a parsed submission.
    pub async fn submit(
        &self,
        submission: LeadSubmission,
    ) -> Result<DeliveryReceipt, LeadIntakeError> {
        if submission.contact_email().is_none() {
            return Err(LeadRejection::EmailRequired.into());
        }

        let notification = self.notification_for(&submission);
        self.sender
            .send(&notification, &submission)
            .await
            .map_err(|err| {
                warn!(error = %err, recipient = %notification.recipient, "lead delivery failed");
                LeadIntakeError::Delivery(err)
            })
    }
}

/// Error raised by the lead intake service.
#[derive(Debug, thiserror::Error)]
pub enum LeadIntakeError {
    #[error(transparent)]
    Rejected(#[from] LeadRejection),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}
