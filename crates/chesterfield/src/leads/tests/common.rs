use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use crate::leads::delivery::{DeliveryError, DeliveryReceipt, NotificationSender};
use crate::leads::domain::LeadSubmission;
use crate::leads::notification::LeadNotification;
use crate::leads::router::{lead_router, LeadResponse};
use crate::leads::service::LeadIntakeService;

/// Sender double that records what it was asked to deliver.
pub(super) struct RecordingSender {
    receipt: Option<DeliveryReceipt>,
    sent: Mutex<Vec<LeadNotification>>,
}

impl RecordingSender {
    pub(super) fn delivering() -> Self {
        Self {
            receipt: Some(DeliveryReceipt::Sent),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn rejecting() -> Self {
        Self {
            receipt: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn notifications(&self) -> Vec<LeadNotification> {
        self.sent.lock().expect("sender mutex").clone()
    }
}

#[async_trait]
impl NotificationSender for RecordingSender {
    async fn send(
        &self,
        notification: &LeadNotification,
        _submission: &LeadSubmission,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        self.sent
            .lock()
            .expect("sender mutex")
            .push(notification.clone());
        self.receipt.ok_or_else(|| DeliveryError::Rejected {
            status: 401,
            body: "{\"message\":\"invalid api key\"}".to_string(),
        })
    }
}

pub(super) fn lead(email: &str) -> LeadSubmission {
    LeadSubmission {
        email: Some(email.to_string()),
        ..LeadSubmission::default()
    }
}

pub(super) fn router_with_sender(
    sender: Arc<dyn NotificationSender>,
    default_recipient: Option<&str>,
) -> Router {
    let service = LeadIntakeService::new(sender, default_recipient.map(str::to_string));
    lead_router(Arc::new(service))
}

pub(super) async fn post_lead(router: Router, body: impl Into<Body>) -> Response {
    router
        .oneshot(
            Request::post("/api/lead")
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.into())
                .expect("request builds"),
        )
        .await
        .expect("router responds")
}

pub(super) async fn read_body(response: Response) -> LeadResponse {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("lead response json")
}
