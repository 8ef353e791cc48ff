use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::delivery::DeliveryReceipt;
use super::domain::parse_submission;
use super::service::{LeadIntakeError, LeadIntakeService};

pub const NOTE_PROVIDER_NOT_CONFIGURED: &str = "resend_not_configured";
pub const ERROR_EMAIL_FAILED: &str = "email_failed";

/// JSON body returned by the lead endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl LeadResponse {
    fn accepted(note: Option<&str>) -> Self {
        Self {
            ok: true,
            error: None,
            note: note.map(str::to_string),
        }
    }

    fn failed(code: &str) -> Self {
        Self {
            ok: false,
            error: Some(code.to_string()),
            note: None,
        }
    }
}

/// Router exposing the lead capture endpoint used by the rent analysis form.
pub fn lead_router(service: Arc<LeadIntakeService>) -> Router {
    Router::new()
        .route("/api/lead", post(submit_handler))
        .with_state(service)
}

/// Takes the raw body so malformed JSON maps to `invalid_payload` rather than
/// the extractor's default rejection.
pub(crate) async fn submit_handler(
    State(service): State<Arc<LeadIntakeService>>,
    body: Bytes,
) -> Response {
    let outcome = match parse_submission(&body) {
        Ok(submission) => service.submit(submission).await,
        Err(rejection) => Err(rejection.into()),
    };

    let response = match outcome {
        Ok(DeliveryReceipt::Sent) => (StatusCode::OK, Json(LeadResponse::accepted(None))),
        Ok(DeliveryReceipt::Logged) => (
            StatusCode::OK,
            Json(LeadResponse::accepted(Some(NOTE_PROVIDER_NOT_CONFIGURED))),
        ),
        Err(LeadIntakeError::Rejected(rejection)) => (
            StatusCode::BAD_REQUEST,
            Json(LeadResponse::failed(rejection.code())),
        ),
        Err(LeadIntakeError::Delivery(_)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(LeadResponse::failed(ERROR_EMAIL_FAILED)),
        ),
    };
    response.into_response()
}
