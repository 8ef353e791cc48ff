use super::common::*;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::leads::delivery::LogOnlySender;
use crate::leads::domain::FALLBACK_RECIPIENT;
use crate::leads::router::LeadResponse;

fn failure(code: &str) -> LeadResponse {
    LeadResponse {
        ok: false,
        error: Some(code.to_string()),
        note: None,
    }
}

#[tokio::test]
async fn unconfigured_provider_still_acknowledges_lead() {
    let router = router_with_sender(Arc::new(LogOnlySender), None);

    let response = post_lead(router, r#"{"email":"a@b.com","city":"Guelph"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_body(response).await,
        LeadResponse {
            ok: true,
            error: None,
            note: Some("resend_not_configured".to_string()),
        }
    );
}

#[tokio::test]
async fn empty_object_requires_email() {
    let sender = Arc::new(RecordingSender::delivering());
    let router = router_with_sender(sender.clone(), None);

    let response = post_lead(router, "{}").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_body(response).await, failure("email_required"));
    assert!(sender.notifications().is_empty());
}

#[tokio::test]
async fn blank_email_is_rejected_without_delivery() {
    let sender = Arc::new(RecordingSender::delivering());
    let router = router_with_sender(sender.clone(), None);

    let response = post_lead(router, r#"{"email":"","name":"Jane"}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_body(response).await, failure("email_required"));
    assert!(sender.notifications().is_empty());
}

#[tokio::test]
async fn malformed_json_is_invalid_payload() {
    let sender = Arc::new(RecordingSender::delivering());
    let router = router_with_sender(sender.clone(), None);

    let response = post_lead(router, "{\"email\": \"a@b.com\"").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_body(response).await, failure("invalid_payload"));
    assert!(sender.notifications().is_empty());
}

#[tokio::test]
async fn delivered_lead_returns_plain_ok() {
    let sender = Arc::new(RecordingSender::delivering());
    let router = router_with_sender(sender.clone(), None);

    let response = post_lead(router, r#"{"email":"a@b.com","city":"Waterloo"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_body(response).await,
        LeadResponse {
            ok: true,
            error: None,
            note: None,
        }
    );

    let sent = sender.notifications();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, FALLBACK_RECIPIENT);
    assert_eq!(sent[0].subject, "New Rent Analysis Lead — Waterloo — a@b.com");
}

#[tokio::test]
async fn provider_failure_maps_to_email_failed() {
    let sender = Arc::new(RecordingSender::rejecting());
    let router = router_with_sender(sender.clone(), Some("ops@example.com"));

    let response = post_lead(router, r#"{"email":"a@b.com"}"#).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(read_body(response).await, failure("email_failed"));
    assert_eq!(sender.notifications().len(), 1);
}

#[tokio::test]
async fn failure_bodies_omit_note_field() {
    let router = router_with_sender(Arc::new(LogOnlySender), None);

    let response = post_lead(router, "{}").await;
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let raw: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");

    assert_eq!(
        raw,
        serde_json::json!({ "ok": false, "error": "email_required" })
    );
}
