use serde::{Deserialize, Serialize};

/// Recipient used when neither the submission nor configuration names one.
pub const FALLBACK_RECIPIENT: &str = "brandon@chesterfieldgroup.ca";

/// A prospective owner's contact and property details from the rent analysis form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub to_email: Option<String>,
}

impl LeadSubmission {
    /// The submitter's address, provided it is present and non-empty.
    pub fn contact_email(&self) -> Option<&str> {
        non_empty(&self.email)
    }

    /// Resolve who receives the notification: the per-request override, then
    /// the configured default, then the hardcoded fallback.
    pub fn recipient<'a>(&'a self, default_recipient: Option<&'a str>) -> &'a str {
        non_empty(&self.to_email)
            .or_else(|| default_recipient.filter(|value| !value.is_empty()))
            .unwrap_or(FALLBACK_RECIPIENT)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// Client-caused reasons a submission never reaches delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LeadRejection {
    #[error("request body is not a valid lead payload")]
    InvalidPayload,
    #[error("lead email is required")]
    EmailRequired,
}

impl LeadRejection {
    pub fn code(self) -> &'static str {
        match self {
            LeadRejection::InvalidPayload => "invalid_payload",
            LeadRejection::EmailRequired => "email_required",
        }
    }
}

/// Parse a raw request body into a submission that is ready for delivery.
///
/// Malformed JSON and objects with mistyped fields are `InvalidPayload`.
/// Well-formed JSON that carries no usable email (including `null` or a
/// non-object body) is `EmailRequired`.
pub fn parse_submission(body: &[u8]) -> Result<LeadSubmission, LeadRejection> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|_| LeadRejection::InvalidPayload)?;

    if !value.is_object() {
        return Err(LeadRejection::EmailRequired);
    }

    let submission: LeadSubmission =
        serde_json::from_value(value).map_err(|_| LeadRejection::InvalidPayload)?;

    if submission.contact_email().is_none() {
        return Err(LeadRejection::EmailRequired);
    }

    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_override() {
        let submission =
            parse_submission(br#"{"email":"a@b.com","toEmail":"ops@example.com","units":"3"}"#)
                .expect("valid payload");
        assert_eq!(submission.to_email.as_deref(), Some("ops@example.com"));
        assert_eq!(submission.units.as_deref(), Some("3"));
    }

    #[test]
    fn rejects_missing_or_empty_email() {
        assert_eq!(parse_submission(b"{}"), Err(LeadRejection::EmailRequired));
        assert_eq!(
            parse_submission(br#"{"email":"","city":"Guelph"}"#),
            Err(LeadRejection::EmailRequired)
        );
        assert_eq!(
            parse_submission(br#"{"email":null}"#),
            Err(LeadRejection::EmailRequired)
        );
        assert_eq!(parse_submission(b"null"), Err(LeadRejection::EmailRequired));
        assert_eq!(parse_submission(b"[]"), Err(LeadRejection::EmailRequired));
    }

    #[test]
    fn rejects_malformed_bodies() {
        assert_eq!(
            parse_submission(b"{\"email\":"),
            Err(LeadRejection::InvalidPayload)
        );
        assert_eq!(parse_submission(b""), Err(LeadRejection::InvalidPayload));
        assert_eq!(
            parse_submission(br#"{"email":"a@b.com","city":5}"#),
            Err(LeadRejection::InvalidPayload)
        );
    }

    #[test]
    fn ignores_unknown_fields() {
        let submission = parse_submission(br#"{"email":"a@b.com","utm":"spring"}"#)
            .expect("unknown fields are tolerated");
        assert_eq!(submission.contact_email(), Some("a@b.com"));
    }

    #[test]
    fn recipient_prefers_override_then_default_then_fallback() {
        let mut submission = LeadSubmission {
            email: Some("a@b.com".to_string()),
            to_email: Some("override@example.com".to_string()),
            ..LeadSubmission::default()
        };
        assert_eq!(
            submission.recipient(Some("default@example.com")),
            "override@example.com"
        );

        submission.to_email = Some(String::new());
        assert_eq!(
            submission.recipient(Some("default@example.com")),
            "default@example.com"
        );

        submission.to_email = None;
        assert_eq!(submission.recipient(Some("")), FALLBACK_RECIPIENT);
        assert_eq!(submission.recipient(None), FALLBACK_RECIPIENT);
    }
}
