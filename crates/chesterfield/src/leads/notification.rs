use serde::Serialize;

use super::domain::LeadSubmission;

/// Rendered notification ready to hand to a sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadNotification {
    pub recipient: String,
    pub subject: String,
    pub html: String,
}

impl LeadNotification {
    /// Render the fixed subject line and HTML table for a submission.
    ///
    /// Only `notes` has `<` escaped; every other field is interpolated as-is.
    pub fn compose(submission: &LeadSubmission, recipient: &str) -> Self {
        let email = field(&submission.email);
        let subject = format!(
            "New Rent Analysis Lead — {} — {}",
            submission
                .city
                .as_deref()
                .filter(|city| !city.is_empty())
                .unwrap_or("City"),
            email
        );

        let source = submission
            .source
            .as_deref()
            .filter(|source| !source.is_empty())
            .unwrap_or("web");
        let notes = field(&submission.notes).replace('<', "&lt;");

        let html = format!(
            "<h2>New Rent Analysis Lead</h2>\n\
             <table border='1' cellpadding='6' cellspacing='0'>\n\
             <tr><td><b>Email</b></td><td>{email}</td></tr>\n\
             <tr><td><b>Name</b></td><td>{name}</td></tr>\n\
             <tr><td><b>Phone</b></td><td>{phone}</td></tr>\n\
             <tr><td><b>City</b></td><td>{city}</td></tr>\n\
             <tr><td><b>Units</b></td><td>{units}</td></tr>\n\
             <tr><td><b>Address</b></td><td>{address}</td></tr>\n\
             <tr><td><b>Notes</b></td><td>{notes}</td></tr>\n\
             <tr><td><b>Source</b></td><td>{source}</td></tr>\n\
             </table>",
            name = field(&submission.name),
            phone = field(&submission.phone),
            city = field(&submission.city),
            units = field(&submission.units),
            address = field(&submission.address),
        );

        Self {
            recipient: recipient.to_string(),
            subject,
            html,
        }
    }
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}
