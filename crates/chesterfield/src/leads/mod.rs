//! Lead capture for the rent analysis form.
//!
//! A submission is parsed and validated, rendered into a fixed HTML
//! notification, and handed to a [`NotificationSender`]. When no Resend
//! credential is configured the [`LogOnlySender`] stands in, so the form keeps
//! working and the response carries a `resend_not_configured` note.

pub mod delivery;
pub mod domain;
pub mod notification;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use delivery::{
    select_sender, DeliveryError, DeliveryReceipt, LogOnlySender, NotificationSender, ResendSender,
};
pub use domain::{parse_submission, LeadRejection, LeadSubmission, FALLBACK_RECIPIENT};
pub use notification::LeadNotification;
pub use router::{lead_router, LeadResponse};
pub use service::{LeadIntakeError, LeadIntakeService};
