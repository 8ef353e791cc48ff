use serde::Serialize;
use serde_json::{json, Value};

use super::areas::SERVICE_AREAS;

pub const BUSINESS_NAME: &str = "Chesterfield Property Management";
pub const BUSINESS_TELEPHONE: &str = "+1-519-722-3378";

/// schema.org `RealEstateAgent` description embedded in the homepage.
pub fn organization_json_ld() -> Value {
    let areas: Vec<&str> = SERVICE_AREAS.iter().map(|area| area.name).collect();
    json!({
        "@context": "https://schema.org",
        "@type": "RealEstateAgent",
        "name": BUSINESS_NAME,
        "areaServed": areas,
        "telephone": BUSINESS_TELEPHONE,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub author: &'static str,
    pub rating: u8,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<&'static str>,
}

/// Curated reviews shown until a live review feed is connected.
pub fn featured_reviews() -> Vec<Review> {
    vec![
        Review {
            author: "K. Thompson",
            rating: 5,
            text: "Professional, fast, and transparent. My unit leased in under two weeks.",
            time: Some("2 months ago"),
        },
        Review {
            author: "D. Patel",
            rating: 5,
            text: "Great communication and clear statements. Highly recommend.",
            time: Some("3 weeks ago"),
        },
        Review {
            author: "A. Nguyen",
            rating: 5,
            text: "Maintenance handled same day and kept me in the loop.",
            time: Some("1 month ago"),
        },
    ]
}
