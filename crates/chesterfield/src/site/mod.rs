//! Data behind the marketing pages: service areas, savings calculator,
//! structured data, reviews, and the sitemap.

pub mod areas;
pub mod content;
pub mod savings;
pub mod sitemap;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::json;

use crate::config::SiteConfig;
use crate::error::AppError;

pub use areas::{AreaLookupError, AverageRents, CityPage, ServiceArea, SERVICE_AREAS};
pub use content::{featured_reviews, organization_json_ld, Review};
pub use savings::{SavingsError, SavingsEstimate, SavingsQuery};
pub use sitemap::{ChangeFrequency, SitemapEntry};

pub fn site_router(config: SiteConfig) -> Router {
    Router::new()
        .route("/api/areas", get(areas_handler))
        .route("/api/areas/:city", get(city_page_handler))
        .route("/api/savings", get(savings_handler))
        .route("/api/schema", get(schema_handler))
        .route("/api/reviews", get(reviews_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .with_state(config)
}

pub(crate) async fn areas_handler() -> Json<Vec<ServiceArea>> {
    Json(SERVICE_AREAS.to_vec())
}

pub(crate) async fn city_page_handler(Path(city): Path<String>) -> Result<Json<CityPage>, AppError> {
    Ok(Json(CityPage::for_city(&city)?))
}

pub(crate) async fn savings_handler(
    query: Result<Query<SavingsQuery>, QueryRejection>,
) -> Result<Json<SavingsEstimate>, AppError> {
    let Query(query) = query?;
    Ok(Json(savings::estimate(query)?))
}

pub(crate) async fn schema_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/ld+json")],
        organization_json_ld().to_string(),
    )
}

pub(crate) async fn reviews_handler() -> Json<serde_json::Value> {
    Json(json!({ "reviews": featured_reviews() }))
}

pub(crate) async fn sitemap_handler(State(config): State<SiteConfig>) -> impl IntoResponse {
    let entries = sitemap::entries(&config.base_url, Utc::now());
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/xml")],
        sitemap::render_xml(&entries),
    )
}
