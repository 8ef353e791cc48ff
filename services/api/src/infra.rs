use chesterfield::config::LeadsConfig;
use chesterfield::error::AppError;
use chesterfield::leads::LeadIntakeService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

const USER_AGENT: &str = concat!("chesterfield-leads/", env!("CARGO_PKG_VERSION"));

pub(crate) fn http_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

/// Build the intake service, choosing Resend or log-only delivery once.
pub(crate) fn lead_service(config: &LeadsConfig) -> Result<LeadIntakeService, AppError> {
    if config.provider_configured() {
        info!(endpoint = %config.resend_endpoint, "lead notifications will be sent through resend");
    } else {
        warn!("RESEND_API_KEY not set; leads will be logged instead of emailed");
    }
    Ok(LeadIntakeService::from_config(config, http_client()?))
}
