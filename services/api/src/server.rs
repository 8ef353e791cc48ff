use crate::cli::ServeArgs;
use crate::infra::{lead_service, AppState};
use crate::routes::with_site_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chesterfield::config::AppConfig;
use chesterfield::error::AppError;
use chesterfield::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(lead_service(&config.leads)?);

    let app = with_site_routes(service, config.site.clone())
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        provider_configured = config.leads.provider_configured(),
        "lead intake service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
