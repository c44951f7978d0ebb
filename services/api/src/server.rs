use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_compatibility_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use guna_milan::config::AppConfig;
use guna_milan::error::AppError;
use guna_milan::matching::AshtaKootaEngine;
use guna_milan::telemetry;
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
    let app_state = AppState::new(prometheus_handle);

    let app = with_compatibility_routes(Arc::new(AshtaKootaEngine::new()))
        .layer(Extension(app_state.clone()))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    app_state.mark_ready();

    info!(?config.environment, %addr, "ashta-koota matching service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
