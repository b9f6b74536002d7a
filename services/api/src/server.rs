use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySessionStore};
use crate::routes::with_quiz_routes;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayer;
use roi_quiz::config::AppConfig;
use roi_quiz::error::AppError;
use roi_quiz::telemetry;
use roi_quiz::workflows::quiz::{
    ConfiguredPageContext, HubSpotFormsClient, QuizDefinition, QuizFlowService,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Wires the questionnaire flow over in-process session storage and the
/// configured HubSpot form.
fn quiz_application(config: &AppConfig) -> Result<Router, AppError> {
    let store = Arc::new(InMemorySessionStore::default());
    let gateway = Arc::new(HubSpotFormsClient::new(config.hubspot.clone())?);
    let context = Arc::new(ConfiguredPageContext::new(&config.calculator));
    let service = Arc::new(QuizFlowService::new(store, gateway, context));

    Ok(with_quiz_routes(
        service,
        QuizDefinition::from_config(&config.calculator),
    ))
}

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (metric_layer, metric_handle) = PrometheusMetricLayer::pair();
    let ready = Arc::new(AtomicBool::new(false));

    let app = quiz_application(&config)?
        .layer(Extension(AppState {
            readiness: ready.clone(),
            metrics: Arc::new(metric_handle),
        }))
        .layer(metric_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    ready.store(true, Ordering::Release);

    info!(%addr, ?config.environment, "roi calculator service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
