use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use roi_quiz::workflows::quiz::{
    quiz_router, ContextProvider, FormsGateway, QuizDefinition, QuizFlowService, SessionStore,
};
use serde_json::{json, Value};
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Questionnaire API plus the operational endpoints every deployment carries.
pub(crate) fn with_quiz_routes<S, G, C>(
    service: Arc<QuizFlowService<S, G, C>>,
    definition: QuizDefinition,
) -> Router
where
    S: SessionStore + 'static,
    G: FormsGateway + 'static,
    C: ContextProvider + 'static,
{
    quiz_router(service, definition).merge(operational_routes())
}

fn operational_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(readiness))
        .route("/metrics", get(metrics))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.readiness.load(Ordering::Relaxed) {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

async fn metrics(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let body = state.metrics.render();
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}
