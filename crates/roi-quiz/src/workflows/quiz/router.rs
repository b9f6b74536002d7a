use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::definition::QuizDefinition;
use super::domain::AnswerUpdate;
use super::service::{QuizFlowService, QuizServiceError};
use super::store::{SessionStore, StoreError};
use super::submission::{ContextOverrides, ContextProvider, FormsGateway};

/// Router builder exposing HTTP endpoints for the questionnaire flow.
pub fn quiz_router<S, G, C>(
    service: Arc<QuizFlowService<S, G, C>>,
    definition: QuizDefinition,
) -> Router
where
    S: SessionStore + 'static,
    G: FormsGateway + 'static,
    C: ContextProvider + 'static,
{
    let definition_routes = Router::new()
        .route("/api/v1/quiz/definition", get(definition_handler))
        .with_state(Arc::new(definition));

    Router::new()
        .route("/api/v1/quiz/sessions", post(open_handler::<S, G, C>))
        .route(
            "/api/v1/quiz/sessions/:session_id",
            get(view_handler::<S, G, C>),
        )
        .route(
            "/api/v1/quiz/sessions/:session_id/answers",
            post(answer_handler::<S, G, C>),
        )
        .route(
            "/api/v1/quiz/sessions/:session_id/submission",
            post(submit_handler::<S, G, C>),
        )
        .with_state(service)
        .merge(definition_routes)
}

pub(crate) async fn definition_handler(State(definition): State<Arc<QuizDefinition>>) -> Response {
    (StatusCode::OK, axum::Json(definition.as_ref().clone())).into_response()
}

pub(crate) async fn open_handler<S, G, C>(
    State(service): State<Arc<QuizFlowService<S, G, C>>>,
) -> Response
where
    S: SessionStore + 'static,
    G: FormsGateway + 'static,
    C: ContextProvider + 'static,
{
    match service.open() {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn view_handler<S, G, C>(
    State(service): State<Arc<QuizFlowService<S, G, C>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
    G: FormsGateway + 'static,
    C: ContextProvider + 'static,
{
    match service.view(&session_id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn answer_handler<S, G, C>(
    State(service): State<Arc<QuizFlowService<S, G, C>>>,
    Path(session_id): Path<String>,
    axum::Json(update): axum::Json<AnswerUpdate>,
) -> Response
where
    S: SessionStore + 'static,
    G: FormsGateway + 'static,
    C: ContextProvider + 'static,
{
    match service.answer(&session_id, update) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<S, G, C>(
    State(service): State<Arc<QuizFlowService<S, G, C>>>,
    Path(session_id): Path<String>,
    headers: HeaderMap,
    body: Option<axum::Json<ContextOverrides>>,
) -> Response
where
    S: SessionStore + 'static,
    G: FormsGateway + 'static,
    C: ContextProvider + 'static,
{
    let mut overrides = body
        .map(|axum::Json(overrides)| overrides)
        .unwrap_or_default();
    if overrides.hutk.is_none() {
        overrides.hutk = tracking_cookie(&headers);
    }

    // The gateway does blocking network io; keep it off the async workers.
    let dispatch = tokio::task::spawn_blocking(move || service.submit(&session_id, overrides));
    match dispatch.await {
        Ok(Ok(view)) => (StatusCode::OK, axum::Json(view)).into_response(),
        Ok(Err(error)) => error_response(error),
        Err(join_error) => {
            let payload = json!({
                "error": join_error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

/// Pull the HubSpot tracking token out of the request cookies.
fn tracking_cookie(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == "hubspotutk").then(|| value.to_string())
    })
}

fn error_response(error: QuizServiceError) -> Response {
    let status = match &error {
        QuizServiceError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        QuizServiceError::Store(StoreError::Conflict) => StatusCode::CONFLICT,
        QuizServiceError::Store(StoreError::Unavailable(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
