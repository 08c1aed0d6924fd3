use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use common::types::Health;
use configs::ServicesConfig;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod animals;
pub mod cabinets;
pub mod participants;
pub mod students;
pub mod tasks;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses(
        (status = 200, description = "Service and database are up", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<Health>) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(Health { status: "ok" })),
        Err(e) => {
            error!(error = %e, "database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health { status: "unavailable" }))
        }
    }
}

/// Build the application router. Resource groups disabled in `services` are
/// not mounted at all.
pub fn build_router(state: ServerState, cors: CorsLayer, services: &ServicesConfig) -> Router {
    let mut app = Router::new().route("/health", get(health));

    if services.cabinets {
        app = app
            .route("/cabinets/", post(cabinets::create).get(cabinets::list))
            .route("/cabinets/:id", get(cabinets::get).delete(cabinets::delete))
            .route("/students/", post(students::create));
    }
    if services.participants {
        app = app
            .route("/participants/", post(participants::create))
            .route("/participants/event/:event_name", get(participants::list_by_event));
    }
    if services.animals {
        app = app
            .route("/animals/", post(animals::create).get(animals::list))
            .route("/animals/:id", get(animals::get));
    }
    if services.tasks {
        app = app
            .route("/tasks/", post(tasks::create))
            .route("/tasks/:id", get(tasks::get));
    }

    app.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
