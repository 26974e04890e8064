pub mod saude;
pub mod suino;

use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service healthy", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, saude and suino route
/// families, swagger UI, CORS and request tracing.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let saude_routes = Router::new()
        .route("/saude/saveSaude", post(saude::save))
        .route("/saude/updateSaude/:id", put(saude::update))
        .route("/saude/getSaude/:id", get(saude::get_one))
        .route("/saude/getAllSaudes", get(saude::get_all))
        .route("/saude/deleteSaude/:id", delete(saude::delete_one));

    let suino_routes = Router::new()
        .route("/suino/saveSuino", post(suino::save))
        .route("/suino/getSuino/:id", get(suino::get_one))
        .route("/suino/getSuinoByOrelha/:identificacao", get(suino::get_by_orelha))
        .route("/suino/getAllSuinos", get(suino::get_all))
        .route("/suino/deleteSuino/:id", delete(suino::delete_one));

    Router::new()
        .route("/health", get(health))
        .merge(saude_routes)
        .merge(suino_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
