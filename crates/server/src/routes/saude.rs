use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::db::saude_service::{self, SaudePayload, SaudeResponse};
use tracing::{error, info};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[utoipa::path(
    post, path = "/saude/saveSaude", tag = "saude",
    request_body = crate::openapi::SaudePayloadDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Suino Not Found"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn save(
    State(state): State<ServerState>,
    Json(payload): Json<SaudePayload>,
) -> Result<Json<SaudeResponse>, JsonApiError> {
    match saude_service::save_saude(&state.db, payload).await {
        Ok(resp) => {
            info!(id = resp.id, orelha = %resp.identificador_orelha, "created saude");
            Ok(Json(resp))
        }
        Err(e) => {
            error!(err = %e, "create saude failed");
            Err(JsonApiError::from(e))
        }
    }
}

#[utoipa::path(
    put, path = "/saude/updateSaude/{id}", tag = "saude",
    params(("id" = i64, Path, description = "Saude ID")),
    request_body = crate::openapi::SaudePayloadDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SaudePayload>,
) -> Result<Json<SaudeResponse>, JsonApiError> {
    match saude_service::update_saude(&state.db, id, payload).await {
        Ok(resp) => {
            info!(id = resp.id, "updated saude");
            Ok(Json(resp))
        }
        Err(e) => {
            error!(err = %e, id, "update saude failed");
            Err(JsonApiError::from(e))
        }
    }
}

#[utoipa::path(
    get, path = "/saude/getSaude/{id}", tag = "saude",
    params(("id" = i64, Path, description = "Saude ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<SaudeResponse>, JsonApiError> {
    saude_service::get_saude(&state.db, id)
        .await
        .map(Json)
        .map_err(JsonApiError::from)
}

#[utoipa::path(
    get, path = "/saude/getAllSaudes", tag = "saude",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn get_all(
    State(state): State<ServerState>,
) -> Result<Json<Vec<SaudeResponse>>, JsonApiError> {
    match saude_service::get_all_saudes(&state.db).await {
        Ok(list) => {
            info!(count = list.len(), "list saudes");
            Ok(Json(list))
        }
        Err(e) => Err(JsonApiError::from(e)),
    }
}

#[utoipa::path(
    delete, path = "/saude/deleteSaude/{id}", tag = "saude",
    params(("id" = i64, Path, description = "Saude ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Still Referenced"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete_one(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, JsonApiError> {
    match saude_service::delete_saude(&state.db, id).await {
        Ok(true) => {
            info!(id, "deleted saude");
            Ok(StatusCode::OK)
        }
        Ok(false) => Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", None)),
        Err(e) => {
            error!(err = %e, id, "delete saude failed");
            Err(JsonApiError::from(e))
        }
    }
}
