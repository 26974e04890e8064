use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::db::suino_service::{self, SuinoPayload, SuinoResponse};
use tracing::{error, info};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[utoipa::path(
    post, path = "/suino/saveSuino", tag = "suino",
    request_body = crate::openapi::SuinoPayloadDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error or Duplicate Ear Tag"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn save(
    State(state): State<ServerState>,
    Json(payload): Json<SuinoPayload>,
) -> Result<Json<SuinoResponse>, JsonApiError> {
    match suino_service::save_suino(&state.db, payload).await {
        Ok(resp) => {
            info!(id = resp.id, orelha = %resp.identificacao_orelha, "created suino");
            Ok(Json(resp))
        }
        Err(e) => {
            error!(err = %e, "create suino failed");
            Err(JsonApiError::from(e))
        }
    }
}

#[utoipa::path(
    get, path = "/suino/getSuino/{id}", tag = "suino",
    params(("id" = i64, Path, description = "Suino ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<SuinoResponse>, JsonApiError> {
    suino_service::get_suino(&state.db, id)
        .await
        .map(Json)
        .map_err(JsonApiError::from)
}

#[utoipa::path(
    get, path = "/suino/getSuinoByOrelha/{identificacao}", tag = "suino",
    params(("identificacao" = String, Path, description = "Ear-tag identifier")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_by_orelha(
    State(state): State<ServerState>,
    Path(identificacao): Path<String>,
) -> Result<Json<SuinoResponse>, JsonApiError> {
    suino_service::get_suino_by_identificacao_orelha(&state.db, &identificacao)
        .await
        .map(Json)
        .map_err(JsonApiError::from)
}

#[utoipa::path(
    get, path = "/suino/getAllSuinos", tag = "suino",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn get_all(
    State(state): State<ServerState>,
) -> Result<Json<Vec<SuinoResponse>>, JsonApiError> {
    match suino_service::get_all_suinos(&state.db).await {
        Ok(list) => {
            info!(count = list.len(), "list suinos");
            Ok(Json(list))
        }
        Err(e) => Err(JsonApiError::from(e)),
    }
}

#[utoipa::path(
    delete, path = "/suino/deleteSuino/{id}", tag = "suino",
    params(("id" = i64, Path, description = "Suino ID")),
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
    match suino_service::delete_suino(&state.db, id).await {
        Ok(true) => {
            info!(id, "deleted suino");
            Ok(StatusCode::OK)
        }
        Ok(false) => Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", None)),
        Err(e) => {
            error!(err = %e, id, "delete suino failed");
            Err(JsonApiError::from(e))
        }
    }
}
