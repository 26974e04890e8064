use chrono::{DateTime, FixedOffset, Utc};
use models::suino;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set, SqlErr, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::errors::ServiceError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuinoPayload {
    pub identificacao_orelha: String,
    pub raca: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuinoResponse {
    pub id: i64,
    pub identificacao_orelha: String,
    pub raca: String,
    pub criado_em: DateTime<FixedOffset>,
    pub atualizado_em: DateTime<FixedOffset>,
}

pub fn validate_payload(p: &SuinoPayload) -> Result<(), ServiceError> {
    suino::validate_identificacao_orelha(&p.identificacao_orelha)
        .map_err(|_| ServiceError::invalid("identificacaoOrelha", "must not be blank"))?;
    suino::validate_raca(&p.raca)
        .map_err(|_| ServiceError::invalid("raca", "must not be blank"))?;
    Ok(())
}

pub fn map_response(m: suino::Model) -> SuinoResponse {
    SuinoResponse {
        id: m.id,
        identificacao_orelha: m.identificacao_orelha,
        raca: m.raca,
        criado_em: m.criado_em,
        atualizado_em: m.atualizado_em,
    }
}

fn db_err(e: DbErr) -> ServiceError {
    ServiceError::Db(e.to_string())
}

#[instrument(skip(db, payload), fields(identificacao_orelha = %payload.identificacao_orelha))]
pub async fn save_suino(
    db: &DatabaseConnection,
    payload: SuinoPayload,
) -> Result<SuinoResponse, ServiceError> {
    validate_payload(&payload)?;

    let now = Utc::now().into();
    let am = suino::ActiveModel {
        id: NotSet,
        identificacao_orelha: Set(payload.identificacao_orelha.trim().to_string()),
        raca: Set(payload.raca.trim().to_string()),
        criado_em: Set(now),
        atualizado_em: Set(now),
    };
    let created = am.insert(db).await.map_err(|e| {
        if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
            ServiceError::Conflict("identificacaoOrelha já cadastrado".into())
        } else {
            db_err(e)
        }
    })?;
    info!(id = created.id, "suino created");
    Ok(map_response(created))
}

pub async fn get_suino(db: &DatabaseConnection, id: i64) -> Result<SuinoResponse, ServiceError> {
    suino::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(db_err)?
        .map(map_response)
        .ok_or_else(|| ServiceError::not_found("suino"))
}

pub async fn get_suino_by_identificacao_orelha(
    db: &DatabaseConnection,
    identificacao_orelha: &str,
) -> Result<SuinoResponse, ServiceError> {
    suino::find_by_identificacao_orelha(db, identificacao_orelha)
        .await?
        .map(map_response)
        .ok_or_else(|| ServiceError::not_found("suino"))
}

pub async fn get_all_suinos(db: &DatabaseConnection) -> Result<Vec<SuinoResponse>, ServiceError> {
    let rows = suino::Entity::find().all(db).await.map_err(db_err)?;
    Ok(rows.into_iter().map(map_response).collect())
}

/// Delete by id. A suino still referenced by health records is kept and
/// reported as a conflict.
#[instrument(skip(db))]
pub async fn delete_suino(db: &DatabaseConnection, id: i64) -> Result<bool, ServiceError> {
    let txn = db.begin().await.map_err(db_err)?;
    let existing = suino::Entity::find_by_id(id).one(&txn).await.map_err(db_err)?;
    if existing.is_none() {
        return Ok(false);
    }
    let conflict = |e: DbErr| {
        if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
            ServiceError::Conflict(
                "Não é possível excluir o suíno, pois está sendo referenciado por outras entidades.".into(),
            )
        } else {
            db_err(e)
        }
    };
    suino::Entity::delete_by_id(id).exec(&txn).await.map_err(conflict)?;
    txn.commit().await.map_err(conflict)?;
    info!(id, "suino deleted");
    Ok(true)
}
