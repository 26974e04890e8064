use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use models::{saude, suino};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set, SqlErr,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::errors::ServiceError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Request payload for both create and update; field names follow the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaudePayload {
    pub peso: Option<f64>,
    pub tipo_tratamento: String,
    pub data_inicio_tratamento: String,
    pub observacoes: String,
    #[serde(default)]
    pub data_entrada_cio: Option<String>,
    #[serde(default)]
    pub id_suino: Option<i64>,
}

/// Response shape; denormalizes the owning animal's ear tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaudeResponse {
    pub id: i64,
    pub peso: f64,
    pub data_entrada_cio: Option<NaiveDate>,
    pub tipo_tratamento: String,
    pub data_inicio_tratamento: NaiveDate,
    pub observacoes: String,
    pub criado_em: DateTime<FixedOffset>,
    pub atualizado_em: DateTime<FixedOffset>,
    pub identificador_orelha: String,
}

/// Shape checks, one named check per field. Accepts exactly the inputs
/// the wire contract accepts; the first failing field is reported.
pub fn validate_payload(p: &SaudePayload) -> Result<(), ServiceError> {
    saude::validate_observacoes(&p.observacoes)
        .map_err(|_| ServiceError::invalid("observacoes", "must not be blank"))?;
    saude::validate_tipo_tratamento(&p.tipo_tratamento)
        .map_err(|_| ServiceError::invalid("tipoTratamento", "must not be blank"))?;
    if p.data_inicio_tratamento.trim().is_empty() {
        return Err(ServiceError::invalid("dataInicioTratamento", "must not be blank"));
    }
    if p.peso.is_none() {
        return Err(ServiceError::invalid("peso", "is required"));
    }
    if let Some(d) = &p.data_entrada_cio {
        if d.trim().is_empty() {
            return Err(ServiceError::invalid("dataEntradaCio", "must not be blank when given"));
        }
    }
    if let Some(id) = p.id_suino {
        if id <= 0 {
            return Err(ServiceError::invalid("idSuino", "must be a positive integer"));
        }
    }
    Ok(())
}

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ServiceError::Parse { field, value: value.to_string() })
}

pub fn map_response(record: saude::Model, identificador_orelha: String) -> SaudeResponse {
    SaudeResponse {
        id: record.id,
        peso: record.peso,
        data_entrada_cio: record.data_entrada_cio,
        tipo_tratamento: record.tipo_tratamento,
        data_inicio_tratamento: record.data_inicio_tratamento,
        observacoes: record.observacoes,
        criado_em: record.criado_em,
        atualizado_em: record.atualizado_em,
        identificador_orelha,
    }
}

fn db_err(e: DbErr) -> ServiceError {
    ServiceError::Db(e.to_string())
}

fn is_fk_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}

/// A missing id has nothing to resolve; it reports the same way as an
/// unknown one.
async fn resolve_suino<C: ConnectionTrait>(
    conn: &C,
    id_suino: Option<i64>,
) -> Result<suino::Model, ServiceError> {
    let id = id_suino.ok_or_else(|| ServiceError::not_found("suino"))?;
    suino::Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("suino"))
}

/// Create a health record. Animal resolution and the insert share one
/// transaction so the link is valid at commit time.
#[instrument(skip(db, payload), fields(id_suino = ?payload.id_suino))]
pub async fn save_saude(
    db: &DatabaseConnection,
    payload: SaudePayload,
) -> Result<SaudeResponse, ServiceError> {
    validate_payload(&payload)?;
    let peso = payload.peso.ok_or_else(|| ServiceError::invalid("peso", "is required"))?;

    let txn = db.begin().await.map_err(db_err)?;
    let animal = resolve_suino(&txn, payload.id_suino).await?;

    let data_inicio = parse_date("dataInicioTratamento", &payload.data_inicio_tratamento)?;
    let data_cio = match payload.data_entrada_cio.as_deref() {
        Some(s) if !s.trim().is_empty() => Some(parse_date("dataEntradaCio", s)?),
        _ => None,
    };

    let now = Utc::now().into();
    let am = saude::ActiveModel {
        id: NotSet,
        suino_id: Set(animal.id),
        peso: Set(peso),
        tipo_tratamento: Set(payload.tipo_tratamento.clone()),
        data_inicio_tratamento: Set(data_inicio),
        data_entrada_cio: Set(data_cio),
        observacoes: Set(payload.observacoes.clone()),
        criado_em: Set(now),
        atualizado_em: Set(now),
    };
    let record = am.insert(&txn).await.map_err(db_err)?;
    txn.commit().await.map_err(db_err)?;

    info!(id = record.id, suino_id = animal.id, "saude created");
    Ok(map_response(record, animal.identificacao_orelha))
}

/// Update a health record in place. Every mutable field is overwritten
/// except `data_entrada_cio`, which is only replaced when the payload
/// carries it; omitting it never clears a stored value.
#[instrument(skip(db, payload), fields(id_suino = ?payload.id_suino))]
pub async fn update_saude(
    db: &DatabaseConnection,
    id: i64,
    payload: SaudePayload,
) -> Result<SaudeResponse, ServiceError> {
    validate_payload(&payload)?;
    let peso = payload.peso.ok_or_else(|| ServiceError::invalid("peso", "is required"))?;

    let txn = db.begin().await.map_err(db_err)?;
    let animal = resolve_suino(&txn, payload.id_suino).await?;
    let existing = saude::Entity::find_by_id(id)
        .one(&txn)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("saude"))?;

    let data_inicio = parse_date("dataInicioTratamento", &payload.data_inicio_tratamento)?;

    let mut am: saude::ActiveModel = existing.into();
    am.suino_id = Set(animal.id);
    am.peso = Set(peso);
    am.tipo_tratamento = Set(payload.tipo_tratamento.clone());
    am.data_inicio_tratamento = Set(data_inicio);
    am.observacoes = Set(payload.observacoes.clone());
    am.atualizado_em = Set(Utc::now().into());
    if let Some(s) = payload.data_entrada_cio.as_deref() {
        if !s.trim().is_empty() {
            am.data_entrada_cio = Set(Some(parse_date("dataEntradaCio", s)?));
        }
    }

    let record = am.update(&txn).await.map_err(db_err)?;
    txn.commit().await.map_err(db_err)?;

    info!(id = record.id, suino_id = animal.id, "saude updated");
    Ok(map_response(record, animal.identificacao_orelha))
}

pub async fn get_saude(db: &DatabaseConnection, id: i64) -> Result<SaudeResponse, ServiceError> {
    let (record, owner) = saude::Entity::find_by_id(id)
        .find_also_related(suino::Entity)
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("saude"))?;
    let owner = owner.ok_or_else(|| ServiceError::Db("saude row without owning suino".into()))?;
    Ok(map_response(record, owner.identificacao_orelha))
}

/// Every record, storage-default order, each with its animal's ear tag.
pub async fn get_all_saudes(db: &DatabaseConnection) -> Result<Vec<SaudeResponse>, ServiceError> {
    let rows = saude::Entity::find()
        .find_also_related(suino::Entity)
        .all(db)
        .await
        .map_err(db_err)?;
    rows.into_iter()
        .map(|(record, owner)| {
            let owner =
                owner.ok_or_else(|| ServiceError::Db("saude row without owning suino".into()))?;
            Ok(map_response(record, owner.identificacao_orelha))
        })
        .collect()
}

/// Delete by id. Ok(false) when the id does not exist; a
/// referential-integrity rejection is translated to `Conflict`.
#[instrument(skip(db))]
pub async fn delete_saude(db: &DatabaseConnection, id: i64) -> Result<bool, ServiceError> {
    let txn = db.begin().await.map_err(db_err)?;
    let existing = saude::Entity::find_by_id(id).one(&txn).await.map_err(db_err)?;
    if existing.is_none() {
        return Ok(false);
    }
    let conflict = |e: DbErr| {
        if is_fk_violation(&e) {
            ServiceError::Conflict(
                "Não é possível excluir o registro, pois está sendo referenciado por outras entidades.".into(),
            )
        } else {
            db_err(e)
        }
    };
    saude::Entity::delete_by_id(id).exec(&txn).await.map_err(conflict)?;
    txn.commit().await.map_err(conflict)?;
    info!(id, "saude deleted");
    Ok(true)
}
