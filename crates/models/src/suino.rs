use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suino")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub identificacao_orelha: String,
    pub raca: String,
    pub criado_em: DateTimeWithTimeZone,
    pub atualizado_em: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Saude,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Saude => Entity::has_many(super::saude::Entity).into(),
        }
    }
}

impl Related<super::saude::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Saude.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_identificacao_orelha(v: &str) -> Result<(), errors::ModelError> {
    if v.trim().is_empty() {
        return Err(errors::ModelError::Validation("identificacao_orelha required".into()));
    }
    Ok(())
}

pub fn validate_raca(v: &str) -> Result<(), errors::ModelError> {
    if v.trim().is_empty() {
        return Err(errors::ModelError::Validation("raca required".into()));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    identificacao_orelha: &str,
    raca: &str,
) -> Result<Model, errors::ModelError> {
    validate_identificacao_orelha(identificacao_orelha)?;
    validate_raca(raca)?;

    let now = Utc::now().into();
    let am = ActiveModel {
        id: NotSet,
        identificacao_orelha: Set(identificacao_orelha.to_string()),
        raca: Set(raca.to_string()),
        criado_em: Set(now),
        atualizado_em: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Natural-key lookup by ear tag.
pub async fn find_by_identificacao_orelha(
    db: &DatabaseConnection,
    identificacao_orelha: &str,
) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::IdentificacaoOrelha.eq(identificacao_orelha))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
