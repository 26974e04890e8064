use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "saude")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub suino_id: i64,
    pub peso: f64,
    pub tipo_tratamento: String,
    pub data_inicio_tratamento: Date,
    pub data_entrada_cio: Option<Date>,
    pub observacoes: String,
    pub criado_em: DateTimeWithTimeZone,
    pub atualizado_em: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Suino,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Suino => Entity::belongs_to(super::suino::Entity)
                .from(Column::SuinoId)
                .to(super::suino::Column::Id)
                .into(),
        }
    }
}

impl Related<super::suino::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Suino.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_tipo_tratamento(v: &str) -> Result<(), errors::ModelError> {
    if v.trim().is_empty() {
        return Err(errors::ModelError::Validation("tipo_tratamento required".into()));
    }
    Ok(())
}

pub fn validate_observacoes(v: &str) -> Result<(), errors::ModelError> {
    if v.trim().is_empty() {
        return Err(errors::ModelError::Validation("observacoes required".into()));
    }
    Ok(())
}
