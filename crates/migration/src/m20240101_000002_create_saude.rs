//! Create `saude` table.
//! Health events per animal; the foreign key is restrictive so an
//! animal with recorded history cannot be removed out from under it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Saude::Table)
                    .if_not_exists()
                    .col(big_integer(Saude::Id).auto_increment().primary_key())
                    .col(big_integer(Saude::SuinoId).not_null())
                    .col(double(Saude::Peso).not_null())
                    .col(string_len(Saude::TipoTratamento, 128).not_null())
                    .col(date(Saude::DataInicioTratamento).not_null())
                    .col(date_null(Saude::DataEntradaCio))
                    .col(text(Saude::Observacoes).not_null())
                    .col(timestamp_with_time_zone(Saude::CriadoEm).not_null())
                    .col(timestamp_with_time_zone(Saude::AtualizadoEm).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_saude_suino")
                            .from(Saude::Table, Saude::SuinoId)
                            .to(Suino::Table, Suino::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Saude::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Saude {
    Table,
    Id,
    SuinoId,
    Peso,
    TipoTratamento,
    DataInicioTratamento,
    DataEntradaCio,
    Observacoes,
    CriadoEm,
    AtualizadoEm,
}

#[derive(DeriveIden)]
enum Suino { Table, Id }
