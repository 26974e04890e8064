//! Create `suino` table.
//!
//! Herd animals; health records reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Suino::Table)
                    .if_not_exists()
                    .col(big_integer(Suino::Id).auto_increment().primary_key())
                    .col(string_len(Suino::IdentificacaoOrelha, 64).unique_key().not_null())
                    .col(string_len(Suino::Raca, 128).not_null())
                    .col(timestamp_with_time_zone(Suino::CriadoEm).not_null())
                    .col(timestamp_with_time_zone(Suino::AtualizadoEm).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Suino::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Suino { Table, Id, IdentificacaoOrelha, Raca, CriadoEm, AtualizadoEm }
