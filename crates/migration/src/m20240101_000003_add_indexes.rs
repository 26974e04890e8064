use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Saude: index on suino_id for the join at read time
        manager
            .create_index(
                Index::create()
                    .name("idx_saude_suino")
                    .table(Saude::Table)
                    .col(Saude::SuinoId)
                    .to_owned(),
            )
            .await?;

        // Saude: index on treatment start date for reporting queries
        manager
            .create_index(
                Index::create()
                    .name("idx_saude_inicio_tratamento")
                    .table(Saude::Table)
                    .col(Saude::DataInicioTratamento)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_saude_suino").table(Saude::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_saude_inicio_tratamento").table(Saude::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Saude { Table, SuinoId, DataInicioTratamento }
