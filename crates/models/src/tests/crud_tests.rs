use crate::db::connect;
use crate::{saude, suino};
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set};

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn unique_tag(prefix: &str) -> String {
    format!("{}-{}", prefix, Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

#[tokio::test]
async fn test_suino_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("skip: DATABASE_URL not provided");
        return Ok(());
    }

    let db = setup_test_db().await?;

    let tag = unique_tag("test-suino");
    let created = suino::create(&db, &tag, "Landrace").await?;
    assert_eq!(created.identificacao_orelha, tag);
    assert_eq!(created.raca, "Landrace");

    let found = suino::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.map(|m| m.id), Some(created.id));

    let by_tag = suino::find_by_identificacao_orelha(&db, &tag).await?;
    assert_eq!(by_tag.map(|m| m.id), Some(created.id));

    suino::Entity::delete_by_id(created.id).exec(&db).await?;
    let gone = suino::Entity::find_by_id(created.id).one(&db).await?;
    assert!(gone.is_none());
    Ok(())
}

#[tokio::test]
async fn test_saude_insert_and_relation() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("skip: DATABASE_URL not provided");
        return Ok(());
    }

    let db = setup_test_db().await?;
    let animal = suino::create(&db, &unique_tag("test-rel"), "Duroc").await?;

    let now = Utc::now().into();
    let am = saude::ActiveModel {
        id: NotSet,
        suino_id: Set(animal.id),
        peso: Set(42.5),
        tipo_tratamento: Set("vacina".into()),
        data_inicio_tratamento: Set(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
        data_entrada_cio: Set(None),
        observacoes: Set("rotina".into()),
        criado_em: Set(now),
        atualizado_em: Set(now),
    };
    let record = am.insert(&db).await?;

    let loaded = saude::Entity::find_by_id(record.id)
        .find_also_related(suino::Entity)
        .one(&db)
        .await?;
    let (rec, owner) = loaded.expect("record exists");
    assert_eq!(rec.suino_id, animal.id);
    assert_eq!(owner.map(|s| s.identificacao_orelha), Some(animal.identificacao_orelha));

    saude::Entity::delete_by_id(record.id).exec(&db).await?;
    suino::Entity::delete_by_id(animal.id).exec(&db).await?;
    Ok(())
}
