use std::net::SocketAddr;

use axum::Router;
use chrono::Utc;
use migration::MigratorTrait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Make models prefer env over any local config file
    std::env::set_var("CONFIG_PATH", "/nonexistent-config-for-tests.toml");

    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Err(anyhow::anyhow!("missing DATABASE_URL"));
    }

    let db = models::db::connect().await?;
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("migrations notice: {}", e);
    }

    let state = ServerState { db };
    let app: Router = routes::build_router(CorsLayer::very_permissive(), state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

fn unique_tag(prefix: &str) -> String {
    format!("{}-{}", prefix, Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

async fn create_suino(app: &TestApp, tag: &str) -> anyhow::Result<i64> {
    let res = client()
        .post(format!("{}/suino/saveSuino", app.base_url))
        .json(&json!({"identificacaoOrelha": tag, "raca": "Landrace"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    Ok(body["id"].as_i64().expect("suino id"))
}

fn saude_body(id_suino: i64) -> Value {
    json!({
        "peso": 42.5,
        "tipoTratamento": "vacina",
        "dataInicioTratamento": "2024-01-10",
        "observacoes": "rotina",
        "idSuino": id_suino
    })
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_create_then_get_returns_equal_fields() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let tag = unique_tag("e2e-eq");
    let suino_id = create_suino(&app, &tag).await?;

    let res = client()
        .post(format!("{}/saude/saveSaude", app.base_url))
        .json(&saude_body(suino_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let created: Value = res.json().await?;
    assert_eq!(created["identificadorOrelha"], tag.as_str());
    assert_eq!(created["dataInicioTratamento"], "2024-01-10");
    let saude_id = created["id"].as_i64().unwrap();

    let res = client()
        .get(format!("{}/saude/getSaude/{}", app.base_url, saude_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: Value = res.json().await?;
    assert_eq!(fetched["peso"], 42.5);
    assert_eq!(fetched["tipoTratamento"], "vacina");
    assert_eq!(fetched["dataInicioTratamento"], "2024-01-10");
    assert_eq!(fetched["observacoes"], "rotina");
    assert_eq!(fetched["dataEntradaCio"], Value::Null);
    assert_eq!(fetched["identificadorOrelha"], tag.as_str());
    Ok(())
}

#[tokio::test]
async fn e2e_create_with_missing_suino_is_404_and_writes_nothing() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let tag = unique_tag("e2e-missing");
    create_suino(&app, &tag).await?;

    let res = client()
        .post(format!("{}/saude/saveSaude", app.base_url))
        .json(&saude_body(i64::MAX - 7))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Nothing may have been written: no record can carry our tag, and the
    // bogus animal id still resolves to nothing.
    let all: Value = client()
        .get(format!("{}/saude/getAllSaudes", app.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert!(all
        .as_array()
        .map(|a| a.iter().all(|v| v["identificadorOrelha"] != tag.as_str()))
        .unwrap_or(true));
    Ok(())
}

#[tokio::test]
async fn e2e_blank_fields_are_rejected() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let suino_id = create_suino(&app, &unique_tag("e2e-blank")).await?;

    for (field, value) in [
        ("observacoes", json!("  ")),
        ("tipoTratamento", json!("")),
        ("dataInicioTratamento", json!("")),
        ("peso", Value::Null),
    ] {
        let mut body = saude_body(suino_id);
        body[field] = value;
        let res = client()
            .post(format!("{}/saude/saveSaude", app.base_url))
            .json(&body)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "field {}", field);
    }

    // Malformed date text is also a 400, but via the parse path.
    let mut body = saude_body(suino_id);
    body["dataInicioTratamento"] = json!("10/01/2024");
    let res = client()
        .post(format!("{}/saude/saveSaude", app.base_url))
        .json(&body)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_update_preserves_heat_cycle_date_when_omitted() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let suino_id = create_suino(&app, &unique_tag("e2e-upd")).await?;

    let mut body = saude_body(suino_id);
    body["dataEntradaCio"] = json!("2024-02-01");
    let created: Value = client()
        .post(format!("{}/saude/saveSaude", app.base_url))
        .json(&body)
        .send()
        .await?
        .json()
        .await?;
    let saude_id = created["id"].as_i64().unwrap();
    assert_eq!(created["dataEntradaCio"], "2024-02-01");

    // Update without dataEntradaCio: the stored date must survive.
    let mut update = saude_body(suino_id);
    update["peso"] = json!(50.0);
    let res = client()
        .put(format!("{}/saude/updateSaude/{}", app.base_url, saude_id))
        .json(&update)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["peso"], 50.0);
    assert_eq!(updated["dataEntradaCio"], "2024-02-01");

    // Update with dataEntradaCio: overwritten.
    let mut update = saude_body(suino_id);
    update["dataEntradaCio"] = json!("2024-03-15");
    let updated: Value = client()
        .put(format!("{}/saude/updateSaude/{}", app.base_url, saude_id))
        .json(&update)
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(updated["dataEntradaCio"], "2024-03-15");
    Ok(())
}

#[tokio::test]
async fn e2e_update_of_missing_record_is_404() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let suino_id = create_suino(&app, &unique_tag("e2e-upd404")).await?;
    let res = client()
        .put(format!("{}/saude/updateSaude/{}", app.base_url, i64::MAX - 3))
        .json(&saude_body(suino_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_referenced_suino_delete_conflicts_then_clean_deletes_succeed() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let suino_id = create_suino(&app, &unique_tag("e2e-del")).await?;
    let created: Value = client()
        .post(format!("{}/saude/saveSaude", app.base_url))
        .json(&saude_body(suino_id))
        .send()
        .await?
        .json()
        .await?;
    let saude_id = created["id"].as_i64().unwrap();

    // The suino is referenced by the record: delete must conflict (400) and leave it intact.
    let res = client()
        .delete(format!("{}/suino/deleteSuino/{}", app.base_url, suino_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Conflict");
    let res = client()
        .get(format!("{}/suino/getSuino/{}", app.base_url, suino_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Remove the record, then the suino; both become 404 afterwards.
    let res = client()
        .delete(format!("{}/saude/deleteSaude/{}", app.base_url, saude_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let res = client()
        .get(format!("{}/saude/getSaude/{}", app.base_url, saude_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client()
        .delete(format!("{}/suino/deleteSuino/{}", app.base_url, suino_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Deleting an already-gone record is a plain 404.
    let res = client()
        .delete(format!("{}/saude/deleteSaude/{}", app.base_url, saude_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_get_all_carries_ear_tags() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let tag = unique_tag("e2e-all");
    let suino_id = create_suino(&app, &tag).await?;
    let created: Value = client()
        .post(format!("{}/saude/saveSaude", app.base_url))
        .json(&saude_body(suino_id))
        .send()
        .await?
        .json()
        .await?;
    let saude_id = created["id"].as_i64().unwrap();

    let all: Value = client()
        .get(format!("{}/saude/getAllSaudes", app.base_url))
        .send()
        .await?
        .json()
        .await?;
    let entry = all
        .as_array()
        .and_then(|a| a.iter().find(|v| v["id"].as_i64() == Some(saude_id)))
        .cloned()
        .expect("created record listed");
    assert_eq!(entry["identificadorOrelha"], tag.as_str());
    Ok(())
}
