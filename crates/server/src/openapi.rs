use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Documentation mirror of `service::db::saude_service::SaudePayload`.
#[derive(ToSchema)]
#[schema(as = SaudePayload)]
pub struct SaudePayloadDoc {
    pub peso: Option<f64>,
    #[schema(example = "vacina")]
    pub tipo_tratamento: String,
    #[schema(example = "2024-01-10")]
    pub data_inicio_tratamento: String,
    pub observacoes: String,
    pub data_entrada_cio: Option<String>,
    pub id_suino: Option<i64>,
}

#[derive(ToSchema)]
#[schema(as = SuinoPayload)]
pub struct SuinoPayloadDoc {
    pub identificacao_orelha: String,
    pub raca: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::saude::save,
        crate::routes::saude::update,
        crate::routes::saude::get_one,
        crate::routes::saude::get_all,
        crate::routes::saude::delete_one,
        crate::routes::suino::save,
        crate::routes::suino::get_one,
        crate::routes::suino::get_by_orelha,
        crate::routes::suino::get_all,
        crate::routes::suino::delete_one,
    ),
    components(
        schemas(
            HealthResponse,
            SaudePayloadDoc,
            SuinoPayloadDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "saude"),
        (name = "suino")
    )
)]
pub struct ApiDoc;
