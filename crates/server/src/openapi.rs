use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct PongDoc { pub ok: bool, pub msg: String }

#[derive(ToSchema)]
pub struct VisitTotalDoc { pub total_visitas: u64 }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct ModuleDoc {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub week: i32,
    /// One of `planned`, `in_progress`, `done`
    #[schema(example = "planned")]
    pub status: String,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// RFC 3339 timestamp, refreshed on every change
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct CreateModuleDoc {
    pub title: String,
    pub description: Option<String>,
    /// Integer, or a string holding one
    pub week: i32,
    #[schema(example = "planned")]
    pub status: Option<String>,
}

#[derive(ToSchema)]
pub struct UpdateModuleDoc {
    pub title: Option<String>,
    pub description: Option<String>,
    pub week: Option<i32>,
    pub status: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::meta::ping,
        crate::routes::meta::visitas,
        crate::routes::modules::list,
        crate::routes::modules::get,
        crate::routes::modules::create,
        crate::routes::modules::update,
        crate::routes::modules::delete,
    ),
    components(
        schemas(
            PongDoc,
            VisitTotalDoc,
            ErrorDoc,
            ModuleDoc,
            CreateModuleDoc,
            UpdateModuleDoc,
        )
    ),
    tags(
        (name = "meta"),
        (name = "modules")
    )
)]
pub struct ApiDoc;
