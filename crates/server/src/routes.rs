use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod meta;
pub mod modules;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: JSON API, OpenAPI document and the static client
pub fn build_router(state: AppState, static_dir: &str, cors: CorsLayer) -> Router {
    let static_files = ServeDir::new(static_dir)
        .fallback(ServeFile::new(format!("{}/index.html", static_dir.trim_end_matches('/'))));

    let api = Router::new()
        .route("/api/ping", get(meta::ping))
        .route("/api/visitas", get(meta::visitas))
        .route("/api/modules", get(modules::list).post(modules::create))
        .route(
            "/api/modules/:id",
            get(modules::get).put(modules::update).delete(modules::delete),
        )
        .route("/api-docs/openapi.json", get(openapi_json));

    api.fallback_service(static_files)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // response event with status and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx and other failures at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
