use axum::{extract::State, Json};
use common::types::{Pong, VisitTotal};
use tracing::info;

use crate::{errors::ApiError, state::AppState};

/// Liveness probe
#[utoipa::path(
    get, path = "/api/ping", tag = "meta",
    responses((status = 200, description = "Alive", body = crate::openapi::PongDoc))
)]
pub async fn ping() -> Json<Pong> {
    Json(Pong::default())
}

/// Record a visit and return the running total
#[utoipa::path(
    get, path = "/api/visitas", tag = "meta",
    responses(
        (status = 200, description = "Visit recorded", body = crate::openapi::VisitTotalDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn visitas(State(state): State<AppState>) -> Result<Json<VisitTotal>, ApiError> {
    let total = service::visits::record_visit(&state.db).await?;
    info!(total, "visit counted");
    Ok(Json(VisitTotal { total_visitas: total }))
}
