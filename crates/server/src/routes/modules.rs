use axum::{extract::{Path, State}, http::StatusCode, Json};
use models::module;
use service::modules::{service as module_service, CreateModuleInput, UpdateModuleInput};
use tracing::info;

use crate::{errors::ApiError, extract::JsonBody, state::AppState};

/// Ids that are not integers cannot match a row.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.trim().parse::<i32>().map_err(|_| ApiError::NotFound)
}

#[utoipa::path(
    get, path = "/api/modules", tag = "modules",
    responses(
        (status = 200, description = "All modules ordered by week, then id", body = [crate::openapi::ModuleDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<module::Model>>, ApiError> {
    let rows = module_service::list_modules(&state.db).await?;
    info!(count = rows.len(), "list modules");
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/api/modules/{id}", tag = "modules",
    params(("id" = i32, Path, description = "Module id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ModuleDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<module::Model>, ApiError> {
    let id = parse_id(&id)?;
    match module_service::get_module(&state.db, id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(ApiError::NotFound),
    }
}

#[utoipa::path(
    post, path = "/api/modules", tag = "modules",
    request_body = crate::openapi::CreateModuleDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ModuleDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateModuleInput>,
) -> Result<(StatusCode, Json<module::Model>), ApiError> {
    let new_module = input.validate()?;
    let m = module_service::create_module(&state.db, new_module).await?;
    info!(id = m.id, week = m.week, status = %m.status, "created module");
    Ok((StatusCode::CREATED, Json(m)))
}

#[utoipa::path(
    put, path = "/api/modules/{id}", tag = "modules",
    params(("id" = i32, Path, description = "Module id")),
    request_body = crate::openapi::UpdateModuleDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ModuleDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdateModuleInput>,
) -> Result<Json<module::Model>, ApiError> {
    // body errors win over unknown ids
    let patch = input.validate()?;
    let id = parse_id(&id)?;
    let m = module_service::update_module(&state.db, id, patch).await?;
    info!(id = m.id, "updated module");
    Ok(Json(m))
}

#[utoipa::path(
    delete, path = "/api/modules/{id}", tag = "modules",
    params(("id" = i32, Path, description = "Module id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    if module_service::delete_module(&state.db, id).await? {
        info!(id, "deleted module");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
