//! Single-row create, update, delete for any level. The level arrives as a route extension.

use crate::config::Level;
use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::model::{NodeAttributes, NodeInput};
use crate::response::{created, message};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension,
};
use uuid::Uuid;

fn parse_id(id_str: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id_str).map_err(|_| AppError::BadRequest("invalid id".into()))
}

pub async fn create_node(
    Extension(level): Extension<Level>,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NodeInput>,
) -> Result<impl IntoResponse, AppError> {
    let row = CrudService::create(&state.pool, level, &body).await?;
    Ok(created(row))
}

pub async fn update_node(
    Extension(level): Extension<Level>,
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    ApiJson(body): ApiJson<NodeAttributes>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    CrudService::update(&state.pool, level, id, &body).await?;
    Ok(message(format!("{} updated successfully", level.descriptor().display)))
}

pub async fn delete_node(
    Extension(level): Extension<Level>,
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    CrudService::delete(&state.pool, level, id).await?;
    Ok(message(format!("{} deleted successfully", level.descriptor().display)))
}
