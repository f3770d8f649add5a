//! Whole-hierarchy read and bulk upload.

use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::model::CurriculumTree;
use crate::service::{load_tree, parse_documents, BulkImporter};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::{json, Value};

pub async fn get_curriculums(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let curriculums = load_tree(&state.pool).await?;
    Ok(Json(CurriculumTree { curriculums }))
}

/// POST /curriculum/upload: validate the payload shape, then import on one pooled connection.
pub async fn upload_curriculums(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> Result<impl IntoResponse, AppError> {
    let documents = parse_documents(body)?;
    let mut conn = state.pool.acquire().await?;
    let report = BulkImporter::run(&mut *conn, documents).await;
    let message = if report.errors.is_empty() {
        "Curriculum upload completed"
    } else {
        "Curriculum upload completed with errors"
    };
    Ok(Json(json!({ "message": message, "results": report })))
}
