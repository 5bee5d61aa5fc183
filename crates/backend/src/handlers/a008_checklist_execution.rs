use axum::{
    extract::Path,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde_json::json;

use contracts::domain::a008_checklist_execution::aggregate::{
    ChecklistExecution, ChecklistExecutionDto,
};

use crate::domain::a008_checklist_execution;
use crate::shared::error::{parse_uuid, ServiceError};
use crate::shared::report_html::render_document;

/// GET /api/checklist_execution
pub async fn list_all() -> Result<Json<Vec<ChecklistExecution>>, ServiceError> {
    Ok(Json(a008_checklist_execution::service::list_all().await?))
}

/// GET /api/checklist_execution/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<ChecklistExecution>, ServiceError> {
    let uuid = parse_uuid(&id)?;
    a008_checklist_execution::service::get_by_id(uuid)
        .await?
        .filter(|v| !v.base.metadata.is_deleted)
        .map(Json)
        .ok_or_else(|| ServiceError::not_found(format!("checklist_execution {}", id)))
}

/// POST /api/checklist_execution
pub async fn upsert(
    Json(dto): Json<ChecklistExecutionDto>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let id = match dto.id.clone() {
        Some(id) => {
            a008_checklist_execution::service::update(dto).await?;
            id
        }
        None => a008_checklist_execution::service::create(dto)
            .await?
            .to_string(),
    };
    Ok(Json(json!({"id": id})))
}

/// DELETE /api/checklist_execution/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ServiceError> {
    let uuid = parse_uuid(&id)?;
    if a008_checklist_execution::service::delete(uuid).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ServiceError::not_found(format!("checklist_execution {}", id)))
    }
}

/// POST /api/checklist_execution/:id/corrective_order
pub async fn create_corrective_order(
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let uuid = parse_uuid(&id)?;
    let order_id = a008_checklist_execution::service::create_corrective_order(uuid).await?;
    Ok(Json(json!({"id": order_id})))
}

/// GET /api/checklist_execution/:id/report
pub async fn report(Path(id): Path<String>) -> Result<impl IntoResponse, ServiceError> {
    let uuid = parse_uuid(&id)?;
    let document = a008_checklist_execution::service::build_report(uuid).await?;
    Ok(Html(render_document(&document)))
}
