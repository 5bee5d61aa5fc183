use axum::{
    extract::Path,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde_json::json;

use contracts::domain::a002_material::aggregate::StockCheck;
use contracts::domain::a007_maintenance_order::aggregate::{
    AddMaterialRequest, MaintenanceOrder, MaintenanceOrderDto, StatusChangeRequest,
};

use crate::domain::a007_maintenance_order;
use crate::shared::error::{parse_uuid, ServiceError};
use crate::shared::report_html::render_document;

/// GET /api/maintenance_order
pub async fn list_all() -> Result<Json<Vec<MaintenanceOrder>>, ServiceError> {
    Ok(Json(a007_maintenance_order::service::list_all().await?))
}

/// GET /api/maintenance_order/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<MaintenanceOrder>, ServiceError> {
    let uuid = parse_uuid(&id)?;
    a007_maintenance_order::service::get_by_id(uuid)
        .await?
        .filter(|v| !v.base.metadata.is_deleted)
        .map(Json)
        .ok_or_else(|| ServiceError::not_found(format!("maintenance_order {}", id)))
}

/// POST /api/maintenance_order
pub async fn upsert(
    Json(dto): Json<MaintenanceOrderDto>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let id = match dto.id.clone() {
        Some(id) => {
            a007_maintenance_order::service::update(dto).await?;
            id
        }
        None => a007_maintenance_order::service::create(dto)
            .await?
            .to_string(),
    };
    Ok(Json(json!({"id": id})))
}

/// DELETE /api/maintenance_order/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ServiceError> {
    let uuid = parse_uuid(&id)?;
    if a007_maintenance_order::service::delete(uuid).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ServiceError::not_found(format!("maintenance_order {}", id)))
    }
}

/// POST /api/maintenance_order/:id/status
pub async fn change_status(
    Path(id): Path<String>,
    Json(request): Json<StatusChangeRequest>,
) -> Result<Json<MaintenanceOrder>, ServiceError> {
    let uuid = parse_uuid(&id)?;
    let order = a007_maintenance_order::service::change_status(uuid, request.status).await?;
    Ok(Json(order))
}

/// POST /api/maintenance_order/:id/materials
pub async fn add_material(
    Path(id): Path<String>,
    Json(request): Json<AddMaterialRequest>,
) -> Result<Json<StockCheck>, ServiceError> {
    let uuid = parse_uuid(&id)?;
    let check = a007_maintenance_order::service::add_material(uuid, request).await?;
    Ok(Json(check))
}

/// GET /api/maintenance_order/:id/report
pub async fn report(Path(id): Path<String>) -> Result<impl IntoResponse, ServiceError> {
    let uuid = parse_uuid(&id)?;
    let document = a007_maintenance_order::service::build_report(uuid).await?;
    Ok(Html(render_document(&document)))
}
