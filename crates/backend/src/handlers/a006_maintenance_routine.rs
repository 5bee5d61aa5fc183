use axum::{extract::Path, http::StatusCode, Json};
use serde_json::json;

use contracts::domain::a006_maintenance_routine::aggregate::{MaintenanceRoutine, MaintenanceRoutineDto};

use crate::domain::a006_maintenance_routine;
use crate::shared::error::{parse_uuid, ServiceError};

/// GET /api/maintenance_routine
pub async fn list_all() -> Result<Json<Vec<MaintenanceRoutine>>, ServiceError> {
    Ok(Json(a006_maintenance_routine::service::list_all().await?))
}

/// GET /api/maintenance_routine/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<MaintenanceRoutine>, ServiceError> {
    let uuid = parse_uuid(&id)?;
    a006_maintenance_routine::service::get_by_id(uuid)
        .await?
        .filter(|v| !v.base.metadata.is_deleted)
        .map(Json)
        .ok_or_else(|| ServiceError::not_found(format!("maintenance_routine {}", id)))
}

/// POST /api/maintenance_routine
pub async fn upsert(Json(dto): Json<MaintenanceRoutineDto>) -> Result<Json<serde_json::Value>, ServiceError> {
    let id = match dto.id.clone() {
        Some(id) => {
            a006_maintenance_routine::service::update(dto).await?;
            id
        }
        None => a006_maintenance_routine::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({"id": id})))
}

/// DELETE /api/maintenance_routine/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ServiceError> {
    let uuid = parse_uuid(&id)?;
    if a006_maintenance_routine::service::delete(uuid).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ServiceError::not_found(format!("maintenance_routine {}", id)))
    }
}

/// POST /api/maintenance_routine/testdata
pub async fn insert_test_data() -> Result<StatusCode, ServiceError> {
    a006_maintenance_routine::service::insert_test_data().await?;
    Ok(StatusCode::OK)
}

/// POST /api/maintenance_routine/:id/checklist
///
/// Начать осмотр по чек-листу регламента
pub async fn start_checklist(
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let uuid = parse_uuid(&id)?;
    let execution_id = crate::domain::a008_checklist_execution::service::start_from_routine(uuid)
        .await?
        .to_string();
    Ok(Json(json!({"id": execution_id})))
}
