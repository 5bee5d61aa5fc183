use axum::{extract::Path, http::StatusCode, Json};
use serde_json::json;

use contracts::domain::a004_warehouse::aggregate::{Warehouse, WarehouseDto};

use crate::domain::a004_warehouse;
use crate::shared::error::{parse_uuid, ServiceError};

/// GET /api/warehouse
pub async fn list_all() -> Result<Json<Vec<Warehouse>>, ServiceError> {
    Ok(Json(a004_warehouse::service::list_all().await?))
}

/// GET /api/warehouse/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Warehouse>, ServiceError> {
    let uuid = parse_uuid(&id)?;
    a004_warehouse::service::get_by_id(uuid)
        .await?
        .filter(|v| !v.base.metadata.is_deleted)
        .map(Json)
        .ok_or_else(|| ServiceError::not_found(format!("warehouse {}", id)))
}

/// POST /api/warehouse
pub async fn upsert(Json(dto): Json<WarehouseDto>) -> Result<Json<serde_json::Value>, ServiceError> {
    let id = match dto.id.clone() {
        Some(id) => {
            a004_warehouse::service::update(dto).await?;
            id
        }
        None => a004_warehouse::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({"id": id})))
}

/// DELETE /api/warehouse/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ServiceError> {
    let uuid = parse_uuid(&id)?;
    if a004_warehouse::service::delete(uuid).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ServiceError::not_found(format!("warehouse {}", id)))
    }
}

/// POST /api/warehouse/testdata
pub async fn insert_test_data() -> Result<StatusCode, ServiceError> {
    a004_warehouse::service::insert_test_data().await?;
    Ok(StatusCode::OK)
}
