use axum::{extract::Path, http::StatusCode, Json};
use serde_json::json;

use contracts::domain::a002_material::aggregate::{Material, MaterialDto};

use crate::domain::a002_material;
use crate::shared::error::{parse_uuid, ServiceError};

/// GET /api/material
pub async fn list_all() -> Result<Json<Vec<Material>>, ServiceError> {
    Ok(Json(a002_material::service::list_all().await?))
}

/// GET /api/material/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Material>, ServiceError> {
    let uuid = parse_uuid(&id)?;
    a002_material::service::get_by_id(uuid)
        .await?
        .filter(|v| !v.base.metadata.is_deleted)
        .map(Json)
        .ok_or_else(|| ServiceError::not_found(format!("material {}", id)))
}

/// POST /api/material
pub async fn upsert(Json(dto): Json<MaterialDto>) -> Result<Json<serde_json::Value>, ServiceError> {
    let id = match dto.id.clone() {
        Some(id) => {
            a002_material::service::update(dto).await?;
            id
        }
        None => a002_material::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({"id": id})))
}

/// DELETE /api/material/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ServiceError> {
    let uuid = parse_uuid(&id)?;
    if a002_material::service::delete(uuid).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ServiceError::not_found(format!("material {}", id)))
    }
}

/// POST /api/material/testdata
pub async fn insert_test_data() -> Result<StatusCode, ServiceError> {
    a002_material::service::insert_test_data().await?;
    Ok(StatusCode::OK)
}
