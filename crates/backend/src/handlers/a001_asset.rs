use axum::{extract::Path, http::StatusCode, Json};
use serde_json::json;

use contracts::domain::a001_asset::aggregate::{Asset, AssetDto};

use crate::domain::a001_asset;
use crate::shared::error::{parse_uuid, ServiceError};

/// GET /api/asset
pub async fn list_all() -> Result<Json<Vec<Asset>>, ServiceError> {
    Ok(Json(a001_asset::service::list_all().await?))
}

/// GET /api/asset/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Asset>, ServiceError> {
    let uuid = parse_uuid(&id)?;
    a001_asset::service::get_by_id(uuid)
        .await?
        .filter(|v| !v.base.metadata.is_deleted)
        .map(Json)
        .ok_or_else(|| ServiceError::not_found(format!("asset {}", id)))
}

/// POST /api/asset
pub async fn upsert(Json(dto): Json<AssetDto>) -> Result<Json<serde_json::Value>, ServiceError> {
    let id = match dto.id.clone() {
        Some(id) => {
            a001_asset::service::update(dto).await?;
            id
        }
        None => a001_asset::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({"id": id})))
}

/// DELETE /api/asset/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ServiceError> {
    let uuid = parse_uuid(&id)?;
    if a001_asset::service::delete(uuid).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ServiceError::not_found(format!("asset {}", id)))
    }
}

/// POST /api/asset/testdata
pub async fn insert_test_data() -> Result<StatusCode, ServiceError> {
    a001_asset::service::insert_test_data().await?;
    Ok(StatusCode::OK)
}
