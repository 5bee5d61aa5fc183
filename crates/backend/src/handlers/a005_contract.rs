use axum::{extract::Path, http::StatusCode, Json};
use serde_json::json;

use contracts::domain::a005_contract::aggregate::{Contract, ContractDto};

use crate::domain::a005_contract;
use crate::shared::error::{parse_uuid, ServiceError};

/// GET /api/contract
pub async fn list_all() -> Result<Json<Vec<Contract>>, ServiceError> {
    Ok(Json(a005_contract::service::list_all().await?))
}

/// GET /api/contract/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Contract>, ServiceError> {
    let uuid = parse_uuid(&id)?;
    a005_contract::service::get_by_id(uuid)
        .await?
        .filter(|v| !v.base.metadata.is_deleted)
        .map(Json)
        .ok_or_else(|| ServiceError::not_found(format!("contract {}", id)))
}

/// POST /api/contract
pub async fn upsert(Json(dto): Json<ContractDto>) -> Result<Json<serde_json::Value>, ServiceError> {
    let id = match dto.id.clone() {
        Some(id) => {
            a005_contract::service::update(dto).await?;
            id
        }
        None => a005_contract::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({"id": id})))
}

/// DELETE /api/contract/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ServiceError> {
    let uuid = parse_uuid(&id)?;
    if a005_contract::service::delete(uuid).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ServiceError::not_found(format!("contract {}", id)))
    }
}
