use axum::{extract::Path, http::StatusCode, Json};
use serde_json::json;

use contracts::domain::a003_partner::aggregate::{Partner, PartnerDto};

use crate::domain::a003_partner;
use crate::shared::error::{parse_uuid, ServiceError};

/// GET /api/partner
pub async fn list_all() -> Result<Json<Vec<Partner>>, ServiceError> {
    Ok(Json(a003_partner::service::list_all().await?))
}

/// GET /api/partner/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Partner>, ServiceError> {
    let uuid = parse_uuid(&id)?;
    a003_partner::service::get_by_id(uuid)
        .await?
        .filter(|v| !v.base.metadata.is_deleted)
        .map(Json)
        .ok_or_else(|| ServiceError::not_found(format!("partner {}", id)))
}

/// POST /api/partner
pub async fn upsert(Json(dto): Json<PartnerDto>) -> Result<Json<serde_json::Value>, ServiceError> {
    let id = match dto.id.clone() {
        Some(id) => {
            a003_partner::service::update(dto).await?;
            id
        }
        None => a003_partner::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({"id": id})))
}

/// DELETE /api/partner/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ServiceError> {
    let uuid = parse_uuid(&id)?;
    if a003_partner::service::delete(uuid).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ServiceError::not_found(format!("partner {}", id)))
    }
}

/// POST /api/partner/testdata
pub async fn insert_test_data() -> Result<StatusCode, ServiceError> {
    a003_partner::service::insert_test_data().await?;
    Ok(StatusCode::OK)
}
