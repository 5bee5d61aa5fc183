use axum::{http::StatusCode, Json};

use contracts::system::settings::AppSettings;

use crate::shared::error::ServiceError;
use crate::system::settings;

/// GET /api/settings
pub async fn get() -> Result<Json<AppSettings>, ServiceError> {
    Ok(Json(settings::service::get().await?))
}

/// POST /api/settings
pub async fn save(Json(request): Json<AppSettings>) -> Result<StatusCode, ServiceError> {
    settings::service::save(request).await?;
    Ok(StatusCode::OK)
}
