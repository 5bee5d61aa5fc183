use axum::{extract::Query, Json};

use contracts::usecases::u501_preventive_planning::{
    DueRoutine, DueRoutinesQuery, GenerateOrdersRequest, GenerateOrdersResponse,
};

use crate::shared::error::ServiceError;
use crate::usecases::u501_preventive_planning::executor;

/// GET /api/planning/due?horizon=N
pub async fn due(
    Query(query): Query<DueRoutinesQuery>,
) -> Result<Json<Vec<DueRoutine>>, ServiceError> {
    Ok(Json(executor::due_routines(query.horizon).await?))
}

/// POST /api/planning/generate
pub async fn generate(
    Json(request): Json<GenerateOrdersRequest>,
) -> Result<Json<GenerateOrdersResponse>, ServiceError> {
    Ok(Json(executor::generate(request).await?))
}
