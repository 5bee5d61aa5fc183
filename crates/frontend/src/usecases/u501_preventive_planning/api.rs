use crate::shared::api_utils;
use contracts::usecases::u501_preventive_planning::{
    DueRoutine, DueRoutinesQuery, GenerateOrdersRequest, GenerateOrdersResponse,
};

/// Путь запроса наступающих регламентов с горизонтом в query string
pub fn due_path(horizon_days: u32) -> String {
    let query = serde_qs::to_string(&DueRoutinesQuery {
        horizon: Some(horizon_days),
    })
    .unwrap_or_default();
    format!("/api/planning/due?{}", query)
}

pub async fn fetch_due(horizon_days: u32) -> Result<Vec<DueRoutine>, String> {
    api_utils::get_json(&due_path(horizon_days)).await
}

pub async fn generate_orders(
    routine_ids: Vec<String>,
    horizon_days: u32,
) -> Result<GenerateOrdersResponse, String> {
    api_utils::post_json(
        "/api/planning/generate",
        &GenerateOrdersRequest {
            routine_ids,
            horizon_days,
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_path() {
        assert_eq!(due_path(45), "/api/planning/due?horizon=45");
    }
}
