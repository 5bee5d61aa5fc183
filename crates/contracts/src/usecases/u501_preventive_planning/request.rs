use serde::{Deserialize, Serialize};

/// GET /api/planning/due?horizon=N
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DueRoutinesQuery {
    /// Горизонт в днях; если не задан, берётся из настроек
    pub horizon: Option<u32>,
}

/// POST /api/planning/generate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOrdersRequest {
    pub routine_ids: Vec<String>,
    pub horizon_days: u32,
}
