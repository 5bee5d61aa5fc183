use serde::{Deserialize, Serialize};

/// Результат генерации заказов: ошибки считаются, но не откатываются
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOrdersResponse {
    pub created_order_ids: Vec<String>,
    /// Выбранные регламенты, которых нет в списке наступающих
    pub skipped: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}
