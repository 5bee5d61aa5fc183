use crate::shared::api_utils::{self, IdResponse};
use contracts::domain::a008_checklist_execution::{ChecklistExecution, ChecklistExecutionDto};

pub async fn fetch_all() -> Result<Vec<ChecklistExecution>, String> {
    api_utils::get_json("/api/checklist_execution").await
}

pub async fn fetch_by_id(id: &str) -> Result<ChecklistExecution, String> {
    api_utils::get_json(&format!("/api/checklist_execution/{}", id)).await
}

pub async fn save_form(dto: &ChecklistExecutionDto) -> Result<String, String> {
    let resp: IdResponse = api_utils::post_json("/api/checklist_execution", dto).await?;
    Ok(resp.id)
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/checklist_execution/{}", id)).await
}

/// Аварийный заказ по дефектам осмотра. Повторный вызов возвращает уже
/// созданный заказ.
pub async fn create_corrective_order(id: &str) -> Result<String, String> {
    let resp = api_utils::post_command(&format!(
        "/api/checklist_execution/{}/corrective_order",
        id
    ))
    .await?;
    Ok(resp.id)
}

pub fn open_report(id: &str) -> Result<(), String> {
    api_utils::open_in_new_window(&format!("/api/checklist_execution/{}/report", id))
}
