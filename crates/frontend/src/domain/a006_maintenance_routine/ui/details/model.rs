use crate::shared::api_utils::{self, IdResponse};
use contracts::domain::a006_maintenance_routine::{MaintenanceRoutine, MaintenanceRoutineDto};

pub async fn fetch_all() -> Result<Vec<MaintenanceRoutine>, String> {
    api_utils::get_json("/api/maintenance_routine").await
}

pub async fn fetch_by_id(id: &str) -> Result<MaintenanceRoutine, String> {
    api_utils::get_json(&format!("/api/maintenance_routine/{}", id)).await
}

pub async fn save_form(dto: &MaintenanceRoutineDto) -> Result<String, String> {
    let resp: IdResponse = api_utils::post_json("/api/maintenance_routine", dto).await?;
    Ok(resp.id)
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/maintenance_routine/{}", id)).await
}

pub async fn insert_test_data() -> Result<(), String> {
    api_utils::post_empty("/api/maintenance_routine/testdata").await
}

/// Создать осмотр по чек-листу регламента; возвращает id осмотра
pub async fn start_checklist(id: &str) -> Result<String, String> {
    let resp = api_utils::post_command(&format!("/api/maintenance_routine/{}/checklist", id)).await?;
    Ok(resp.id)
}
