use crate::shared::api_utils::{self, IdResponse};
use contracts::domain::a002_material::StockCheck;
use contracts::domain::a007_maintenance_order::{
    AddMaterialRequest, MaintenanceOrder, MaintenanceOrderDto, StatusChangeRequest,
};
use contracts::enums::OrderStatus;

pub async fn fetch_all() -> Result<Vec<MaintenanceOrder>, String> {
    api_utils::get_json("/api/maintenance_order").await
}

pub async fn fetch_by_id(id: &str) -> Result<MaintenanceOrder, String> {
    api_utils::get_json(&format!("/api/maintenance_order/{}", id)).await
}

pub async fn save_form(dto: &MaintenanceOrderDto) -> Result<String, String> {
    let resp: IdResponse = api_utils::post_json("/api/maintenance_order", dto).await?;
    Ok(resp.id)
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/maintenance_order/{}", id)).await
}

pub async fn change_status(id: &str, status: OrderStatus) -> Result<MaintenanceOrder, String> {
    api_utils::post_json(
        &format!("/api/maintenance_order/{}/status", id),
        &StatusChangeRequest { status },
    )
    .await
}

/// Списать материал в заказ; ответ содержит остаток после списания
pub async fn add_material(id: &str, material_id: String, quantity: f64) -> Result<StockCheck, String> {
    api_utils::post_json(
        &format!("/api/maintenance_order/{}/materials", id),
        &AddMaterialRequest {
            material_id,
            quantity,
        },
    )
    .await
}

pub fn open_report(id: &str) -> Result<(), String> {
    api_utils::open_in_new_window(&format!("/api/maintenance_order/{}/report", id))
}
