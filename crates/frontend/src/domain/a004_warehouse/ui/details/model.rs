use crate::shared::api_utils::{self, IdResponse};
use contracts::domain::a004_warehouse::{Warehouse, WarehouseDto};

pub async fn fetch_all() -> Result<Vec<Warehouse>, String> {
    api_utils::get_json("/api/warehouse").await
}

pub async fn fetch_by_id(id: &str) -> Result<Warehouse, String> {
    api_utils::get_json(&format!("/api/warehouse/{}", id)).await
}

pub async fn save_form(dto: &WarehouseDto) -> Result<String, String> {
    let resp: IdResponse = api_utils::post_json("/api/warehouse", dto).await?;
    Ok(resp.id)
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/warehouse/{}", id)).await
}

pub async fn insert_test_data() -> Result<(), String> {
    api_utils::post_empty("/api/warehouse/testdata").await
}
