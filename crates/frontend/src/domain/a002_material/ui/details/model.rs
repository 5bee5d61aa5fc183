use crate::shared::api_utils::{self, IdResponse};
use contracts::domain::a002_material::{Material, MaterialDto};

pub async fn fetch_all() -> Result<Vec<Material>, String> {
    api_utils::get_json("/api/material").await
}

pub async fn fetch_by_id(id: &str) -> Result<Material, String> {
    api_utils::get_json(&format!("/api/material/{}", id)).await
}

pub async fn save_form(dto: &MaterialDto) -> Result<String, String> {
    let resp: IdResponse = api_utils::post_json("/api/material", dto).await?;
    Ok(resp.id)
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/material/{}", id)).await
}

pub async fn insert_test_data() -> Result<(), String> {
    api_utils::post_empty("/api/material/testdata").await
}
