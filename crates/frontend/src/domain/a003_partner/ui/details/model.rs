use crate::shared::api_utils::{self, IdResponse};
use contracts::domain::a003_partner::{Partner, PartnerDto};

pub async fn fetch_all() -> Result<Vec<Partner>, String> {
    api_utils::get_json("/api/partner").await
}

pub async fn fetch_by_id(id: &str) -> Result<Partner, String> {
    api_utils::get_json(&format!("/api/partner/{}", id)).await
}

pub async fn save_form(dto: &PartnerDto) -> Result<String, String> {
    let resp: IdResponse = api_utils::post_json("/api/partner", dto).await?;
    Ok(resp.id)
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/partner/{}", id)).await
}

pub async fn insert_test_data() -> Result<(), String> {
    api_utils::post_empty("/api/partner/testdata").await
}
