use crate::shared::api_utils::{self, IdResponse};
use contracts::domain::a005_contract::{Contract, ContractDto};

pub async fn fetch_all() -> Result<Vec<Contract>, String> {
    api_utils::get_json("/api/contract").await
}

pub async fn fetch_by_id(id: &str) -> Result<Contract, String> {
    api_utils::get_json(&format!("/api/contract/{}", id)).await
}

pub async fn save_form(dto: &ContractDto) -> Result<String, String> {
    let resp: IdResponse = api_utils::post_json("/api/contract", dto).await?;
    Ok(resp.id)
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/contract/{}", id)).await
}
