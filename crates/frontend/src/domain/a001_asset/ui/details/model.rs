use crate::shared::api_utils::{self, IdResponse};
use contracts::domain::a001_asset::{Asset, AssetDto};

pub async fn fetch_all() -> Result<Vec<Asset>, String> {
    api_utils::get_json("/api/asset").await
}

pub async fn fetch_by_id(id: &str) -> Result<Asset, String> {
    api_utils::get_json(&format!("/api/asset/{}", id)).await
}

pub async fn save_form(dto: &AssetDto) -> Result<String, String> {
    let resp: IdResponse = api_utils::post_json("/api/asset", dto).await?;
    Ok(resp.id)
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/asset/{}", id)).await
}

pub async fn insert_test_data() -> Result<(), String> {
    api_utils::post_empty("/api/asset/testdata").await
}

/// Пары (id, "код - наименование") для выпадающих списков других форм
pub fn to_options(assets: &[Asset]) -> Vec<(String, String)> {
    assets
        .iter()
        .map(|a| {
            (
                a.to_string_id(),
                format!("{} - {}", a.base.code, a.base.description),
            )
        })
        .collect()
}
