use crate::shared::api_utils;
use contracts::system::settings::AppSettings;

pub async fn fetch_settings() -> Result<AppSettings, String> {
    api_utils::get_json("/api/settings").await
}

pub async fn save_settings(settings: &AppSettings) -> Result<(), String> {
    api_utils::post_no_content("/api/settings", settings).await
}
