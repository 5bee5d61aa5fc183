use chrono::Utc;
use contracts::system::settings::AppSettings;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;

const SETTINGS_KEY: &str = "app";

pub async fn load() -> anyhow::Result<Option<AppSettings>> {
    let conn = get_connection();
    let row = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT settings_json FROM sys_settings WHERE settings_key = ?",
            vec![SETTINGS_KEY.into()],
        ))
        .await?;

    match row {
        Some(row) => {
            let json: String = row.try_get("", "settings_json")?;
            Ok(Some(serde_json::from_str(&json)?))
        }
        None => Ok(None),
    }
}

pub async fn save(settings: &AppSettings) -> anyhow::Result<()> {
    let conn = get_connection();
    let json = serde_json::to_string(settings)?;
    let updated_at = Utc::now().to_rfc3339();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        r#"
        INSERT INTO sys_settings (settings_key, settings_json, updated_at)
        VALUES (?, ?, ?)
        ON CONFLICT(settings_key) DO UPDATE SET
            settings_json = excluded.settings_json,
            updated_at = excluded.updated_at
        "#,
        vec![SETTINGS_KEY.into(), json.into(), updated_at.into()],
    ))
    .await?;
    Ok(())
}
