use super::repository;
use crate::shared::config;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::system::settings::AppSettings;

/// Текущие настройки; до первого сохранения действуют значения по умолчанию
pub async fn get() -> ServiceResult<AppSettings> {
    match repository::load().await? {
        Some(settings) => Ok(settings),
        None => Ok(AppSettings {
            default_horizon_days: config::default_horizon_days(),
            ..AppSettings::default()
        }),
    }
}

pub async fn save(mut settings: AppSettings) -> ServiceResult<()> {
    settings.company_name = settings.company_name.trim().to_string();
    settings.order_number_prefix = settings.order_number_prefix.trim().to_string();
    settings.validate().map_err(ServiceError::Validation)?;
    repository::save(&settings).await?;
    tracing::info!(
        "Settings saved: prefix {}, horizon {} days",
        settings.order_number_prefix,
        settings.default_horizon_days
    );
    Ok(())
}
