use crate::usecases::u501_preventive_planning::DEFAULT_HORIZON_DAYS;
use serde::{Deserialize, Serialize};

/// Настройки приложения (единственная запись коллекции sys_settings)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Название предприятия в шапке печатных форм
    pub company_name: String,
    /// Горизонт планирования ТО по умолчанию, дней
    pub default_horizon_days: u32,
    /// Префикс номера заказа ("OT" → "OT-000001")
    pub order_number_prefix: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            company_name: "Предприятие".to_string(),
            default_horizon_days: DEFAULT_HORIZON_DAYS,
            order_number_prefix: "OT".to_string(),
        }
    }
}

impl AppSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.order_number_prefix.trim().is_empty() {
            return Err("Префикс номера заказа не может быть пустым".into());
        }
        if self.order_number_prefix.chars().any(char::is_whitespace) {
            return Err("Префикс номера заказа не должен содержать пробелов".into());
        }
        Ok(())
    }

    /// Номер заказа по порядковому номеру: PREFIX-000042
    pub fn format_order_number(&self, sequence: u64) -> String {
        format!("{}-{:06}", self.order_number_prefix.trim(), sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_number_format() {
        let settings = AppSettings::default();
        assert_eq!(settings.format_order_number(42), "OT-000042");
        assert_eq!(settings.format_order_number(1234567), "OT-1234567");
    }

    #[test]
    fn test_prefix_validation() {
        let mut settings = AppSettings::default();
        assert!(settings.validate().is_ok());
        settings.order_number_prefix = "O T".into();
        assert!(settings.validate().is_err());
        settings.order_number_prefix = " ".into();
        assert!(settings.validate().is_err());
    }
}
