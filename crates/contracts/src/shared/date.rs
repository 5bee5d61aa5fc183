//! Разбор и форматирование календарных дат.
//!
//! Даты хранятся как `chrono::NaiveDate` без часового пояса. Разбор
//! намеренно снисходителен: некорректная строка даёт `None`, а не ошибку.

use chrono::NaiveDate;

const ACCEPTED_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];

/// Разобрать дату из строки формы или CSV.
///
/// Поддерживает "2024-03-15", "15.03.2024", "15/03/2024" и ISO datetime
/// ("2024-03-15T14:02:26Z", берётся только часть даты).
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

/// Формат для `<input type="date">` и JSON: YYYY-MM-DD
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Опциональная дата в формат YYYY-MM-DD или пустая строка
pub fn to_iso_opt(date: Option<NaiveDate>) -> String {
    date.map(to_iso).unwrap_or_default()
}

/// Формат для отображения: DD.MM.YYYY; пустая дата показывается прочерком
pub fn display_opt(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(parse_date("2024-03-15"), expected);
        assert_eq!(parse_date("15.03.2024"), expected);
        assert_eq!(parse_date("15/03/2024"), expected);
        assert_eq!(parse_date(" 2024-03-15T14:02:26Z "), expected);
    }

    #[test]
    fn test_malformed_is_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-02-30"), None);
    }

    #[test]
    fn test_display() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 31);
        assert_eq!(display_opt(d), "31.01.2024");
        assert_eq!(display_opt(None), "—");
        assert_eq!(to_iso_opt(d), "2024-01-31");
        assert_eq!(to_iso_opt(None), "");
    }
}
