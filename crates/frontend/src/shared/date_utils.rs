/// Utilities for date formatting and calendar layout
use chrono::{Datelike, Days, Months, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь",
    "Октябрь", "Ноябрь", "Декабрь",
];

pub const WEEKDAY_NAMES: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

/// Сегодняшняя дата в часовом поясе браузера
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Format date to DD.MM.YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Пустая дата отображается как "-"
pub fn format_date_opt(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".to_string())
}

/// Format timestamp to DD.MM.YYYY HH:MM
pub fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.with_timezone(&chrono::Local)
        .format("%d.%m.%Y %H:%M")
        .to_string()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Сдвиг на `delta` месяцев от первого числа месяца `date`
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(date);
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    };
    shifted.unwrap_or(first)
}

/// "Март 2024"
pub fn month_title(date: NaiveDate) -> String {
    format!("{} {}", MONTH_NAMES[date.month0() as usize], date.year())
}

/// Недели месяца для сетки календаря, с понедельника.
/// Дни соседних месяцев представлены `None`.
pub fn calendar_weeks(month: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let first = first_of_month(month);
    let offset = first.weekday().num_days_from_monday() as usize;

    let mut weeks = Vec::new();
    let mut week: [Option<NaiveDate>; 7] = [None; 7];
    let mut slot = offset;
    let mut day = first;
    while day.month() == first.month() {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
        match day.checked_add_days(Days::new(1)) {
            Some(next) => day = next,
            None => break,
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 3, 15)), "15.03.2024");
        assert_eq!(format_date_opt(None), "-");
    }

    #[test]
    fn test_shift_month() {
        assert_eq!(shift_month(date(2024, 1, 31), 1), date(2024, 2, 1));
        assert_eq!(shift_month(date(2024, 1, 15), -1), date(2023, 12, 1));
        assert_eq!(month_title(date(2024, 3, 5)), "Март 2024");
    }

    #[test]
    fn test_calendar_weeks() {
        // 1 февраля 2024 - четверг, 29 дней
        let weeks = calendar_weeks(date(2024, 2, 10));
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], None);
        assert_eq!(weeks[0][3], Some(date(2024, 2, 1)));
        assert_eq!(weeks[4][3], Some(date(2024, 2, 29)));
        assert_eq!(weeks[4][4], None);
        let days: usize = weeks.iter().map(|w| w.iter().flatten().count()).sum();
        assert_eq!(days, 29);
    }
}
