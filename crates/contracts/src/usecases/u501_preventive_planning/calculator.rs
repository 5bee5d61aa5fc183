//! Расчёт регламентов ТО, наступающих в горизонте планирования.
//!
//! Чистые функции: без хранения, повторов и побочных эффектов. Генерация
//! заказов только строит DTO, запись выполняет backend.

use crate::domain::a001_asset::Asset;
use crate::domain::a006_maintenance_routine::MaintenanceRoutine;
use crate::domain::common::AggregateId;
use crate::enums::{OrderStatus, OrderType, Priority};
use crate::domain::a007_maintenance_order::MaintenanceOrderDto;
use crate::shared::date::to_iso;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Регламент с рассчитанной датой следующего выполнения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DueRoutine {
    pub routine: MaintenanceRoutine,
    pub asset_name: String,
    pub next_date: NaiveDate,
    /// Дней до срока относительно "сегодня"; отрицательное значение означает просрочку
    pub days_until_due: i64,
}

impl DueRoutine {
    pub fn is_overdue(&self) -> bool {
        self.days_until_due < 0
    }
}

/// Регламенты, у которых `next_date <= today + horizon_days`,
/// по возрастанию `next_date`.
///
/// Просроченные регламенты включаются и идут первыми. Регламент без
/// разобранной даты последнего выполнения в список не попадает.
/// Равные даты сохраняют исходный порядок.
pub fn compute_due_routines(
    routines: &[MaintenanceRoutine],
    assets: &[Asset],
    today: NaiveDate,
    horizon_days: u32,
) -> Vec<DueRoutine> {
    let cutoff = today
        .checked_add_days(Days::new(u64::from(horizon_days)))
        .unwrap_or(NaiveDate::MAX);

    let asset_names: HashMap<String, &str> = assets
        .iter()
        .map(|a| (a.base.id.as_string(), a.base.description.as_str()))
        .collect();

    let mut due: Vec<DueRoutine> = routines
        .iter()
        .filter_map(|routine| {
            let next_date = routine.next_date()?;
            if next_date > cutoff {
                return None;
            }
            let asset_name = asset_names
                .get(&routine.asset_id)
                .map(|s| s.to_string())
                .unwrap_or_else(|| routine.asset_id.clone());
            Some(DueRoutine {
                routine: routine.clone(),
                asset_name,
                next_date,
                days_until_due: (next_date - today).num_days(),
            })
        })
        .collect();

    due.sort_by_key(|d| d.next_date);
    due
}

/// Один новый заказ на каждый выбранный регламент:
/// Preventive, Planned, плановая дата = `next_date`.
pub fn generate_orders(selected: &[DueRoutine]) -> Vec<MaintenanceOrderDto> {
    selected
        .iter()
        .map(|due| MaintenanceOrderDto {
            id: None,
            number: None,
            description: due.routine.name().to_string(),
            asset_id: due.routine.asset_id.clone(),
            order_type: OrderType::Preventive,
            status: OrderStatus::Planned,
            priority: Priority::Medium,
            planned_date: to_iso(due.next_date),
            assigned_to: String::new(),
            estimated_hours: due.routine.estimated_hours,
            work_notes: String::new(),
            routine_id: Some(due.routine.to_string_id()),
            related_order_id: None,
            checklist_execution_id: None,
            comment: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn asset(name: &str) -> Asset {
        Asset::new_for_insert(format!("A-{}", name), name.to_string())
    }

    fn routine(asset: &Asset, name: &str, last: Option<NaiveDate>, freq: u32) -> MaintenanceRoutine {
        let mut r = MaintenanceRoutine::new_for_insert(
            format!("R-{}", name),
            name.to_string(),
            asset.to_string_id(),
            freq,
        );
        r.last_execution_date = last;
        r.estimated_hours = 2.5;
        r
    }

    #[test]
    fn test_reference_example_within_horizon() {
        let a = asset("Компрессор");
        let r = routine(&a, "Замена фильтра", Some(date(2024, 1, 1)), 30);
        let due = compute_due_routines(&[r], &[a], date(2024, 1, 15), 30);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].next_date, date(2024, 1, 31));
        assert_eq!(due[0].asset_name, "Компрессор");
        assert_eq!(due[0].days_until_due, 16);
    }

    #[test]
    fn test_reference_example_outside_short_horizon() {
        // cutoff = 2024-01-25, next_date = 2024-01-31 > cutoff
        let a = asset("Компрессор");
        let r = routine(&a, "Замена фильтра", Some(date(2024, 1, 1)), 30);
        let due = compute_due_routines(&[r], &[a], date(2024, 1, 15), 10);
        assert!(due.is_empty());
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let a = asset("Насос");
        // next_date = 2024-01-25 = today + 10
        let r = routine(&a, "Осмотр", Some(date(2024, 1, 15)), 10);
        let due = compute_due_routines(&[r], &[a], date(2024, 1, 15), 10);
        assert_eq!(due.len(), 1);
    }

    #[test]
    fn test_zero_horizon_drops_future_keeps_overdue_and_today() {
        let a = asset("Пресс");
        let today = date(2024, 3, 10);
        let routines = vec![
            routine(&a, "future", Some(date(2024, 3, 1)), 20),   // 2024-03-21
            routine(&a, "overdue", Some(date(2024, 1, 1)), 30),  // 2024-01-31
            routine(&a, "today", Some(date(2024, 3, 3)), 7),     // 2024-03-10
        ];
        let wide = compute_due_routines(&routines, &[a.clone()], today, 30);
        assert_eq!(wide.len(), 3);
        let zero = compute_due_routines(&routines, &[a], today, 0);
        let names: Vec<&str> = zero.iter().map(|d| d.routine.name()).collect();
        assert_eq!(names, vec!["overdue", "today"]);
        assert!(zero[0].is_overdue());
        assert!(zero.iter().all(|d| d.next_date <= today));
    }

    #[test]
    fn test_sorted_non_decreasing_and_next_date_exact() {
        let a = asset("Линия");
        let today = date(2024, 6, 1);
        let routines = vec![
            routine(&a, "r1", Some(date(2024, 5, 20)), 30),
            routine(&a, "r2", Some(date(2024, 4, 1)), 14),
            routine(&a, "r3", Some(date(2024, 5, 31)), 1),
            routine(&a, "r4", Some(date(2024, 5, 1)), 45),
        ];
        let due = compute_due_routines(&routines, &[a], today, 60);
        assert_eq!(due.len(), 4);
        for pair in due.windows(2) {
            assert!(pair[0].next_date <= pair[1].next_date);
        }
        for d in &due {
            let expected = d.routine.last_execution_date.unwrap()
                + chrono::Duration::days(i64::from(d.routine.frequency_days));
            assert_eq!(d.next_date, expected);
        }
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let a = asset("Котёл");
        let routines = vec![
            routine(&a, "first", Some(date(2024, 1, 1)), 10),
            routine(&a, "second", Some(date(2024, 1, 6)), 5),
        ];
        let due = compute_due_routines(&routines, &[a], date(2024, 1, 1), 30);
        let names: Vec<&str> = due.iter().map(|d| d.routine.name()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_unknown_date_and_missing_asset() {
        let a = asset("Вентилятор");
        let orphan = {
            let mut r = routine(&a, "orphan", Some(date(2024, 1, 1)), 5);
            r.asset_id = "missing-asset".into();
            r
        };
        let no_date = routine(&a, "no-date", None, 5);
        let due = compute_due_routines(&[orphan, no_date], &[a], date(2024, 1, 1), 30);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].asset_name, "missing-asset");
    }

    #[test]
    fn test_generate_orders_one_per_selected() {
        let a = asset("Компрессор");
        let routines = vec![
            routine(&a, "r1", Some(date(2024, 1, 1)), 30),
            routine(&a, "r2", Some(date(2024, 1, 5)), 7),
        ];
        let due = compute_due_routines(&routines, &[a.clone()], date(2024, 1, 15), 30);
        let orders = generate_orders(&due);
        assert_eq!(orders.len(), due.len());
        for (order, d) in orders.iter().zip(due.iter()) {
            assert_eq!(order.status, OrderStatus::Planned);
            assert_eq!(order.order_type, OrderType::Preventive);
            assert_eq!(order.planned_date, to_iso(d.next_date));
            assert_eq!(order.routine_id, Some(d.routine.to_string_id()));
            assert_eq!(order.asset_id, a.to_string_id());
            assert_eq!(order.estimated_hours, 2.5);
        }
    }
}
