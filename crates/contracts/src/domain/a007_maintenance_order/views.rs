//! Разбиение плоского списка заказов для канбана, календаря и истории.
//!
//! Чистые функции над срезом заказов, без побочных эффектов.

use super::aggregate::MaintenanceOrder;
use crate::enums::{OrderStatus, OrderType};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Фильтр списка заказов. Пустые поля не ограничивают выборку.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub order_type: Option<OrderType>,
    pub asset_id: Option<String>,
    /// Поиск по номеру и описанию без учёта регистра
    pub search: Option<String>,
    /// Диапазон по дате для календаря (включительно)
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl OrderFilter {
    pub fn matches(&self, order: &MaintenanceOrder) -> bool {
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }
        if let Some(order_type) = self.order_type {
            if order.order_type != order_type {
                return false;
            }
        }
        if let Some(asset_id) = self.asset_id.as_deref().filter(|s| !s.is_empty()) {
            if order.asset_id != asset_id {
                return false;
            }
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            let hit = order.base.code.to_lowercase().contains(&needle)
                || order.base.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        let date = order.effective_date();
        if self.date_from.is_some_and(|from| date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| date > to) {
            return false;
        }
        true
    }
}

/// Колонка канбана
#[derive(Debug, Clone, PartialEq)]
pub struct StatusColumn {
    pub status: OrderStatus,
    pub orders: Vec<MaintenanceOrder>,
}

pub fn filter_orders(orders: &[MaintenanceOrder], filter: &OrderFilter) -> Vec<MaintenanceOrder> {
    orders.iter().filter(|o| filter.matches(o)).cloned().collect()
}

/// Четыре колонки в порядке прогрессии; пустые колонки тоже возвращаются
pub fn group_by_status(orders: &[MaintenanceOrder]) -> Vec<StatusColumn> {
    OrderStatus::all()
        .into_iter()
        .map(|status| StatusColumn {
            status,
            orders: orders.iter().filter(|o| o.status == status).cloned().collect(),
        })
        .collect()
}

/// Ячейки календаря за месяц, в котором лежит `month`.
/// Ключ: дата дня; дни без заказов в карту не попадают.
pub fn group_by_day(
    orders: &[MaintenanceOrder],
    month: NaiveDate,
) -> BTreeMap<NaiveDate, Vec<MaintenanceOrder>> {
    let mut cells: BTreeMap<NaiveDate, Vec<MaintenanceOrder>> = BTreeMap::new();
    for order in orders {
        let date = order.effective_date();
        if date.year() == month.year() && date.month() == month.month() {
            cells.entry(date).or_default().push(order.clone());
        }
    }
    cells
}

/// История обслуживания актива: закрытые заказы, последние сверху
pub fn asset_history(orders: &[MaintenanceOrder], asset_id: &str) -> Vec<MaintenanceOrder> {
    let mut items: Vec<MaintenanceOrder> = orders
        .iter()
        .filter(|o| o.asset_id == asset_id && o.status == OrderStatus::Closed)
        .cloned()
        .collect();
    items.sort_by(|a, b| b.closed_date.cmp(&a.closed_date));
    items
}

/// Счётчики по статусам в порядке прогрессии
pub fn count_by_status(orders: &[MaintenanceOrder]) -> Vec<(OrderStatus, usize)> {
    OrderStatus::all()
        .into_iter()
        .map(|status| (status, orders.iter().filter(|o| o.status == status).count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order(
        number: &str,
        asset: &str,
        order_type: OrderType,
        status: OrderStatus,
        planned: Option<NaiveDate>,
    ) -> MaintenanceOrder {
        let mut o = MaintenanceOrder::new_for_insert(
            number.into(),
            format!("Работы по {}", number),
            asset.into(),
            order_type,
            date(2024, 1, 2),
        );
        o.status = status;
        o.planned_date = planned;
        o
    }

    fn sample() -> Vec<MaintenanceOrder> {
        vec![
            order("OT-1", "a1", OrderType::Preventive, OrderStatus::Planned, Some(date(2024, 1, 15))),
            order("OT-2", "a1", OrderType::Corrective, OrderStatus::Pending, None),
            order("OT-3", "a2", OrderType::Preventive, OrderStatus::InProgress, Some(date(2024, 2, 3))),
            order("OT-4", "a2", OrderType::Corrective, OrderStatus::Pending, Some(date(2024, 1, 15))),
        ]
    }

    #[test]
    fn test_group_by_status_has_four_columns() {
        let columns = group_by_status(&sample());
        let statuses: Vec<OrderStatus> = columns.iter().map(|c| c.status).collect();
        assert_eq!(statuses, OrderStatus::all());
        assert_eq!(columns[0].orders.len(), 2);
        assert_eq!(columns[1].orders.len(), 1);
        assert_eq!(columns[2].orders.len(), 1);
        assert!(columns[3].orders.is_empty());
    }

    #[test]
    fn test_filter_combines_criteria() {
        let orders = sample();
        let filter = OrderFilter {
            status: Some(OrderStatus::Pending),
            asset_id: Some("a2".into()),
            ..Default::default()
        };
        let found = filter_orders(&orders, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].base.code, "OT-4");

        let by_type = OrderFilter {
            order_type: Some(OrderType::Preventive),
            ..Default::default()
        };
        assert_eq!(filter_orders(&orders, &by_type).len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = OrderFilter {
            search: Some("ot-3".into()),
            ..Default::default()
        };
        assert_eq!(filter_orders(&sample(), &filter).len(), 1);
        let blank = OrderFilter {
            search: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(filter_orders(&sample(), &blank).len(), 4);
    }

    #[test]
    fn test_date_range_uses_effective_date() {
        let filter = OrderFilter {
            date_from: Some(date(2024, 1, 1)),
            date_to: Some(date(2024, 1, 31)),
            ..Default::default()
        };
        // OT-2 без плановой даты попадает по дате создания
        let numbers: Vec<String> = filter_orders(&sample(), &filter)
            .into_iter()
            .map(|o| o.base.code)
            .collect();
        assert_eq!(numbers, vec!["OT-1", "OT-2", "OT-4"]);
    }

    #[test]
    fn test_group_by_day_for_month() {
        let cells = group_by_day(&sample(), date(2024, 1, 20));
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[&date(2024, 1, 15)].len(), 2);
        assert_eq!(cells[&date(2024, 1, 2)].len(), 1);
        assert!(!cells.contains_key(&date(2024, 2, 3)));
    }

    #[test]
    fn test_asset_history_most_recent_first() {
        let mut orders = sample();
        orders[0].status = OrderStatus::Closed;
        orders[0].closed_date = Some(date(2024, 1, 16));
        orders[1].status = OrderStatus::Closed;
        orders[1].closed_date = Some(date(2024, 3, 1));
        let history = asset_history(&orders, "a1");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].base.code, "OT-2");
        assert!(asset_history(&orders, "a2").is_empty());
    }

    #[test]
    fn test_count_by_status() {
        let counts = count_by_status(&sample());
        assert_eq!(
            counts,
            vec![
                (OrderStatus::Pending, 2),
                (OrderStatus::Planned, 1),
                (OrderStatus::InProgress, 1),
                (OrderStatus::Closed, 0),
            ]
        );
    }
}
