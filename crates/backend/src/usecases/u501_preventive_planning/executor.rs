use crate::domain::{a001_asset, a006_maintenance_routine, a007_maintenance_order};
use crate::shared::error::ServiceResult;
use crate::system::settings;
use contracts::domain::a007_maintenance_order::{MaintenanceOrder, MaintenanceOrderDto};
use contracts::domain::common::AggregateId;
use contracts::usecases::u501_preventive_planning::{
    compute_due_routines, generate_orders, DueRoutine, GenerateOrdersRequest,
    GenerateOrdersResponse,
};
use std::collections::HashSet;
use std::future::Future;

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

/// Регламенты к выполнению на горизонте (по умолчанию из настроек)
pub async fn due_routines(horizon: Option<u32>) -> ServiceResult<Vec<DueRoutine>> {
    let horizon = match horizon {
        Some(days) => days,
        None => settings::service::get().await?.default_horizon_days,
    };
    let routines = a006_maintenance_routine::service::list_all().await?;
    let assets = a001_asset::service::list_all().await?;
    Ok(compute_due_routines(&routines, &assets, today(), horizon))
}

/// Выбрать из списка к выполнению регламенты с указанными ID.
///
/// Возвращает выбранные (в порядке списка) и число ID, которых в списке нет.
pub fn select_due(due: Vec<DueRoutine>, routine_ids: &[String]) -> (Vec<DueRoutine>, usize) {
    let wanted: HashSet<&str> = routine_ids.iter().map(String::as_str).collect();
    let selected: Vec<DueRoutine> = due
        .into_iter()
        .filter(|d| wanted.contains(d.routine.base.id.as_string().as_str()))
        .collect();
    let skipped = wanted.len() - selected.len();
    (selected, skipped)
}

/// Убрать регламенты, по которым уже есть незакрытый заказ.
///
/// Регламент остаётся в списке к выполнению до закрытия своего заказа,
/// повторная генерация не должна создавать второй заказ.
pub fn drop_already_ordered(
    selected: Vec<DueRoutine>,
    orders: &[MaintenanceOrder],
) -> (Vec<DueRoutine>, usize) {
    let open: HashSet<&str> = orders
        .iter()
        .filter(|o| !o.base.metadata.is_deleted && !o.status.is_terminal())
        .filter_map(|o| o.routine_id.as_deref())
        .collect();
    let before = selected.len();
    let remaining: Vec<DueRoutine> = selected
        .into_iter()
        .filter(|d| !open.contains(d.routine.to_string_id().as_str()))
        .collect();
    let dropped = before - remaining.len();
    (remaining, dropped)
}

/// Записать заказы по одному; ошибка записи считается и не
/// останавливает остальные.
pub async fn persist_orders<F, Fut>(
    orders: Vec<MaintenanceOrderDto>,
    skipped: usize,
    mut create: F,
) -> GenerateOrdersResponse
where
    F: FnMut(MaintenanceOrderDto) -> Fut,
    Fut: Future<Output = Result<String, String>>,
{
    let mut response = GenerateOrdersResponse {
        skipped,
        ..Default::default()
    };
    for dto in orders {
        let label = dto.description.clone();
        match create(dto).await {
            Ok(id) => response.created_order_ids.push(id),
            Err(e) => {
                tracing::error!("Failed to generate order for '{}': {}", label, e);
                response.failed += 1;
                response.errors.push(format!("{}: {}", label, e));
            }
        }
    }
    response
}

/// Сформировать заказы по выбранным регламентам.
///
/// Регламенты вне горизонта и регламенты с открытым заказом попадают в
/// счётчик `skipped`.
pub async fn generate(request: GenerateOrdersRequest) -> ServiceResult<GenerateOrdersResponse> {
    let due = due_routines(Some(request.horizon_days)).await?;
    let (selected, not_due) = select_due(due, &request.routine_ids);
    let existing = a007_maintenance_order::service::list_all().await?;
    let (selected, already_ordered) = drop_already_ordered(selected, &existing);

    let response = persist_orders(
        generate_orders(&selected),
        not_due + already_ordered,
        |dto| async move {
            a007_maintenance_order::service::create(dto)
                .await
                .map(|id| id.to_string())
                .map_err(|e| e.to_string())
        },
    )
    .await;

    tracing::info!(
        "Preventive planning: {} created, {} skipped, {} failed",
        response.created_order_ids.len(),
        response.skipped,
        response.failed
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a006_maintenance_routine::aggregate::MaintenanceRoutine;
    use contracts::enums::{OrderStatus, OrderType};

    fn due(code: &str) -> DueRoutine {
        let mut routine =
            MaintenanceRoutine::new_for_insert(code.into(), code.into(), "asset".into(), 30);
        routine.last_execution_date = NaiveDate::from_ymd_opt(2024, 1, 1);
        DueRoutine {
            routine,
            asset_name: "asset".into(),
            next_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            days_until_due: 16,
        }
    }

    #[test]
    fn test_select_due_keeps_order_and_counts_missing() {
        let list = vec![due("A"), due("B"), due("C")];
        let ids = vec![
            list[2].routine.to_string_id(),
            list[0].routine.to_string_id(),
            "not-due".to_string(),
        ];
        let (selected, skipped) = select_due(list, &ids);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].routine.base.code, "A");
        assert_eq!(selected[1].routine.base.code, "C");
        assert_eq!(skipped, 1);
    }

    #[test]
    fn test_select_due_duplicate_ids_counted_once() {
        let list = vec![due("A")];
        let id = list[0].routine.to_string_id();
        let (selected, skipped) = select_due(list, &[id.clone(), id]);
        assert_eq!(selected.len(), 1);
        assert_eq!(skipped, 0);
    }

    fn order_for(due: &DueRoutine, status: OrderStatus) -> MaintenanceOrder {
        let mut order = MaintenanceOrder::new_for_insert(
            "OT-000001".into(),
            due.routine.name().to_string(),
            due.routine.asset_id.clone(),
            OrderType::Preventive,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        );
        order.status = status;
        order.routine_id = Some(due.routine.to_string_id());
        order
    }

    #[test]
    fn test_open_order_blocks_second_generation() {
        let list = vec![due("A"), due("B"), due("C")];
        let orders = vec![
            order_for(&list[0], OrderStatus::Planned),
            order_for(&list[1], OrderStatus::Closed),
        ];
        let (remaining, dropped) = drop_already_ordered(list, &orders);
        assert_eq!(dropped, 1);
        let codes: Vec<&str> = remaining.iter().map(|d| d.routine.base.code.as_str()).collect();
        assert_eq!(codes, vec!["B", "C"]);
    }

    #[test]
    fn test_deleted_open_order_does_not_block() {
        let list = vec![due("A")];
        let mut order = order_for(&list[0], OrderStatus::Pending);
        order.base.metadata.is_deleted = true;
        let (remaining, dropped) = drop_already_ordered(list, &[order]);
        assert_eq!(remaining.len(), 1);
        assert_eq!(dropped, 0);
    }

    #[tokio::test]
    async fn test_persist_orders_counts_failures_and_continues() {
        let dtos = generate_orders(&[due("A"), due("B"), due("C")]);
        let mut attempted = Vec::new();
        let response = persist_orders(dtos, 2, |dto| {
            attempted.push(dto.description.clone());
            async move {
                if dto.description == "B" {
                    Err("disk full".to_string())
                } else {
                    Ok(format!("id-{}", dto.description))
                }
            }
        })
        .await;

        assert_eq!(attempted, vec!["A", "B", "C"]);
        assert_eq!(response.created_order_ids, vec!["id-A", "id-C"]);
        assert_eq!(response.failed, 1);
        assert_eq!(response.skipped, 2);
        assert_eq!(response.errors, vec!["B: disk full".to_string()]);
    }
}
