use super::repository;
use crate::domain::{a001_asset, a002_material, a006_maintenance_routine};
use crate::shared::error::{ServiceError, ServiceResult};
use crate::system::settings;
use chrono::NaiveDate;
use contracts::domain::a002_material::aggregate::StockCheck;
use contracts::domain::a007_maintenance_order::aggregate::{
    AddMaterialRequest, MaintenanceOrder, MaintenanceOrderDto, OrderMaterialLine,
};
use contracts::enums::OrderStatus;
use contracts::shared::report::{order_report, DocumentReport};
use uuid::Uuid;

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Следующий порядковый номер: максимум среди номеров с тем же префиксом + 1.
/// Номера с другим префиксом или без числовой части не учитываются.
pub fn next_sequence(numbers: &[String], prefix: &str) -> u64 {
    let head = format!("{}-", prefix.trim());
    numbers
        .iter()
        .filter_map(|n| n.strip_prefix(&head))
        .filter_map(|tail| tail.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
        + 1
}

async fn next_number() -> ServiceResult<String> {
    let app_settings = settings::service::get().await?;
    let numbers = repository::list_numbers().await?;
    let seq = next_sequence(&numbers, &app_settings.order_number_prefix);
    Ok(app_settings.format_order_number(seq))
}

/// Создание заказа. Номер присваивается из настроек, статус из DTO
/// применяется как переход из Pending.
pub async fn create(dto: MaintenanceOrderDto) -> ServiceResult<Uuid> {
    let number = next_number().await?;
    let today = today();
    let mut aggregate = MaintenanceOrder::new_for_insert(
        number,
        dto.description.clone(),
        dto.asset_id.clone(),
        dto.order_type,
        today,
    );
    aggregate.update(&dto);

    if dto.status != OrderStatus::Pending {
        apply_transition(&mut aggregate, dto.status, today)?;
    }

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    tracing::info!(
        "Order {} created ({}, {})",
        aggregate.number(),
        aggregate.order_type.code(),
        aggregate.status.code()
    );

    after_transition(&aggregate).await?;
    Ok(id)
}

/// Обновление заказа из формы. Смена статуса через форму подчиняется
/// тем же правилам, что и `change_status`.
pub async fn update(dto: MaintenanceOrderDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = load(id).await?;
    if aggregate.status.is_terminal() {
        return Err(ServiceError::Validation("Закрытый заказ не редактируется".into()));
    }

    aggregate.update(&dto);
    let status_changed = dto.status != aggregate.status;
    if status_changed {
        apply_transition(&mut aggregate, dto.status, today())?;
    }

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();
    repository::update(&aggregate).await?;

    if status_changed {
        after_transition(&aggregate).await?;
    }
    Ok(())
}

/// Перевод заказа в новый статус (канбан, кнопки на форме)
pub async fn change_status(id: Uuid, target: OrderStatus) -> ServiceResult<MaintenanceOrder> {
    let mut aggregate = load(id).await?;
    apply_transition(&mut aggregate, target, today())?;

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();
    repository::update(&aggregate).await?;

    tracing::info!("Order {} -> {}", aggregate.number(), target.code());
    after_transition(&aggregate).await?;
    Ok(aggregate)
}

fn apply_transition(
    aggregate: &mut MaintenanceOrder,
    target: OrderStatus,
    today: NaiveDate,
) -> ServiceResult<()> {
    aggregate
        .transition_to(target, today)
        .map_err(ServiceError::Validation)?;
    // Карточка канбана, перенесённая в "Запланирован" без даты, планируется на сегодня
    if target == OrderStatus::Planned && aggregate.planned_date.is_none() {
        aggregate.planned_date = Some(today);
    }
    Ok(())
}

/// Закрытие заказа по регламенту переносит дату закрытия в регламент.
/// Это отдельная запись: если она не удалась, заказ остаётся закрытым,
/// а ошибка возвращается вызывающему.
async fn after_transition(aggregate: &MaintenanceOrder) -> ServiceResult<()> {
    if aggregate.status != OrderStatus::Closed {
        return Ok(());
    }
    if let (Some(routine_id), Some(closed)) = (&aggregate.routine_id, aggregate.closed_date) {
        a006_maintenance_routine::service::stamp_execution(routine_id, closed).await?;
    }
    Ok(())
}

/// Добавить материал в заказ и списать его со склада.
///
/// Возвращает остаток после списания и признак необходимости закупки.
pub async fn add_material(id: Uuid, request: AddMaterialRequest) -> ServiceResult<StockCheck> {
    let mut order = load(id).await?;

    let material_id = Uuid::parse_str(&request.material_id).map_err(|_| {
        ServiceError::Validation(format!("Invalid material ID: {}", request.material_id))
    })?;
    let material = a002_material::service::get_by_id(material_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("material {}", material_id)))?;
    // Строка не добавляется, если остатка не хватает
    material
        .check_available(request.quantity)
        .map_err(ServiceError::Validation)?;

    order
        .add_material_line(OrderMaterialLine {
            material_id: material.to_string_id(),
            material_code: material.base.code.clone(),
            description: material.base.description.clone(),
            quantity: request.quantity,
            unit_cost: material.unit_cost,
        })
        .map_err(ServiceError::Validation)?;
    order.before_write();
    order.base.metadata.increment_version();
    repository::update(&order).await?;

    a002_material::service::consume(material_id, request.quantity).await?;
    let check = a002_material::service::stock_check(material_id).await?;
    if check.replenishment_needed {
        tracing::warn!(
            "Material {} below minimum: {} < {}",
            material.base.code,
            check.stock_quantity,
            check.min_stock
        );
    }
    Ok(check)
}

async fn load(id: Uuid) -> ServiceResult<MaintenanceOrder> {
    repository::get_by_id(id)
        .await?
        .filter(|o| !o.base.metadata.is_deleted)
        .ok_or_else(|| ServiceError::not_found(format!("maintenance_order {}", id)))
}

pub async fn delete(id: Uuid) -> ServiceResult<bool> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<Option<MaintenanceOrder>> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn list_all() -> ServiceResult<Vec<MaintenanceOrder>> {
    Ok(repository::list_all().await?)
}

/// Печатная форма заказа-наряда
pub async fn build_report(id: Uuid) -> ServiceResult<DocumentReport> {
    let order = load(id).await?;
    let asset_name = a001_asset::service::display_name(&order.asset_id).await?;
    let app_settings = settings::service::get().await?;
    Ok(order_report(&order, &asset_name, &app_settings.company_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_next_sequence_empty() {
        assert_eq!(next_sequence(&[], "OT"), 1);
    }

    #[test]
    fn test_next_sequence_takes_max() {
        let existing = numbers(&["OT-000001", "OT-000007", "OT-000003"]);
        assert_eq!(next_sequence(&existing, "OT"), 8);
    }

    #[test]
    fn test_next_sequence_ignores_other_prefixes() {
        let existing = numbers(&["WO-000050", "OT-000002", "OT-draft", "OTX-000099"]);
        assert_eq!(next_sequence(&existing, "OT"), 3);
        assert_eq!(next_sequence(&existing, "WO"), 51);
    }
}
