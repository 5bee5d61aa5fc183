use super::repository;
use crate::domain::{a001_asset, a006_maintenance_routine, a007_maintenance_order};
use crate::shared::error::{ServiceError, ServiceResult};
use crate::system::settings;
use contracts::domain::a007_maintenance_order::aggregate::MaintenanceOrderDto;
use contracts::domain::a008_checklist_execution::aggregate::{
    CheckResult, ChecklistExecution, ChecklistExecutionDto,
};
use contracts::enums::{OrderStatus, OrderType, Priority};
use contracts::shared::report::{checklist_report, DocumentReport};
use uuid::Uuid;

pub async fn create(dto: ChecklistExecutionDto) -> ServiceResult<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("CL-{}", Uuid::new_v4()));
    let mut aggregate =
        ChecklistExecution::new_for_insert(code, dto.description.clone(), dto.asset_id.clone());
    aggregate.update(&dto);

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(dto: ChecklistExecutionDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = load(id).await?;
    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    Ok(repository::update(&aggregate).await?)
}

/// Начать осмотр по чек-листу регламента; все пункты в статусе "не проверено"
pub async fn start_from_routine(routine_id: Uuid) -> ServiceResult<Uuid> {
    let routine = a006_maintenance_routine::service::get_by_id(routine_id)
        .await?
        .filter(|r| !r.base.metadata.is_deleted)
        .ok_or_else(|| ServiceError::not_found(format!("maintenance_routine {}", routine_id)))?;

    let today = chrono::Local::now().date_naive();
    let code = format!("{}-{}", routine.base.code, today.format("%Y%m%d"));
    let mut aggregate = ChecklistExecution::from_routine(code, &routine, today);

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    Ok(repository::insert(&aggregate).await?)
}

/// Открыть аварийный заказ по дефектам осмотра.
///
/// Заказ создаётся один раз; повторный вызов возвращает уже созданный.
pub async fn create_corrective_order(id: Uuid) -> ServiceResult<String> {
    let mut execution = load(id).await?;

    if let Some(existing) = &execution.corrective_order_id {
        return Ok(existing.clone());
    }
    if execution.overall_result() != CheckResult::Fail {
        return Err(ServiceError::Validation(
            "В осмотре нет пунктов с дефектами".into(),
        ));
    }

    let dto = MaintenanceOrderDto {
        description: execution.corrective_description(),
        asset_id: execution.asset_id.clone(),
        order_type: OrderType::Corrective,
        status: OrderStatus::Pending,
        priority: Priority::High,
        checklist_execution_id: Some(execution.to_string_id()),
        ..Default::default()
    };
    let order_id = a007_maintenance_order::service::create(dto).await?.to_string();

    execution.corrective_order_id = Some(order_id.clone());
    execution.before_write();
    execution.base.metadata.increment_version();
    repository::update(&execution).await?;

    tracing::info!(
        "Corrective order {} created from inspection {}",
        order_id,
        execution.base.code
    );
    Ok(order_id)
}

async fn load(id: Uuid) -> ServiceResult<ChecklistExecution> {
    repository::get_by_id(id)
        .await?
        .filter(|e| !e.base.metadata.is_deleted)
        .ok_or_else(|| ServiceError::not_found(format!("checklist_execution {}", id)))
}

pub async fn delete(id: Uuid) -> ServiceResult<bool> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<Option<ChecklistExecution>> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn list_all() -> ServiceResult<Vec<ChecklistExecution>> {
    Ok(repository::list_all().await?)
}

/// Печатная форма акта осмотра
pub async fn build_report(id: Uuid) -> ServiceResult<DocumentReport> {
    let execution = load(id).await?;
    let asset_name = a001_asset::service::display_name(&execution.asset_id).await?;
    let app_settings = settings::service::get().await?;
    Ok(checklist_report(
        &execution,
        &asset_name,
        &app_settings.company_name,
    ))
}
