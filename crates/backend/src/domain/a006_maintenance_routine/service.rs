use super::repository;
use crate::domain::a001_asset;
use crate::shared::error::{ServiceError, ServiceResult};
use chrono::{Days, NaiveDate};
use contracts::domain::a006_maintenance_routine::aggregate::{
    Discipline, MaintenanceRoutine, MaintenanceRoutineDto,
};
use contracts::shared::date::to_iso;
use uuid::Uuid;

/// Создание нового регламента ТО
pub async fn create(dto: MaintenanceRoutineDto) -> ServiceResult<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("RT-{}", Uuid::new_v4()));
    let mut aggregate = MaintenanceRoutine::new_for_insert(
        code,
        dto.name.clone(),
        dto.asset_id.clone(),
        dto.frequency_days,
    );
    aggregate.update(&dto);

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

/// Обновление существующего регламента
pub async fn update(dto: MaintenanceRoutineDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("maintenance_routine {}", id)))?;

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    Ok(repository::update(&aggregate).await?)
}

pub async fn delete(id: Uuid) -> ServiceResult<bool> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<Option<MaintenanceRoutine>> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn get_by_code(code: &str) -> ServiceResult<Option<MaintenanceRoutine>> {
    Ok(repository::get_by_code(code).await?)
}

pub async fn list_all() -> ServiceResult<Vec<MaintenanceRoutine>> {
    Ok(repository::list_all().await?)
}

/// Отметить выполнение регламента датой закрытия заказа
pub async fn stamp_execution(routine_id: &str, date: NaiveDate) -> ServiceResult<()> {
    let id = Uuid::parse_str(routine_id)
        .map_err(|_| ServiceError::Validation(format!("Invalid routine ID: {}", routine_id)))?;
    let mut routine = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("maintenance_routine {}", id)))?;

    routine.stamp_execution(date);
    routine.before_write();
    routine.base.metadata.increment_version();

    tracing::info!(
        "Routine {} stamped with last execution {}",
        routine.base.code,
        to_iso(date)
    );
    Ok(repository::update(&routine).await?)
}

/// Вставка тестовых данных.
///
/// Регламенты привязываются к тестовым активам, поэтому сначала
/// заводятся активы.
pub async fn insert_test_data() -> ServiceResult<()> {
    a001_asset::service::insert_test_data().await?;

    let today = chrono::Local::now().date_naive();
    let days_ago = |n: u64| {
        today
            .checked_sub_days(Days::new(n))
            .map(to_iso)
            .unwrap_or_default()
    };

    let seeds = vec![
        (
            "RT-001",
            "Замена подшипников насоса",
            "AST-001",
            90,
            days_ago(80),
            3.0,
            Discipline::Mechanical,
            vec!["Вибрация в норме", "Нет течи по уплотнениям", "Температура корпуса"],
        ),
        (
            "RT-002",
            "Смена масла компрессора",
            "AST-002",
            30,
            days_ago(35),
            1.5,
            Discipline::Lubrication,
            vec!["Уровень масла", "Состояние фильтра", "Отсутствие подтёков"],
        ),
        (
            "RT-003",
            "Проверка электродвигателя конвейера",
            "AST-003",
            180,
            days_ago(20),
            2.0,
            Discipline::Electrical,
            vec!["Сопротивление изоляции", "Затяжка клемм"],
        ),
        (
            "RT-004",
            "Осмотр насоса (еженедельный)",
            "AST-001",
            7,
            days_ago(5),
            0.5,
            Discipline::Mechanical,
            vec!["Шум и вибрация", "Показания манометра"],
        ),
    ];

    for (code, name, asset_code, frequency_days, last, hours, discipline, items) in seeds {
        if repository::get_by_code(code).await?.is_some() {
            continue;
        }
        let asset_id = a001_asset::service::get_by_code(asset_code)
            .await?
            .map(|a| a.to_string_id())
            .unwrap_or_default();
        let dto = MaintenanceRoutineDto {
            id: None,
            code: Some(code.into()),
            name: name.into(),
            asset_id,
            frequency_days,
            last_execution_date: last,
            estimated_hours: hours,
            discipline,
            checklist_items: items.into_iter().map(String::from).collect(),
            comment: None,
        };
        create(dto).await?;
    }

    Ok(())
}
