use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a004_warehouse::aggregate::{Warehouse, WarehouseDto};
use uuid::Uuid;

pub async fn create(dto: WarehouseDto) -> ServiceResult<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("WH-{}", Uuid::new_v4()));
    let mut aggregate =
        Warehouse::new_for_insert(code, dto.description.clone(), dto.location.clone());
    aggregate.update(&dto);

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(dto: WarehouseDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("warehouse {}", id)))?;

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    Ok(repository::update(&aggregate).await?)
}

pub async fn delete(id: Uuid) -> ServiceResult<bool> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<Option<Warehouse>> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn get_by_code(code: &str) -> ServiceResult<Option<Warehouse>> {
    Ok(repository::get_by_code(code).await?)
}

pub async fn list_all() -> ServiceResult<Vec<Warehouse>> {
    Ok(repository::list_all().await?)
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> ServiceResult<()> {
    let data = vec![
        WarehouseDto {
            code: Some("WH-01".into()),
            description: "Центральный склад ЗИП".into(),
            location: "Корпус 2, 1 этаж".into(),
            ..Default::default()
        },
        WarehouseDto {
            code: Some("WH-02".into()),
            description: "Кладовая смазочных материалов".into(),
            location: "Компрессорная".into(),
            comment: Some("Хранение ГСМ".into()),
            ..Default::default()
        },
    ];

    for dto in data {
        if let Some(code) = &dto.code {
            if repository::get_by_code(code).await?.is_some() {
                continue;
            }
        }
        create(dto).await?;
    }

    Ok(())
}
