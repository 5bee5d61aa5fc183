use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a002_material::aggregate::{Material, MaterialDto, StockCheck};
use uuid::Uuid;

/// Создание нового материала
pub async fn create(dto: MaterialDto) -> ServiceResult<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("MAT-{}", Uuid::new_v4()));
    let mut aggregate = Material::new_for_insert(code, dto.description.clone(), dto.unit.clone());
    aggregate.update(&dto);

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

/// Обновление существующего материала
pub async fn update(dto: MaterialDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("material {}", id)))?;

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    Ok(repository::update(&aggregate).await?)
}

pub async fn delete(id: Uuid) -> ServiceResult<bool> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<Option<Material>> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn get_by_code(code: &str) -> ServiceResult<Option<Material>> {
    Ok(repository::get_by_code(code).await?)
}

pub async fn list_all() -> ServiceResult<Vec<Material>> {
    Ok(repository::list_all().await?)
}

/// Списание материала со склада
pub async fn consume(id: Uuid, quantity: f64) -> ServiceResult<()> {
    let mut material = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("material {}", id)))?;
    material.consume(quantity).map_err(ServiceError::Validation)?;
    material.before_write();
    material.base.metadata.increment_version();
    Ok(repository::update(&material).await?)
}

/// Проверка остатка после списания. Отдельное чтение, не атомарно со списанием.
pub async fn stock_check(id: Uuid) -> ServiceResult<StockCheck> {
    let material = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("material {}", id)))?;
    Ok(material.stock_check())
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> ServiceResult<()> {
    let data = vec![
        MaterialDto {
            code: Some("MAT-0101".into()),
            description: "Подшипник 6205-2RS".into(),
            unit: "шт".into(),
            stock_quantity: 12.0,
            min_stock: 4.0,
            unit_cost: 480.0,
            ..Default::default()
        },
        MaterialDto {
            code: Some("MAT-0102".into()),
            description: "Масло компрессорное VDL 100".into(),
            unit: "л".into(),
            stock_quantity: 8.0,
            min_stock: 20.0,
            unit_cost: 390.5,
            comment: Some("Закупать канистрами по 20 л".into()),
            ..Default::default()
        },
        MaterialDto {
            code: Some("MAT-0103".into()),
            description: "Ремень приводной SPZ 1250".into(),
            unit: "шт".into(),
            stock_quantity: 3.0,
            min_stock: 2.0,
            unit_cost: 1150.0,
            ..Default::default()
        },
        MaterialDto {
            code: Some("MAT-0104".into()),
            description: "Смазка литиевая Литол-24".into(),
            unit: "кг".into(),
            stock_quantity: 5.5,
            min_stock: 2.0,
            unit_cost: 320.0,
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
