use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a001_asset::aggregate::{Asset, AssetDto, AssetStatus, Criticality};
use uuid::Uuid;

/// Создание нового актива
pub async fn create(dto: AssetDto) -> ServiceResult<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("AST-{}", Uuid::new_v4()));
    let mut aggregate = Asset::new_for_insert(code, dto.description.clone());
    aggregate.update(&dto);

    // Валидация
    aggregate.validate().map_err(ServiceError::Validation)?;

    // Before write
    aggregate.before_write();

    // Сохранение через repository
    Ok(repository::insert(&aggregate).await?)
}

/// Обновление существующего актива
pub async fn update(dto: AssetDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("asset {}", id)))?;

    aggregate.update(&dto);

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    Ok(repository::update(&aggregate).await?)
}

/// Мягкое удаление актива
pub async fn delete(id: Uuid) -> ServiceResult<bool> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<Option<Asset>> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn get_by_code(code: &str) -> ServiceResult<Option<Asset>> {
    Ok(repository::get_by_code(code).await?)
}

pub async fn list_all() -> ServiceResult<Vec<Asset>> {
    Ok(repository::list_all().await?)
}

/// Наименование актива по строковому ID; если актив не найден, возвращается сам ID
pub async fn display_name(asset_id: &str) -> ServiceResult<String> {
    let asset = match Uuid::parse_str(asset_id) {
        Ok(id) => repository::get_by_id(id).await?,
        Err(_) => None,
    };
    Ok(asset
        .map(|a| a.base.description)
        .unwrap_or_else(|| asset_id.to_string()))
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> ServiceResult<()> {
    let data = vec![
        AssetDto {
            code: Some("AST-001".into()),
            description: "Насос циркуляционный P-101".into(),
            location: "Котельная, линия 1".into(),
            category: "Насосы".into(),
            manufacturer: "Grundfos".into(),
            model: "TP 65-410".into(),
            serial_number: "GF-2019-44871".into(),
            criticality: Criticality::High,
            status: AssetStatus::Operational,
            ..Default::default()
        },
        AssetDto {
            code: Some("AST-002".into()),
            description: "Компрессор воздушный K-2".into(),
            location: "Компрессорная".into(),
            category: "Компрессоры".into(),
            manufacturer: "Atlas Copco".into(),
            model: "GA 37".into(),
            serial_number: "AC-GA37-10552".into(),
            criticality: Criticality::Medium,
            status: AssetStatus::Operational,
            ..Default::default()
        },
        AssetDto {
            code: Some("AST-003".into()),
            description: "Конвейер ленточный КЛ-800".into(),
            location: "Цех упаковки".into(),
            category: "Конвейеры".into(),
            manufacturer: "Транспрогресс".into(),
            model: "КЛ-800".into(),
            serial_number: "TP-800-0031".into(),
            criticality: Criticality::Low,
            status: AssetStatus::OutOfService,
            comment: Some("Ожидает замены ленты".into()),
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
