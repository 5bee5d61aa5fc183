use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a003_partner::aggregate::{Partner, PartnerDto, PartnerKind};
use uuid::Uuid;

/// Создание нового контрагента
pub async fn create(dto: PartnerDto) -> ServiceResult<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("PRT-{}", Uuid::new_v4()));
    let mut aggregate = Partner::new_for_insert(code, dto.description.clone(), dto.kind);
    aggregate.update(&dto);

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

/// Обновление существующего контрагента
pub async fn update(dto: PartnerDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("partner {}", id)))?;

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    Ok(repository::update(&aggregate).await?)
}

pub async fn delete(id: Uuid) -> ServiceResult<bool> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<Option<Partner>> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn get_by_code(code: &str) -> ServiceResult<Option<Partner>> {
    Ok(repository::get_by_code(code).await?)
}

pub async fn list_all() -> ServiceResult<Vec<Partner>> {
    Ok(repository::list_all().await?)
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> ServiceResult<()> {
    let data = vec![
        PartnerDto {
            code: Some("PRT-001".into()),
            description: "ООО \"ПромСнаб\"".into(),
            kind: PartnerKind::Supplier,
            tax_id: "7701234567".into(),
            email: "sales@promsnab.example".into(),
            phone: "+7 495 000-11-22".into(),
            address: "Москва, ул. Заводская, 5".into(),
            ..Default::default()
        },
        PartnerDto {
            code: Some("PRT-002".into()),
            description: "ИП Соколов (сервис компрессоров)".into(),
            kind: PartnerKind::Contractor,
            tax_id: "771234567890".into(),
            phone: "+7 916 555-44-33".into(),
            ..Default::default()
        },
        PartnerDto {
            code: Some("PRT-003".into()),
            description: "АО \"Техносервис\"".into(),
            kind: PartnerKind::Contractor,
            tax_id: "7702345678".into(),
            email: "info@technoservice.example".into(),
            comment: Some("Годовой договор на обслуживание насосов".into()),
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
