use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a005_contract::aggregate::{Contract, ContractDto};
use uuid::Uuid;

/// Создание договора; контрагент должен существовать
pub async fn create(dto: ContractDto) -> ServiceResult<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("CTR-{}", Uuid::new_v4()));
    let mut aggregate = Contract::new_for_insert(code, dto.description.clone(), dto.partner_id.clone());
    aggregate.update(&dto);

    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_partner_exists(&aggregate.partner_id).await?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(dto: ContractDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("contract {}", id)))?;

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_partner_exists(&aggregate.partner_id).await?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    Ok(repository::update(&aggregate).await?)
}

async fn ensure_partner_exists(partner_id: &str) -> ServiceResult<()> {
    let partner = match Uuid::parse_str(partner_id) {
        Ok(id) => crate::domain::a003_partner::service::get_by_id(id).await?,
        Err(_) => None,
    };
    match partner {
        Some(p) if !p.base.metadata.is_deleted => Ok(()),
        _ => Err(ServiceError::Validation(format!(
            "Контрагент не найден: {}",
            partner_id
        ))),
    }
}

pub async fn delete(id: Uuid) -> ServiceResult<bool> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<Option<Contract>> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn list_all() -> ServiceResult<Vec<Contract>> {
    Ok(repository::list_all().await?)
}
