use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::date::{parse_date, to_iso_opt};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор договора
    ContractId
);

/// Договор с контрагентом (сервисный, поставки, аренды)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    #[serde(flatten)]
    pub base: BaseAggregate<ContractId>,

    pub partner_id: String,
    /// Актив, на который распространяется договор (если есть)
    pub asset_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub amount: f64,
}

impl Contract {
    pub fn new_for_insert(code: String, description: String, partner_id: String) -> Self {
        Self {
            base: BaseAggregate::new(ContractId::new_v4(), code, description),
            partner_id,
            asset_id: None,
            start_date: None,
            end_date: None,
            amount: 0.0,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &ContractDto) {
        if let Some(code) = &dto.code {
            self.base.code = code.clone();
        }
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.partner_id = dto.partner_id.clone();
        self.asset_id = dto.asset_id.clone().filter(|s| !s.trim().is_empty());
        self.start_date = parse_date(&dto.start_date);
        self.end_date = parse_date(&dto.end_date);
        self.amount = dto.amount;
    }

    pub fn validate(&self) -> Result<(), String> {
        self.base.validate_base()?;
        if self.partner_id.trim().is_empty() {
            return Err("Не указан контрагент".into());
        }
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if end < start => {
                Err("Дата окончания раньше даты начала".into())
            }
            (Some(_), Some(_)) => Ok(()),
            _ => Err("Укажите даты начала и окончания".into()),
        }
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }

    /// Договор действует на дату (границы включительно)
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }

    pub fn to_dto(&self) -> ContractDto {
        ContractDto {
            id: Some(self.to_string_id()),
            code: Some(self.base.code.clone()),
            description: self.base.description.clone(),
            partner_id: self.partner_id.clone(),
            asset_id: self.asset_id.clone(),
            start_date: to_iso_opt(self.start_date),
            end_date: to_iso_opt(self.end_date),
            amount: self.amount,
            comment: self.base.comment.clone(),
        }
    }
}

impl AggregateRoot for Contract {
    type Id = ContractId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "contract"
    }

    fn element_name() -> &'static str {
        "Договор"
    }

    fn list_name() -> &'static str {
        "Договоры"
    }
}

/// DTO договора; даты приходят из `<input type="date">` как YYYY-MM-DD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContractDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub partner_id: String,
    pub asset_id: Option<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub amount: f64,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contract(start: &str, end: &str) -> Contract {
        let mut c = Contract::new_for_insert("CTR-1".into(), "Сервис компрессоров".into(), "p1".into());
        c.update(&ContractDto {
            id: None,
            code: None,
            description: "Сервис компрессоров".into(),
            partner_id: "p1".into(),
            asset_id: Some("".into()),
            start_date: start.into(),
            end_date: end.into(),
            amount: 1200.0,
            comment: None,
        });
        c
    }

    #[test]
    fn test_active_bounds_inclusive() {
        let c = contract("2024-01-01", "2024-12-31");
        assert!(c.is_active_on(date(2024, 1, 1)));
        assert!(c.is_active_on(date(2024, 12, 31)));
        assert!(!c.is_active_on(date(2025, 1, 1)));
        assert_eq!(c.asset_id, None);
    }

    #[test]
    fn test_end_before_start_rejected() {
        assert!(contract("2024-06-01", "2024-05-01").validate().is_err());
        assert!(contract("2024-06-01", "").validate().is_err());
        assert!(contract("2024-06-01", "2024-06-01").validate().is_ok());
    }
}
