use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор контрагента
    PartnerId
);

/// Роль контрагента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PartnerKind {
    #[default]
    Supplier,
    Customer,
    Contractor,
}

impl PartnerKind {
    pub fn code(&self) -> &'static str {
        match self {
            PartnerKind::Supplier => "supplier",
            PartnerKind::Customer => "customer",
            PartnerKind::Contractor => "contractor",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PartnerKind::Supplier => "Поставщик",
            PartnerKind::Customer => "Клиент",
            PartnerKind::Contractor => "Подрядчик",
        }
    }

    pub fn all() -> Vec<PartnerKind> {
        vec![
            PartnerKind::Supplier,
            PartnerKind::Customer,
            PartnerKind::Contractor,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "supplier" => Some(PartnerKind::Supplier),
            "customer" => Some(PartnerKind::Customer),
            "contractor" => Some(PartnerKind::Contractor),
            _ => None,
        }
    }
}

/// Контрагент: поставщик, клиент или подрядчик
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    #[serde(flatten)]
    pub base: BaseAggregate<PartnerId>,

    pub kind: PartnerKind,
    pub tax_id: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Partner {
    pub fn new_for_insert(code: String, description: String, kind: PartnerKind) -> Self {
        Self {
            base: BaseAggregate::new(PartnerId::new_v4(), code, description),
            kind,
            tax_id: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &PartnerDto) {
        if let Some(code) = &dto.code {
            self.base.code = code.clone();
        }
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.kind = dto.kind;
        self.tax_id = dto.tax_id.clone();
        self.email = dto.email.clone();
        self.phone = dto.phone.clone();
        self.address = dto.address.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        self.base.validate_base()?;
        let email = self.email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err("Некорректный e-mail".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }

    pub fn to_dto(&self) -> PartnerDto {
        PartnerDto {
            id: Some(self.to_string_id()),
            code: Some(self.base.code.clone()),
            description: self.base.description.clone(),
            kind: self.kind,
            tax_id: self.tax_id.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            comment: self.base.comment.clone(),
        }
    }
}

impl AggregateRoot for Partner {
    type Id = PartnerId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "partner"
    }

    fn element_name() -> &'static str {
        "Контрагент"
    }

    fn list_name() -> &'static str {
        "Контрагенты"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartnerDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(default)]
    pub kind: PartnerKind,
    #[serde(default)]
    pub tax_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    pub comment: Option<String>,
}
