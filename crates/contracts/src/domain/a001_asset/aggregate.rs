use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор актива (оборудования)
    AssetId
);

// ============================================================================
// Enums
// ============================================================================

/// Критичность актива для производства
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Criticality {
    Low,
    #[default]
    Medium,
    High,
}

impl Criticality {
    pub fn code(&self) -> &'static str {
        match self {
            Criticality::Low => "low",
            Criticality::Medium => "medium",
            Criticality::High => "high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Criticality::Low => "Низкая",
            Criticality::Medium => "Средняя",
            Criticality::High => "Высокая",
        }
    }

    pub fn all() -> Vec<Criticality> {
        vec![Criticality::Low, Criticality::Medium, Criticality::High]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "low" => Some(Criticality::Low),
            "medium" => Some(Criticality::Medium),
            "high" => Some(Criticality::High),
            _ => None,
        }
    }
}

/// Эксплуатационное состояние актива
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AssetStatus {
    #[default]
    Operational,
    OutOfService,
    Retired,
}

impl AssetStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AssetStatus::Operational => "operational",
            AssetStatus::OutOfService => "out_of_service",
            AssetStatus::Retired => "retired",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AssetStatus::Operational => "В работе",
            AssetStatus::OutOfService => "Остановлен",
            AssetStatus::Retired => "Списан",
        }
    }

    pub fn all() -> Vec<AssetStatus> {
        vec![
            AssetStatus::Operational,
            AssetStatus::OutOfService,
            AssetStatus::Retired,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "operational" => Some(AssetStatus::Operational),
            "out_of_service" => Some(AssetStatus::OutOfService),
            "retired" => Some(AssetStatus::Retired),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Актив: единица оборудования, к которой привязаны регламенты и заказы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(flatten)]
    pub base: BaseAggregate<AssetId>,

    pub location: String,
    pub category: String,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub criticality: Criticality,
    pub status: AssetStatus,
}

impl Asset {
    /// Создать новый актив для вставки в БД
    pub fn new_for_insert(code: String, description: String) -> Self {
        Self {
            base: BaseAggregate::new(AssetId::new_v4(), code, description),
            location: String::new(),
            category: String::new(),
            manufacturer: String::new(),
            model: String::new(),
            serial_number: String::new(),
            criticality: Criticality::default(),
            status: AssetStatus::default(),
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &AssetDto) {
        if let Some(code) = &dto.code {
            self.base.code = code.clone();
        }
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.location = dto.location.clone();
        self.category = dto.category.clone();
        self.manufacturer = dto.manufacturer.clone();
        self.model = dto.model.clone();
        self.serial_number = dto.serial_number.clone();
        self.criticality = dto.criticality;
        self.status = dto.status;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        self.base.validate_base()
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }

    /// Конвертация в DTO для формы
    pub fn to_dto(&self) -> AssetDto {
        AssetDto {
            id: Some(self.to_string_id()),
            code: Some(self.base.code.clone()),
            description: self.base.description.clone(),
            location: self.location.clone(),
            category: self.category.clone(),
            manufacturer: self.manufacturer.clone(),
            model: self.model.clone(),
            serial_number: self.serial_number.clone(),
            criticality: self.criticality,
            status: self.status,
            comment: self.base.comment.clone(),
        }
    }
}

impl AggregateRoot for Asset {
    type Id = AssetId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "asset"
    }

    fn element_name() -> &'static str {
        "Актив"
    }

    fn list_name() -> &'static str {
        "Активы"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления актива
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub criticality: Criticality,
    #[serde(default)]
    pub status: AssetStatus,
    pub comment: Option<String>,
}
