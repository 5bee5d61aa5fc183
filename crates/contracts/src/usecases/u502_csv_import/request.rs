use serde::{Deserialize, Serialize};

/// Коллекции, для которых поддерживается импорт из CSV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportCollection {
    Asset,
    Material,
    Partner,
    Warehouse,
    MaintenanceRoutine,
}

impl ImportCollection {
    pub fn code(&self) -> &'static str {
        match self {
            ImportCollection::Asset => "asset",
            ImportCollection::Material => "material",
            ImportCollection::Partner => "partner",
            ImportCollection::Warehouse => "warehouse",
            ImportCollection::MaintenanceRoutine => "maintenance_routine",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ImportCollection::Asset => "Активы",
            ImportCollection::Material => "Материалы",
            ImportCollection::Partner => "Контрагенты",
            ImportCollection::Warehouse => "Склады",
            ImportCollection::MaintenanceRoutine => "Регламенты ТО",
        }
    }

    pub fn all() -> Vec<ImportCollection> {
        vec![
            ImportCollection::Asset,
            ImportCollection::Material,
            ImportCollection::Partner,
            ImportCollection::Warehouse,
            ImportCollection::MaintenanceRoutine,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "asset" => Some(ImportCollection::Asset),
            "material" => Some(ImportCollection::Material),
            "partner" => Some(ImportCollection::Partner),
            "warehouse" => Some(ImportCollection::Warehouse),
            "maintenance_routine" => Some(ImportCollection::MaintenanceRoutine),
            _ => None,
        }
    }

    /// Заголовки колонок, которые понимает импорт (в нижнем регистре)
    pub fn known_headers(&self) -> &'static [&'static str] {
        match self {
            ImportCollection::Asset => &[
                "code",
                "description",
                "location",
                "category",
                "manufacturer",
                "model",
                "serial_number",
                "criticality",
                "comment",
            ],
            ImportCollection::Material => &[
                "code",
                "description",
                "unit",
                "stock_quantity",
                "min_stock",
                "unit_cost",
                "comment",
            ],
            ImportCollection::Partner => &[
                "code",
                "description",
                "kind",
                "tax_id",
                "email",
                "phone",
                "address",
                "comment",
            ],
            ImportCollection::Warehouse => &["code", "description", "location", "comment"],
            ImportCollection::MaintenanceRoutine => &[
                "code",
                "name",
                "asset_code",
                "frequency_days",
                "last_execution_date",
                "estimated_hours",
                "discipline",
                "comment",
            ],
        }
    }
}

/// POST /api/import/:collection: тело файла как текст
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub file_name: String,
    pub content: String,
}
