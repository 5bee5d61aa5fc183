use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор материала (запчасти, расходника)
    MaterialId
);

/// Материал на складе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(flatten)]
    pub base: BaseAggregate<MaterialId>,

    /// Единица измерения ("шт", "л", "кг")
    pub unit: String,
    pub stock_quantity: f64,
    /// Минимальный остаток, ниже которого нужна закупка
    pub min_stock: f64,
    pub unit_cost: f64,
    /// Склад хранения (UUID склада как строка)
    pub warehouse_id: Option<String>,
}

impl Material {
    pub fn new_for_insert(code: String, description: String, unit: String) -> Self {
        Self {
            base: BaseAggregate::new(MaterialId::new_v4(), code, description),
            unit,
            stock_quantity: 0.0,
            min_stock: 0.0,
            unit_cost: 0.0,
            warehouse_id: None,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &MaterialDto) {
        if let Some(code) = &dto.code {
            self.base.code = code.clone();
        }
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.unit = dto.unit.clone();
        self.stock_quantity = dto.stock_quantity;
        self.min_stock = dto.min_stock;
        self.unit_cost = dto.unit_cost;
        self.warehouse_id = dto.warehouse_id.clone().filter(|s| !s.trim().is_empty());
    }

    pub fn validate(&self) -> Result<(), String> {
        self.base.validate_base()?;
        if self.unit.trim().is_empty() {
            return Err("Единица измерения не может быть пустой".into());
        }
        if self.min_stock < 0.0 {
            return Err("Минимальный остаток не может быть отрицательным".into());
        }
        if self.unit_cost < 0.0 {
            return Err("Цена не может быть отрицательной".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }

    /// Остаток ниже минимального, нужна закупка
    pub fn needs_replenishment(&self) -> bool {
        self.stock_quantity < self.min_stock
    }

    /// Хватает ли остатка на списание `quantity`
    pub fn check_available(&self, quantity: f64) -> Result<(), String> {
        if quantity <= 0.0 {
            return Err("Количество должно быть больше нуля".into());
        }
        if quantity > self.stock_quantity {
            return Err(format!(
                "Недостаточно материала {}: остаток {} {}, требуется {}",
                self.base.code, self.stock_quantity, self.unit, quantity
            ));
        }
        Ok(())
    }

    /// Списать количество со склада. Остаток не уходит в минус.
    pub fn consume(&mut self, quantity: f64) -> Result<(), String> {
        self.check_available(quantity)?;
        self.stock_quantity -= quantity;
        Ok(())
    }

    pub fn stock_check(&self) -> StockCheck {
        StockCheck {
            material_id: self.to_string_id(),
            stock_quantity: self.stock_quantity,
            min_stock: self.min_stock,
            replenishment_needed: self.needs_replenishment(),
        }
    }

    pub fn to_dto(&self) -> MaterialDto {
        MaterialDto {
            id: Some(self.to_string_id()),
            code: Some(self.base.code.clone()),
            description: self.base.description.clone(),
            unit: self.unit.clone(),
            stock_quantity: self.stock_quantity,
            min_stock: self.min_stock,
            unit_cost: self.unit_cost,
            warehouse_id: self.warehouse_id.clone(),
            comment: self.base.comment.clone(),
        }
    }
}

impl AggregateRoot for Material {
    type Id = MaterialId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "material"
    }

    fn element_name() -> &'static str {
        "Материал"
    }

    fn list_name() -> &'static str {
        "Материалы"
    }
}

/// DTO для создания/обновления материала
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub unit: String,
    #[serde(default)]
    pub stock_quantity: f64,
    #[serde(default)]
    pub min_stock: f64,
    #[serde(default)]
    pub unit_cost: f64,
    pub warehouse_id: Option<String>,
    pub comment: Option<String>,
}

/// Результат проверки остатка после списания
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockCheck {
    pub material_id: String,
    pub stock_quantity: f64,
    pub min_stock: f64,
    pub replenishment_needed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(stock: f64, min: f64) -> Material {
        let mut m = Material::new_for_insert("MAT-1".into(), "Подшипник 6204".into(), "шт".into());
        m.stock_quantity = stock;
        m.min_stock = min;
        m
    }

    #[test]
    fn test_replenishment_threshold() {
        assert!(material(1.0, 2.0).needs_replenishment());
        assert!(!material(2.0, 2.0).needs_replenishment());
        assert!(!material(5.0, 0.0).needs_replenishment());
    }

    #[test]
    fn test_consume_reports_threshold() {
        let mut m = material(3.0, 2.0);
        m.consume(2.0).unwrap();
        let check = m.stock_check();
        assert_eq!(check.stock_quantity, 1.0);
        assert!(check.replenishment_needed);
    }

    #[test]
    fn test_consume_more_than_stock_rejected() {
        let mut m = material(2.0, 0.0);
        assert!(m.consume(5.0).is_err());
        assert_eq!(m.stock_quantity, 2.0);
        assert!(m.consume(0.0).is_err());
        m.consume(2.0).unwrap();
        assert_eq!(m.stock_quantity, 0.0);
    }

    #[test]
    fn test_validation() {
        let mut m = material(0.0, 0.0);
        assert!(m.validate().is_ok());
        m.unit = " ".into();
        assert!(m.validate().is_err());
        m.unit = "шт".into();
        m.unit_cost = -1.0;
        assert!(m.validate().is_err());
    }
}
