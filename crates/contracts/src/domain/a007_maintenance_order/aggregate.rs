use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::{OrderStatus, OrderType, Priority};
use crate::shared::date::{parse_date, to_iso_opt};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор заказа на обслуживание
    MaintenanceOrderId
);

/// Строка материалов заказа. Код, наименование и цена фиксируются на
/// момент добавления строки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMaterialLine {
    pub material_id: String,
    pub material_code: String,
    pub description: String,
    pub quantity: f64,
    pub unit_cost: f64,
}

impl OrderMaterialLine {
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_cost
    }
}

/// Заказ на обслуживание (ОТ). Номер заказа хранится в `base.code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceOrder {
    #[serde(flatten)]
    pub base: BaseAggregate<MaintenanceOrderId>,

    pub asset_id: String,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub priority: Priority,
    pub created_date: NaiveDate,
    pub planned_date: Option<NaiveDate>,
    pub started_at: Option<NaiveDate>,
    pub closed_date: Option<NaiveDate>,
    pub assigned_to: String,
    pub estimated_hours: f64,
    #[serde(default)]
    pub materials: Vec<OrderMaterialLine>,
    pub work_notes: String,
    /// Регламент, из которого сгенерирован плановый заказ
    pub routine_id: Option<String>,
    /// Родительский заказ
    pub related_order_id: Option<String>,
    /// Осмотр, по результатам которого открыт аварийный заказ
    pub checklist_execution_id: Option<String>,
}

impl MaintenanceOrder {
    pub fn new_for_insert(
        number: String,
        description: String,
        asset_id: String,
        order_type: OrderType,
        created_date: NaiveDate,
    ) -> Self {
        Self {
            base: BaseAggregate::new(MaintenanceOrderId::new_v4(), number, description),
            asset_id,
            order_type,
            status: OrderStatus::Pending,
            priority: Priority::default(),
            created_date,
            planned_date: None,
            started_at: None,
            closed_date: None,
            assigned_to: String::new(),
            estimated_hours: 0.0,
            materials: Vec::new(),
            work_notes: String::new(),
            routine_id: None,
            related_order_id: None,
            checklist_execution_id: None,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn number(&self) -> &str {
        &self.base.code
    }

    /// Дата для календаря: плановая, иначе дата создания
    pub fn effective_date(&self) -> NaiveDate {
        self.planned_date.unwrap_or(self.created_date)
    }

    /// Перевести заказ в следующий статус.
    ///
    /// Разрешены только переходы вперёд. При старте работ фиксируется
    /// дата начала, при закрытии дата закрытия.
    pub fn transition_to(&mut self, target: OrderStatus, today: NaiveDate) -> Result<(), String> {
        if !self.status.can_transition_to(target) {
            return Err(format!(
                "Недопустимый переход статуса: {} → {}",
                self.status.display_name(),
                target.display_name()
            ));
        }
        if matches!(target, OrderStatus::InProgress | OrderStatus::Closed)
            && self.started_at.is_none()
        {
            self.started_at = Some(today);
        }
        if target == OrderStatus::Closed {
            self.closed_date = Some(today);
        }
        self.status = target;
        Ok(())
    }

    pub fn add_material_line(&mut self, line: OrderMaterialLine) -> Result<(), String> {
        if self.status.is_terminal() {
            return Err("Заказ закрыт, материалы добавлять нельзя".into());
        }
        if line.quantity <= 0.0 {
            return Err("Количество должно быть больше нуля".into());
        }
        self.materials.push(line);
        Ok(())
    }

    pub fn materials_total(&self) -> f64 {
        self.materials.iter().map(OrderMaterialLine::line_total).sum()
    }

    /// Обновить редактируемые поля из DTO (статус меняется только через
    /// `transition_to`)
    pub fn update(&mut self, dto: &MaintenanceOrderDto) {
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.asset_id = dto.asset_id.clone();
        self.order_type = dto.order_type;
        self.priority = dto.priority;
        self.planned_date = parse_date(&dto.planned_date);
        self.assigned_to = dto.assigned_to.clone();
        self.estimated_hours = dto.estimated_hours;
        self.work_notes = dto.work_notes.clone();
        self.routine_id = dto.routine_id.clone().filter(|s| !s.trim().is_empty());
        self.related_order_id = dto.related_order_id.clone().filter(|s| !s.trim().is_empty());
        self.checklist_execution_id = dto
            .checklist_execution_id
            .clone()
            .filter(|s| !s.trim().is_empty());
    }

    pub fn validate(&self) -> Result<(), String> {
        self.base.validate_base()?;
        if self.asset_id.trim().is_empty() {
            return Err("Не указан актив".into());
        }
        if self.estimated_hours < 0.0 {
            return Err("Трудоёмкость не может быть отрицательной".into());
        }
        if self.status == OrderStatus::Planned && self.planned_date.is_none() {
            return Err("Для запланированного заказа нужна плановая дата".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }

    pub fn to_dto(&self) -> MaintenanceOrderDto {
        MaintenanceOrderDto {
            id: Some(self.to_string_id()),
            number: Some(self.base.code.clone()),
            description: self.base.description.clone(),
            asset_id: self.asset_id.clone(),
            order_type: self.order_type,
            status: self.status,
            priority: self.priority,
            planned_date: to_iso_opt(self.planned_date),
            assigned_to: self.assigned_to.clone(),
            estimated_hours: self.estimated_hours,
            work_notes: self.work_notes.clone(),
            routine_id: self.routine_id.clone(),
            related_order_id: self.related_order_id.clone(),
            checklist_execution_id: self.checklist_execution_id.clone(),
            comment: self.base.comment.clone(),
        }
    }
}

impl AggregateRoot for MaintenanceOrder {
    type Id = MaintenanceOrderId;

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
        "a007"
    }

    fn collection_name() -> &'static str {
        "maintenance_order"
    }

    fn element_name() -> &'static str {
        "Заказ на ТО"
    }

    fn list_name() -> &'static str {
        "Заказы на ТО"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO заказа. Номер присваивается сервером при создании, если не задан.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceOrderDto {
    pub id: Option<String>,
    pub number: Option<String>,
    pub description: String,
    pub asset_id: String,
    #[serde(default)]
    pub order_type: OrderType,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub planned_date: String,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub estimated_hours: f64,
    #[serde(default)]
    pub work_notes: String,
    pub routine_id: Option<String>,
    pub related_order_id: Option<String>,
    pub checklist_execution_id: Option<String>,
    pub comment: Option<String>,
}

/// POST /api/maintenance_order/:id/status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChangeRequest {
    pub status: OrderStatus,
}

/// POST /api/maintenance_order/:id/materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMaterialRequest {
    pub material_id: String,
    pub quantity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order() -> MaintenanceOrder {
        MaintenanceOrder::new_for_insert(
            "OT-000001".into(),
            "Замена ремня".into(),
            "asset-1".into(),
            OrderType::Corrective,
            date(2024, 1, 10),
        )
    }

    #[test]
    fn test_transition_stamps_dates() {
        let mut o = order();
        o.transition_to(OrderStatus::InProgress, date(2024, 1, 11)).unwrap();
        assert_eq!(o.started_at, Some(date(2024, 1, 11)));
        o.transition_to(OrderStatus::Closed, date(2024, 1, 12)).unwrap();
        assert_eq!(o.closed_date, Some(date(2024, 1, 12)));
        assert_eq!(o.started_at, Some(date(2024, 1, 11)));
    }

    #[test]
    fn test_backward_transition_rejected() {
        let mut o = order();
        o.transition_to(OrderStatus::Planned, date(2024, 1, 11)).unwrap();
        assert!(o.transition_to(OrderStatus::Pending, date(2024, 1, 12)).is_err());
        assert_eq!(o.status, OrderStatus::Planned);
    }

    #[test]
    fn test_direct_close_sets_start() {
        let mut o = order();
        o.transition_to(OrderStatus::Closed, date(2024, 2, 1)).unwrap();
        assert_eq!(o.started_at, Some(date(2024, 2, 1)));
        assert!(o.transition_to(OrderStatus::Closed, date(2024, 2, 2)).is_err());
    }

    #[test]
    fn test_material_lines() {
        let mut o = order();
        let line = OrderMaterialLine {
            material_id: "m1".into(),
            material_code: "MAT-1".into(),
            description: "Ремень A-42".into(),
            quantity: 2.0,
            unit_cost: 15.5,
        };
        o.add_material_line(line.clone()).unwrap();
        assert_eq!(o.materials_total(), 31.0);

        let mut zero = line.clone();
        zero.quantity = 0.0;
        assert!(o.add_material_line(zero).is_err());

        o.transition_to(OrderStatus::Closed, date(2024, 1, 12)).unwrap();
        assert!(o.add_material_line(line).is_err());
    }

    #[test]
    fn test_planned_requires_date() {
        let mut o = order();
        o.status = OrderStatus::Planned;
        assert!(o.validate().is_err());
        o.planned_date = Some(date(2024, 1, 20));
        assert!(o.validate().is_ok());
    }

    #[test]
    fn test_json_shape_is_flat_camel_case() {
        let o = order();
        let json = serde_json::to_value(&o).unwrap();
        assert_eq!(json["code"], "OT-000001");
        assert_eq!(json["assetId"], "asset-1");
        assert_eq!(json["orderType"], "Corrective");
        assert_eq!(json["status"], "Pending");
        assert_eq!(json["createdDate"], "2024-01-10");
        assert!(json["metadata"]["is_deleted"] == false);

        let back: MaintenanceOrder = serde_json::from_value(json).unwrap();
        assert_eq!(back, o);
    }
}
