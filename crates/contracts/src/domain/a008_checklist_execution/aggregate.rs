use crate::domain::a006_maintenance_routine::MaintenanceRoutine;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::date::{parse_date, to_iso_opt};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор проведённого осмотра
    ChecklistExecutionId
);

/// Результат проверки пункта чек-листа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckResult {
    #[default]
    Pending,
    Ok,
    Fail,
    NotApplicable,
}

impl CheckResult {
    pub fn code(&self) -> &'static str {
        match self {
            CheckResult::Pending => "pending",
            CheckResult::Ok => "ok",
            CheckResult::Fail => "fail",
            CheckResult::NotApplicable => "na",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckResult::Pending => "Не проверено",
            CheckResult::Ok => "Норма",
            CheckResult::Fail => "Дефект",
            CheckResult::NotApplicable => "Н/П",
        }
    }

    pub fn all() -> Vec<CheckResult> {
        vec![
            CheckResult::Pending,
            CheckResult::Ok,
            CheckResult::Fail,
            CheckResult::NotApplicable,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(CheckResult::Pending),
            "ok" => Some(CheckResult::Ok),
            "fail" => Some(CheckResult::Fail),
            "na" => Some(CheckResult::NotApplicable),
            _ => None,
        }
    }
}

/// Пункт чек-листа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    pub result: CheckResult,
    #[serde(default)]
    pub observation: String,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            result: CheckResult::Pending,
            observation: String::new(),
        }
    }
}

/// Проведённый осмотр оборудования по чек-листу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistExecution {
    #[serde(flatten)]
    pub base: BaseAggregate<ChecklistExecutionId>,

    pub asset_id: String,
    pub routine_id: Option<String>,
    pub inspector: String,
    pub execution_date: Option<NaiveDate>,
    pub items: Vec<ChecklistItem>,
    /// Аварийный заказ, открытый по дефектам осмотра
    pub corrective_order_id: Option<String>,
}

impl ChecklistExecution {
    pub fn new_for_insert(code: String, description: String, asset_id: String) -> Self {
        Self {
            base: BaseAggregate::new(ChecklistExecutionId::new_v4(), code, description),
            asset_id,
            routine_id: None,
            inspector: String::new(),
            execution_date: None,
            items: Vec::new(),
            corrective_order_id: None,
        }
    }

    /// Заготовка осмотра по пунктам чек-листа регламента
    pub fn from_routine(code: String, routine: &MaintenanceRoutine, date: NaiveDate) -> Self {
        let mut execution = Self::new_for_insert(
            code,
            format!("Осмотр: {}", routine.name()),
            routine.asset_id.clone(),
        );
        execution.routine_id = Some(routine.to_string_id());
        execution.execution_date = Some(date);
        execution.items = routine
            .checklist_items
            .iter()
            .map(|text| ChecklistItem::new(text.as_str()))
            .collect();
        execution
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Итог осмотра: Fail при любом дефекте, Pending при непроверенных
    /// пунктах, иначе Ok
    pub fn overall_result(&self) -> CheckResult {
        if self.items.iter().any(|i| i.result == CheckResult::Fail) {
            CheckResult::Fail
        } else if self.items.iter().any(|i| i.result == CheckResult::Pending) {
            CheckResult::Pending
        } else {
            CheckResult::Ok
        }
    }

    pub fn failed_items(&self) -> Vec<&ChecklistItem> {
        self.items
            .iter()
            .filter(|i| i.result == CheckResult::Fail)
            .collect()
    }

    /// Описание аварийного заказа по дефектам осмотра
    pub fn corrective_description(&self) -> String {
        let lines: Vec<String> = self
            .failed_items()
            .iter()
            .map(|i| {
                if i.observation.trim().is_empty() {
                    i.text.clone()
                } else {
                    format!("{} ({})", i.text, i.observation.trim())
                }
            })
            .collect();
        format!("Дефекты осмотра {}: {}", self.base.code, lines.join("; "))
    }

    pub fn update(&mut self, dto: &ChecklistExecutionDto) {
        if let Some(code) = &dto.code {
            self.base.code = code.clone();
        }
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.asset_id = dto.asset_id.clone();
        self.routine_id = dto.routine_id.clone().filter(|s| !s.trim().is_empty());
        self.inspector = dto.inspector.clone();
        self.execution_date = parse_date(&dto.execution_date);
        self.items = dto.items.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        self.base.validate_base()?;
        if self.asset_id.trim().is_empty() {
            return Err("Не указан актив".into());
        }
        if self.items.is_empty() {
            return Err("Чек-лист не содержит пунктов".into());
        }
        if self.items.iter().any(|i| i.text.trim().is_empty()) {
            return Err("Пункт чек-листа без текста".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }

    pub fn to_dto(&self) -> ChecklistExecutionDto {
        ChecklistExecutionDto {
            id: Some(self.to_string_id()),
            code: Some(self.base.code.clone()),
            description: self.base.description.clone(),
            asset_id: self.asset_id.clone(),
            routine_id: self.routine_id.clone(),
            inspector: self.inspector.clone(),
            execution_date: to_iso_opt(self.execution_date),
            items: self.items.clone(),
            comment: self.base.comment.clone(),
        }
    }
}

impl AggregateRoot for ChecklistExecution {
    type Id = ChecklistExecutionId;

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
        "a008"
    }

    fn collection_name() -> &'static str {
        "checklist_execution"
    }

    fn element_name() -> &'static str {
        "Осмотр"
    }

    fn list_name() -> &'static str {
        "Осмотры"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistExecutionDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub asset_id: String,
    pub routine_id: Option<String>,
    #[serde(default)]
    pub inspector: String,
    #[serde(default)]
    pub execution_date: String,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn execution(results: &[CheckResult]) -> ChecklistExecution {
        let mut e = ChecklistExecution::new_for_insert("INS-1".into(), "Осмотр".into(), "a1".into());
        e.items = results
            .iter()
            .enumerate()
            .map(|(i, r)| ChecklistItem {
                text: format!("Пункт {}", i + 1),
                result: *r,
                observation: String::new(),
            })
            .collect();
        e
    }

    #[test]
    fn test_overall_result() {
        use CheckResult::*;
        assert_eq!(execution(&[Ok, NotApplicable]).overall_result(), Ok);
        assert_eq!(execution(&[Ok, Pending]).overall_result(), Pending);
        assert_eq!(execution(&[Pending, Fail]).overall_result(), Fail);
    }

    #[test]
    fn test_from_routine_copies_checklist() {
        let mut routine = MaintenanceRoutine::new_for_insert(
            "R-1".into(),
            "Осмотр насоса".into(),
            "a1".into(),
            7,
        );
        routine.checklist_items = vec!["Вибрация".into(), "Утечки".into()];
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let e = ChecklistExecution::from_routine("INS-7".into(), &routine, date);
        assert_eq!(e.items.len(), 2);
        assert_eq!(e.asset_id, "a1");
        assert_eq!(e.routine_id, Some(routine.to_string_id()));
        assert_eq!(e.overall_result(), CheckResult::Pending);
    }

    #[test]
    fn test_corrective_description_lists_failures() {
        let mut e = execution(&[CheckResult::Ok, CheckResult::Fail, CheckResult::Fail]);
        e.items[1].observation = "течь по фланцу".into();
        assert_eq!(
            e.corrective_description(),
            "Дефекты осмотра INS-1: Пункт 2 (течь по фланцу); Пункт 3"
        );
    }

    #[test]
    fn test_empty_checklist_invalid() {
        assert!(execution(&[]).validate().is_err());
        assert!(execution(&[CheckResult::Pending]).validate().is_ok());
    }
}
