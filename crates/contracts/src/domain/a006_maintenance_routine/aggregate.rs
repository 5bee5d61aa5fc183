use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::date::{parse_date, to_iso_opt};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор регламента ТО
    MaintenanceRoutineId
);

/// Дисциплина (специализация) работ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Discipline {
    #[default]
    Mechanical,
    Electrical,
    Instrumentation,
    Lubrication,
    Civil,
    Other,
}

impl Discipline {
    pub fn code(&self) -> &'static str {
        match self {
            Discipline::Mechanical => "mechanical",
            Discipline::Electrical => "electrical",
            Discipline::Instrumentation => "instrumentation",
            Discipline::Lubrication => "lubrication",
            Discipline::Civil => "civil",
            Discipline::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Discipline::Mechanical => "Механика",
            Discipline::Electrical => "Электрика",
            Discipline::Instrumentation => "КИПиА",
            Discipline::Lubrication => "Смазка",
            Discipline::Civil => "Строительная часть",
            Discipline::Other => "Прочее",
        }
    }

    pub fn all() -> Vec<Discipline> {
        vec![
            Discipline::Mechanical,
            Discipline::Electrical,
            Discipline::Instrumentation,
            Discipline::Lubrication,
            Discipline::Civil,
            Discipline::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "mechanical" => Some(Discipline::Mechanical),
            "electrical" => Some(Discipline::Electrical),
            "instrumentation" => Some(Discipline::Instrumentation),
            "lubrication" => Some(Discipline::Lubrication),
            "civil" => Some(Discipline::Civil),
            "other" => Some(Discipline::Other),
            _ => None,
        }
    }
}

/// Регламент планово-предупредительного обслуживания, привязанный к активу.
///
/// Наименование регламента хранится в `base.description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRoutine {
    #[serde(flatten)]
    pub base: BaseAggregate<MaintenanceRoutineId>,

    pub asset_id: String,
    /// Периодичность в календарных днях (>= 1)
    pub frequency_days: u32,
    /// Дата последнего выполнения; `None`, если дата не задана или не разобрана
    pub last_execution_date: Option<NaiveDate>,
    pub estimated_hours: f64,
    pub discipline: Discipline,
    /// Пункты чек-листа осмотра
    #[serde(default)]
    pub checklist_items: Vec<String>,
}

impl MaintenanceRoutine {
    pub fn new_for_insert(
        code: String,
        name: String,
        asset_id: String,
        frequency_days: u32,
    ) -> Self {
        Self {
            base: BaseAggregate::new(MaintenanceRoutineId::new_v4(), code, name),
            asset_id,
            frequency_days,
            last_execution_date: None,
            estimated_hours: 0.0,
            discipline: Discipline::default(),
            checklist_items: Vec::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn name(&self) -> &str {
        &self.base.description
    }

    /// Дата следующего выполнения: последнее выполнение + периодичность
    /// в календарных днях. `None`, если дата последнего выполнения неизвестна.
    pub fn next_date(&self) -> Option<NaiveDate> {
        self.last_execution_date?
            .checked_add_days(Days::new(u64::from(self.frequency_days)))
    }

    /// Отметить выполнение (закрытие производного заказа)
    pub fn stamp_execution(&mut self, date: NaiveDate) {
        self.last_execution_date = Some(date);
    }

    pub fn update(&mut self, dto: &MaintenanceRoutineDto) {
        if let Some(code) = &dto.code {
            self.base.code = code.clone();
        }
        self.base.description = dto.name.clone();
        self.base.comment = dto.comment.clone();
        self.asset_id = dto.asset_id.clone();
        self.frequency_days = dto.frequency_days;
        self.last_execution_date = parse_date(&dto.last_execution_date);
        self.estimated_hours = dto.estimated_hours;
        self.discipline = dto.discipline;
        self.checklist_items = dto
            .checklist_items
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Код не может быть пустым".into());
        }
        if self.base.description.trim().is_empty() {
            return Err("Наименование регламента не может быть пустым".into());
        }
        if self.asset_id.trim().is_empty() {
            return Err("Не указан актив".into());
        }
        if self.frequency_days == 0 {
            return Err("Периодичность должна быть не меньше 1 дня".into());
        }
        if self.estimated_hours < 0.0 {
            return Err("Трудоёмкость не может быть отрицательной".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }

    pub fn to_dto(&self) -> MaintenanceRoutineDto {
        MaintenanceRoutineDto {
            id: Some(self.to_string_id()),
            code: Some(self.base.code.clone()),
            name: self.base.description.clone(),
            asset_id: self.asset_id.clone(),
            frequency_days: self.frequency_days,
            last_execution_date: to_iso_opt(self.last_execution_date),
            estimated_hours: self.estimated_hours,
            discipline: self.discipline,
            checklist_items: self.checklist_items.clone(),
            comment: self.base.comment.clone(),
        }
    }
}

impl AggregateRoot for MaintenanceRoutine {
    type Id = MaintenanceRoutineId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "maintenance_routine"
    }

    fn element_name() -> &'static str {
        "Регламент ТО"
    }

    fn list_name() -> &'static str {
        "План ТО"
    }
}

/// DTO регламента; `last_execution_date`: строка из формы или CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRoutineDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: String,
    pub asset_id: String,
    pub frequency_days: u32,
    #[serde(default)]
    pub last_execution_date: String,
    #[serde(default)]
    pub estimated_hours: f64,
    #[serde(default)]
    pub discipline: Discipline,
    #[serde(default)]
    pub checklist_items: Vec<String>,
    pub comment: Option<String>,
}

impl Default for MaintenanceRoutineDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            name: String::new(),
            asset_id: String::new(),
            frequency_days: 30,
            last_execution_date: String::new(),
            estimated_hours: 0.0,
            discipline: Discipline::default(),
            checklist_items: Vec::new(),
            comment: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn routine(last: Option<NaiveDate>, frequency_days: u32) -> MaintenanceRoutine {
        let mut r = MaintenanceRoutine::new_for_insert(
            "R-1".into(),
            "Смазка подшипников".into(),
            "asset-1".into(),
            frequency_days,
        );
        r.last_execution_date = last;
        r
    }

    #[test]
    fn test_next_date_is_calendar_addition() {
        let r = routine(Some(date(2024, 1, 1)), 30);
        assert_eq!(r.next_date(), Some(date(2024, 1, 31)));
        // через конец февраля високосного года
        let r = routine(Some(date(2024, 2, 15)), 15);
        assert_eq!(r.next_date(), Some(date(2024, 3, 1)));
        let r = routine(Some(date(2023, 12, 20)), 365);
        assert_eq!(r.next_date(), Some(date(2024, 12, 19)));
    }

    #[test]
    fn test_next_date_without_last_execution() {
        assert_eq!(routine(None, 30).next_date(), None);
    }

    #[test]
    fn test_malformed_date_from_form_is_silent() {
        let mut r = routine(Some(date(2024, 1, 1)), 30);
        let mut dto = r.to_dto();
        dto.last_execution_date = "31/02/2024".into();
        r.update(&dto);
        assert_eq!(r.last_execution_date, None);
        assert_eq!(r.next_date(), None);
    }

    #[test]
    fn test_validation() {
        assert!(routine(None, 30).validate().is_ok());
        assert!(routine(None, 0).validate().is_err());
        let mut r = routine(None, 7);
        r.asset_id = String::new();
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_checklist_lines_are_trimmed() {
        let mut r = routine(None, 30);
        let mut dto = r.to_dto();
        dto.checklist_items = vec![" Проверить уровень масла ".into(), "".into(), "Шум".into()];
        r.update(&dto);
        assert_eq!(r.checklist_items, vec!["Проверить уровень масла", "Шум"]);
    }
}
