//! Сопоставление колонок CSV с полями DTO
use super::parser::{parse_number, CsvRow};
use contracts::domain::a001_asset::aggregate::{AssetDto, Criticality};
use contracts::domain::a002_material::aggregate::MaterialDto;
use contracts::domain::a003_partner::aggregate::{PartnerDto, PartnerKind};
use contracts::domain::a004_warehouse::aggregate::WarehouseDto;
use contracts::domain::a006_maintenance_routine::aggregate::{Discipline, MaintenanceRoutineDto};

fn number(row: &CsvRow, column: &str) -> Result<f64, String> {
    match row.get(column) {
        None => Ok(0.0),
        Some(raw) => parse_number(raw).ok_or_else(|| format!("{}: не число '{}'", column, raw)),
    }
}

/// Значение перечисления по коду или отображаемому имени, без учёта регистра
fn pick<T: Copy + Default>(
    row: &CsvRow,
    column: &str,
    all: Vec<T>,
    code: fn(&T) -> &'static str,
    name: fn(&T) -> &'static str,
) -> Result<T, String> {
    let Some(raw) = row.get(column) else {
        return Ok(T::default());
    };
    let wanted = raw.to_lowercase();
    all.into_iter()
        .find(|v| code(v) == wanted || name(v).to_lowercase() == wanted)
        .ok_or_else(|| format!("{}: неизвестное значение '{}'", column, raw))
}

pub fn asset_from_row(row: &CsvRow, code: &str) -> Result<AssetDto, String> {
    Ok(AssetDto {
        code: Some(code.to_string()),
        description: row.get_or_default("description"),
        location: row.get_or_default("location"),
        category: row.get_or_default("category"),
        manufacturer: row.get_or_default("manufacturer"),
        model: row.get_or_default("model"),
        serial_number: row.get_or_default("serial_number"),
        criticality: pick(
            row,
            "criticality",
            Criticality::all(),
            Criticality::code,
            Criticality::display_name,
        )?,
        comment: row.get("comment").map(String::from),
        ..Default::default()
    })
}

pub fn material_from_row(row: &CsvRow, code: &str) -> Result<MaterialDto, String> {
    Ok(MaterialDto {
        code: Some(code.to_string()),
        description: row.get_or_default("description"),
        unit: row.get_or_default("unit"),
        stock_quantity: number(row, "stock_quantity")?,
        min_stock: number(row, "min_stock")?,
        unit_cost: number(row, "unit_cost")?,
        comment: row.get("comment").map(String::from),
        ..Default::default()
    })
}

pub fn partner_from_row(row: &CsvRow, code: &str) -> Result<PartnerDto, String> {
    Ok(PartnerDto {
        code: Some(code.to_string()),
        description: row.get_or_default("description"),
        kind: pick(
            row,
            "kind",
            PartnerKind::all(),
            PartnerKind::code,
            PartnerKind::display_name,
        )?,
        tax_id: row.get_or_default("tax_id"),
        email: row.get_or_default("email"),
        phone: row.get_or_default("phone"),
        address: row.get_or_default("address"),
        comment: row.get("comment").map(String::from),
        ..Default::default()
    })
}

pub fn warehouse_from_row(row: &CsvRow, code: &str) -> Result<WarehouseDto, String> {
    Ok(WarehouseDto {
        code: Some(code.to_string()),
        description: row.get_or_default("description"),
        location: row.get_or_default("location"),
        comment: row.get("comment").map(String::from),
        ..Default::default()
    })
}

/// Регламент; `asset_id` уже найден по колонке asset_code.
/// Дата последнего выполнения переносится как есть: неразборчивая дата
/// не ошибка импорта, такой регламент просто не попадёт в план.
pub fn routine_from_row(
    row: &CsvRow,
    code: &str,
    asset_id: String,
) -> Result<MaintenanceRoutineDto, String> {
    let frequency_days = match row.get("frequency_days") {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| format!("frequency_days: не целое число '{}'", raw))?,
        None => return Err("frequency_days: не заполнено".into()),
    };
    Ok(MaintenanceRoutineDto {
        id: None,
        code: Some(code.to_string()),
        name: row.get_or_default("name"),
        asset_id,
        frequency_days,
        last_execution_date: row.get_or_default("last_execution_date"),
        estimated_hours: number(row, "estimated_hours")?,
        discipline: pick(
            row,
            "discipline",
            Discipline::all(),
            Discipline::code,
            Discipline::display_name,
        )?,
        checklist_items: Vec::new(),
        comment: row.get("comment").map(String::from),
    })
}

#[cfg(test)]
mod tests {
    use super::super::parser::parse_csv;
    use super::*;

    fn first_row(text: &str) -> CsvRow {
        parse_csv(text).unwrap().remove(0)
    }

    #[test]
    fn test_asset_mapping_with_display_name_enum() {
        let row = first_row("code;description;criticality;location\nA-1;Насос;Высокая;Цех 1\n");
        let dto = asset_from_row(&row, "A-1").unwrap();
        assert_eq!(dto.code.as_deref(), Some("A-1"));
        assert_eq!(dto.description, "Насос");
        assert_eq!(dto.criticality, Criticality::High);
        assert_eq!(dto.location, "Цех 1");
        assert!(dto.comment.is_none());
    }

    #[test]
    fn test_unknown_enum_value_is_error() {
        let row = first_row("code,description,criticality\nA-1,Pump,extreme\n");
        assert!(asset_from_row(&row, "A-1").is_err());
    }

    #[test]
    fn test_material_numbers() {
        let row = first_row(
            "code;description;unit;stock_quantity;min_stock;unit_cost\nM-1;Масло;л;8;20;390,5\n",
        );
        let dto = material_from_row(&row, "M-1").unwrap();
        assert_eq!(dto.stock_quantity, 8.0);
        assert_eq!(dto.min_stock, 20.0);
        assert_eq!(dto.unit_cost, 390.5);

        let bad = first_row("code;description;unit;min_stock\nM-2;Масло;л;много\n");
        assert!(material_from_row(&bad, "M-2").is_err());
    }

    #[test]
    fn test_routine_mapping() {
        let row = first_row(
            "code,name,asset_code,frequency_days,last_execution_date,discipline\n\
             RT-1,Смена масла,AST-002,30,2024-01-01,lubrication\n",
        );
        let dto = routine_from_row(&row, "RT-1", "asset-uuid".into()).unwrap();
        assert_eq!(dto.name, "Смена масла");
        assert_eq!(dto.asset_id, "asset-uuid");
        assert_eq!(dto.frequency_days, 30);
        assert_eq!(dto.last_execution_date, "2024-01-01");
        assert_eq!(dto.discipline, Discipline::Lubrication);
    }

    #[test]
    fn test_routine_requires_frequency() {
        let row = first_row("code,name,asset_code\nRT-1,Осмотр,AST-001\n");
        assert!(routine_from_row(&row, "RT-1", "a".into()).is_err());
    }
}
