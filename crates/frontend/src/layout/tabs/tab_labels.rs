//! Tab labels - единственный источник правды для заголовков табов.
//!
//! Для коллекций заголовок берётся из `AggregateRoot::list_name()`,
//! для представлений, юзкейсов и системных страниц задан здесь.

use contracts::domain::a001_asset::Asset;
use contracts::domain::a002_material::Material;
use contracts::domain::a003_partner::Partner;
use contracts::domain::a004_warehouse::Warehouse;
use contracts::domain::a005_contract::Contract;
use contracts::domain::a006_maintenance_routine::MaintenanceRoutine;
use contracts::domain::a007_maintenance_order::MaintenanceOrder;
use contracts::domain::a008_checklist_execution::ChecklistExecution;
use contracts::domain::common::AggregateRoot;

/// Возвращает читаемый заголовок таба для данного ключа.
/// Для неизвестного ключа возвращает пустую строку.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Справочники ───────────────────────────────────────────────────
        "a001_asset" => Asset::list_name(),
        "a002_material" => Material::list_name(),
        "a003_partner" => Partner::list_name(),
        "a004_warehouse" => Warehouse::list_name(),
        "a005_contract" => Contract::list_name(),

        // ── Обслуживание ──────────────────────────────────────────────────
        "a006_maintenance_routine" => MaintenanceRoutine::list_name(),
        "a007_maintenance_order" => MaintenanceOrder::list_name(),
        "a007_maintenance_order_kanban" => "Канбан заказов",
        "a007_maintenance_order_calendar" => "Календарь заказов",
        "a008_checklist_execution" => ChecklistExecution::list_name(),

        // ── Use Cases (u5xx) ──────────────────────────────────────────────
        "u501_preventive_planning" => "Планирование ТО",
        "u502_csv_import" => "Импорт из CSV",

        // ── System ────────────────────────────────────────────────────────
        "sys_settings" => "Настройки",

        _ => "",
    }
}

/// Формирует заголовок detail-таба: «<entity> · <identifier>».
///
/// Пример: `detail_tab_label("Заказ", "OT-000042")` → `"Заказ · OT-000042"`
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_have_labels() {
        for key in [
            "a001_asset",
            "a007_maintenance_order_kanban",
            "u501_preventive_planning",
            "sys_settings",
        ] {
            assert!(!tab_label_for_key(key).is_empty(), "{}", key);
        }
        assert_eq!(tab_label_for_key("unknown"), "");
    }

    #[test]
    fn test_detail_label() {
        assert_eq!(detail_tab_label("Заказ", "OT-000042"), "Заказ · OT-000042");
    }
}
