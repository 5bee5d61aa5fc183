//! Tab registry - маппинг tab.key → View.
//!
//! Ключи detail-табов имеют вид `<prefix><id>`; для нового заказа id = "new".

use crate::domain::a001_asset::ui::history::AssetHistory;
use crate::domain::a001_asset::ui::list::AssetList;
use crate::domain::a002_material::ui::list::MaterialList;
use crate::domain::a003_partner::ui::list::PartnerList;
use crate::domain::a004_warehouse::ui::list::WarehouseList;
use crate::domain::a005_contract::ui::list::ContractList;
use crate::domain::a006_maintenance_routine::ui::list::RoutineList;
use crate::domain::a007_maintenance_order::ui::calendar::OrderCalendar;
use crate::domain::a007_maintenance_order::ui::details::OrderDetails;
use crate::domain::a007_maintenance_order::ui::kanban::OrderKanban;
use crate::domain::a007_maintenance_order::ui::list::OrderList;
use crate::domain::a008_checklist_execution::ui::list::ChecklistList;
use crate::domain::a008_checklist_execution::ui::runner::ChecklistRunner;
use crate::layout::global_context::AppGlobalContext;
use crate::system::settings::SettingsForm;
use crate::usecases::u501_preventive_planning::PlannerView;
use crate::usecases::u502_csv_import::ImportWidget;
use leptos::logging::log;
use leptos::prelude::*;

pub const ORDER_DETAIL_PREFIX: &str = "a007_maintenance_order_detail_";
pub const CHECKLIST_DETAIL_PREFIX: &str = "a008_checklist_execution_detail_";
pub const ASSET_HISTORY_PREFIX: &str = "a001_asset_history_";

/// Ключ detail-таба заказа; `None` открывает форму нового заказа
pub fn order_detail_key(id: Option<&str>) -> String {
    format!("{}{}", ORDER_DETAIL_PREFIX, id.unwrap_or("new"))
}

pub fn checklist_detail_key(id: &str) -> String {
    format!("{}{}", CHECKLIST_DETAIL_PREFIX, id)
}

pub fn asset_history_key(asset_id: &str) -> String {
    format!("{}{}", ASSET_HISTORY_PREFIX, asset_id)
}

/// Рендерит содержимое таба по его ключу
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let close = Callback::new(move |_| tabs_store.close_tab(&key_for_close));

    match key {
        // Справочники
        "a001_asset" => view! { <AssetList /> }.into_any(),
        "a002_material" => view! { <MaterialList /> }.into_any(),
        "a003_partner" => view! { <PartnerList /> }.into_any(),
        "a004_warehouse" => view! { <WarehouseList /> }.into_any(),
        "a005_contract" => view! { <ContractList /> }.into_any(),
        k if k.starts_with(ASSET_HISTORY_PREFIX) => {
            let asset_id = k[ASSET_HISTORY_PREFIX.len()..].to_string();
            view! { <AssetHistory asset_id=asset_id /> }.into_any()
        }

        // Обслуживание
        "a006_maintenance_routine" => view! { <RoutineList /> }.into_any(),
        "a007_maintenance_order" => view! { <OrderList /> }.into_any(),
        "a007_maintenance_order_kanban" => view! { <OrderKanban /> }.into_any(),
        "a007_maintenance_order_calendar" => view! { <OrderCalendar /> }.into_any(),
        k if k.starts_with(ORDER_DETAIL_PREFIX) => {
            let id = match &k[ORDER_DETAIL_PREFIX.len()..] {
                "new" => None,
                id => Some(id.to_string()),
            };
            view! { <OrderDetails id=id tab_key=k.to_string() on_close=close /> }.into_any()
        }
        "a008_checklist_execution" => view! { <ChecklistList /> }.into_any(),
        k if k.starts_with(CHECKLIST_DETAIL_PREFIX) => {
            let id = k[CHECKLIST_DETAIL_PREFIX.len()..].to_string();
            view! { <ChecklistRunner id=id on_close=close /> }.into_any()
        }

        // Use cases
        "u501_preventive_planning" => view! { <PlannerView /> }.into_any(),
        "u502_csv_import" => view! { <ImportWidget /> }.into_any(),

        // System
        "sys_settings" => view! { <SettingsForm /> }.into_any(),

        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Раздел не найден"}</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_keys() {
        assert_eq!(order_detail_key(None), "a007_maintenance_order_detail_new");
        assert_eq!(
            order_detail_key(Some("abc")),
            "a007_maintenance_order_detail_abc"
        );
        assert!(checklist_detail_key("x").starts_with(CHECKLIST_DETAIL_PREFIX));
        assert!(asset_history_key("x").starts_with(ASSET_HISTORY_PREFIX));
    }
}
