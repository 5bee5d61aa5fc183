use crate::domain::a001_asset::ui::details::model as asset_model;
use crate::domain::a007_maintenance_order::ui::details::model;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::registry::order_detail_key;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::date_utils::{format_date, format_date_opt};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::toast::{confirm, ToastService};
use contracts::domain::a007_maintenance_order::{filter_orders, MaintenanceOrder, OrderFilter};
use contracts::enums::{OrderStatus, OrderType, Priority};
use contracts::shared::date::parse_date;
use leptos::prelude::*;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, PartialEq)]
pub struct OrderRow {
    pub id: String,
    pub number: String,
    pub description: String,
    pub asset_name: String,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub priority: Priority,
    pub planned_date: String,
    pub closed_date: String,
    pub assigned_to: String,
    pub materials_total: f64,
}

impl OrderRow {
    pub fn build(o: &MaintenanceOrder, asset_names: &HashMap<String, String>) -> Self {
        Self {
            id: o.to_string_id(),
            number: o.number().to_string(),
            description: o.base.description.clone(),
            asset_name: asset_names
                .get(&o.asset_id)
                .cloned()
                .unwrap_or_else(|| o.asset_id.clone()),
            order_type: o.order_type,
            status: o.status,
            priority: o.priority,
            planned_date: format_date(o.effective_date()),
            closed_date: format_date_opt(o.closed_date),
            assigned_to: o.assigned_to.clone(),
            materials_total: o.materials_total(),
        }
    }
}

impl CsvExportable for OrderRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Номер",
            "Описание",
            "Актив",
            "Тип",
            "Статус",
            "Приоритет",
            "Дата",
            "Закрыт",
            "Исполнитель",
            "Материалы",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.number.clone(),
            self.description.clone(),
            self.asset_name.clone(),
            self.order_type.display_name().to_string(),
            self.status.display_name().to_string(),
            self.priority.display_name().to_string(),
            self.planned_date.clone(),
            self.closed_date.clone(),
            self.assigned_to.clone(),
            format!("{:.2}", self.materials_total),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let (orders, set_orders) = signal::<Vec<MaintenanceOrder>>(Vec::new());
    let (asset_names, set_asset_names) = signal::<HashMap<String, String>>(HashMap::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let filter = RwSignal::new(OrderFilter::default());
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match asset_model::fetch_all().await {
                Ok(list) => set_asset_names.set(
                    list.into_iter()
                        .map(|a| (a.to_string_id(), a.base.description))
                        .collect(),
                ),
                Err(e) => set_error.set(Some(e)),
            }
            match model::fetch_all().await {
                Ok(v) => {
                    set_orders.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    Effect::new(move |_| {
        ctx.data_version.track();
        fetch();
    });

    let rows = Memo::new(move |_| {
        let names = asset_names.get();
        let mut filtered = filter_orders(&orders.get(), &filter.get());
        filtered.sort_by(|a, b| b.effective_date().cmp(&a.effective_date()));
        filtered
            .iter()
            .map(|o| OrderRow::build(o, &names))
            .collect::<Vec<_>>()
    });

    let asset_options = move || {
        let mut options: Vec<(String, String)> = asset_names
            .get()
            .into_iter()
            .collect();
        options.sort_by(|a, b| a.1.cmp(&b.1));
        options
    };

    let open_order = move |id: Option<String>, number: String| {
        let title = match &id {
            Some(_) => detail_tab_label("Заказ", &number),
            None => "Новый заказ".to_string(),
        };
        ctx.open_tab(&order_detail_key(id.as_deref()), &title);
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get_untracked().into_iter().collect();
        if ids.is_empty() || !confirm(&format!("Удалить выбранные заказы? Количество: {}", ids.len())) {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            for id in &ids {
                if let Err(e) = model::delete_by_id(id).await {
                    toast.error(e);
                }
            }
            set_selected.set(HashSet::new());
            ctx.notify_changed();
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Заказы на ТО"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_order(None, String::new())>
                        {icon("plus")}
                        {"Новый заказ"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            if let Err(e) = export_to_csv(&rows.get_untracked(), "orders.csv") {
                                toast.error(e);
                            }
                        }
                    >
                        {icon("download")}
                        {"CSV"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| delete_selected()
                        disabled=move || selected.get().is_empty()
                    >
                        {icon("delete")}
                        {move || format!("Удалить ({})", selected.get().len())}
                    </button>
                </div>
            </div>

            <div class="filter-panel">
                <input
                    type="text"
                    class="filter-panel__input"
                    placeholder="Номер или описание"
                    prop:value=move || filter.get().search.unwrap_or_default()
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        filter.update(|f| f.search = if v.trim().is_empty() { None } else { Some(v) });
                    }
                />
                <select
                    class="filter-panel__select"
                    on:change=move |ev| {
                        let code = event_target_value(&ev);
                        filter.update(|f| f.status = OrderStatus::from_code(&code));
                    }
                >
                    <option value="">{"Все статусы"}</option>
                    {OrderStatus::all().into_iter().map(|s| view! {
                        <option value=s.code()>{s.display_name()}</option>
                    }).collect_view()}
                </select>
                <select
                    class="filter-panel__select"
                    on:change=move |ev| {
                        let code = event_target_value(&ev);
                        filter.update(|f| f.order_type = OrderType::from_code(&code));
                    }
                >
                    <option value="">{"Все типы"}</option>
                    {OrderType::all().into_iter().map(|t| view! {
                        <option value=t.code()>{t.display_name()}</option>
                    }).collect_view()}
                </select>
                <select
                    class="filter-panel__select"
                    on:change=move |ev| {
                        let id = event_target_value(&ev);
                        filter.update(|f| f.asset_id = if id.is_empty() { None } else { Some(id) });
                    }
                >
                    <option value="">{"Все активы"}</option>
                    {move || asset_options().into_iter().map(|(id, name)| view! {
                        <option value=id>{name}</option>
                    }).collect_view()}
                </select>
                <label class="filter-panel__label">{"с"}</label>
                <input
                    type="date"
                    class="filter-panel__input"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        filter.update(|f| f.date_from = parse_date(&v));
                    }
                />
                <label class="filter-panel__label">{"по"}</label>
                <input
                    type="date"
                    class="filter-panel__input"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        filter.update(|f| f.date_to = parse_date(&v));
                    }
                />
                <span class="filter-panel__count">{move || format!("Найдено: {}", rows.get().len())}</span>
            </div>

            <ErrorBox error=error />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox"></th>
                            <th class="table__header-cell">{"Номер"}</th>
                            <th class="table__header-cell">{"Дата"}</th>
                            <th class="table__header-cell">{"Актив"}</th>
                            <th class="table__header-cell">{"Описание"}</th>
                            <th class="table__header-cell">{"Тип"}</th>
                            <th class="table__header-cell">{"Приоритет"}</th>
                            <th class="table__header-cell">{"Статус"}</th>
                            <th class="table__header-cell">{"Исполнитель"}</th>
                            <th class="table__header-cell table__header-cell--right">{"Материалы"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| {
                            let id_for_click = row.id.clone();
                            let number_for_click = row.number.clone();
                            let id_for_checkbox = row.id.clone();
                            let id_for_toggle = row.id.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| open_order(Some(id_for_click.clone()), number_for_click.clone())
                                >
                                    <TableCheckbox
                                        checked=Signal::derive(move || selected.get().contains(&id_for_checkbox))
                                        on_change=Callback::new(move |checked: bool| set_selected.update(|s| {
                                            if checked {
                                                s.insert(id_for_toggle.clone());
                                            } else {
                                                s.remove(&id_for_toggle);
                                            }
                                        }))
                                    />
                                    <td class="table__cell">{row.number}</td>
                                    <td class="table__cell">{row.planned_date}</td>
                                    <td class="table__cell">{row.asset_name}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.order_type.display_name()}</td>
                                    <td class="table__cell">
                                        <span class=format!("badge badge--{}", row.priority.code())>{row.priority.display_name()}</span>
                                    </td>
                                    <td class="table__cell">
                                        <span class=format!("badge badge--status-{}", row.status.code())>{row.status.display_name()}</span>
                                    </td>
                                    <td class="table__cell">{row.assigned_to}</td>
                                    <td class="table__cell table__cell--right">{format!("{:.2}", row.materials_total)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_row_uses_effective_date_and_asset_name() {
        let created = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut order = MaintenanceOrder::new_for_insert(
            "OT-000001".into(),
            "Замена сальника".into(),
            "a1".into(),
            OrderType::Corrective,
            created,
        );
        let names = HashMap::from([("a1".to_string(), "Насос".to_string())]);
        assert_eq!(OrderRow::build(&order, &names).planned_date, "01.03.2024");

        order.planned_date = NaiveDate::from_ymd_opt(2024, 3, 15);
        let row = OrderRow::build(&order, &names);
        assert_eq!(row.planned_date, "15.03.2024");
        assert_eq!(row.asset_name, "Насос");
        assert_eq!(row.closed_date, "-");
        assert_eq!(row.to_csv_row().len(), OrderRow::headers().len());
    }
}
