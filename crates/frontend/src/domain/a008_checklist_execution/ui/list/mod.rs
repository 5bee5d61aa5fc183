use crate::domain::a001_asset::ui::details::model as asset_model;
use crate::domain::a008_checklist_execution::ui::model;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::registry::checklist_detail_key;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::toast::{confirm, ToastService};
use contracts::domain::a008_checklist_execution::{CheckResult, ChecklistExecution};
use leptos::prelude::*;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, PartialEq)]
pub struct ChecklistRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub asset_name: String,
    pub inspector: String,
    pub execution_date: String,
    pub result: CheckResult,
    pub failed_count: usize,
    pub has_corrective_order: bool,
}

impl ChecklistRow {
    pub fn build(e: &ChecklistExecution, asset_names: &HashMap<String, String>) -> Self {
        Self {
            id: e.to_string_id(),
            code: e.base.code.clone(),
            description: e.base.description.clone(),
            asset_name: asset_names
                .get(&e.asset_id)
                .cloned()
                .unwrap_or_else(|| e.asset_id.clone()),
            inspector: e.inspector.clone(),
            execution_date: format_date_opt(e.execution_date),
            result: e.overall_result(),
            failed_count: e.failed_items().len(),
            has_corrective_order: e.corrective_order_id.is_some(),
        }
    }
}

impl Searchable for ChecklistRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.code.as_str(),
            self.description.as_str(),
            self.asset_name.as_str(),
            self.inspector.as_str(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ChecklistList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let (items, set_items) = signal::<Vec<ChecklistRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (filter, set_filter) = signal(String::new());
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let asset_names: HashMap<String, String> = asset_model::fetch_all()
                .await
                .unwrap_or_default()
                .into_iter()
                .map(|a| (a.to_string_id(), a.base.description))
                .collect();
            match model::fetch_all().await {
                Ok(mut v) => {
                    v.sort_by(|a, b| b.execution_date.cmp(&a.execution_date));
                    set_items.set(v.iter().map(|e| ChecklistRow::build(e, &asset_names)).collect());
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

    let visible = Memo::new(move |_| filter_list(&items.get(), &filter.get()));

    let delete_selected = move || {
        let ids: Vec<String> = selected.get_untracked().into_iter().collect();
        if ids.is_empty() || !confirm(&format!("Удалить выбранные осмотры? Количество: {}", ids.len())) {
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
                    <h1 class="header__title">{"Осмотры"}</h1>
                    <SearchInput on_change=Callback::new(move |v| set_filter.set(v)) />
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
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

            <div class="info-box">
                {"Новый осмотр создаётся из регламента ТО кнопкой чек-листа в списке \"План ТО\"."}
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
                            <th class="table__header-cell">{"Осмотр"}</th>
                            <th class="table__header-cell">{"Инспектор"}</th>
                            <th class="table__header-cell">{"Результат"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|row| {
                            let id_for_click = row.id.clone();
                            let code_for_click = row.code.clone();
                            let id_for_checkbox = row.id.clone();
                            let id_for_toggle = row.id.clone();
                            let result_caption = if row.failed_count > 0 {
                                format!("{} ({})", row.result.display_name(), row.failed_count)
                            } else {
                                row.result.display_name().to_string()
                            };
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| ctx.open_tab(
                                        &checklist_detail_key(&id_for_click),
                                        &detail_tab_label("Осмотр", &code_for_click),
                                    )
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
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.execution_date}</td>
                                    <td class="table__cell">{row.asset_name}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.inspector}</td>
                                    <td class="table__cell">
                                        <span class=format!("badge badge--check-{}", row.result.code())>{result_caption}</span>
                                        {row.has_corrective_order.then(|| view! {
                                            <span class="badge badge--neutral" title="Создан аварийный заказ">{icon("tool")}</span>
                                        })}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
