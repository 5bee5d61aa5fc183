use crate::domain::a001_asset::ui::details::model as asset_model;
use crate::domain::a006_maintenance_routine::ui::details::{model, RoutineDetails};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::registry::checklist_detail_key;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::date_utils::{format_date_opt, today};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::{confirm, ToastService};
use contracts::domain::a006_maintenance_routine::{Discipline, MaintenanceRoutine};
use leptos::prelude::*;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, PartialEq)]
pub struct RoutineRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub asset_name: String,
    pub discipline: Discipline,
    pub frequency_days: u32,
    pub last_execution: String,
    pub next_date: String,
    /// Дней до срока; `None`, если дата последнего выполнения неизвестна
    pub days_left: Option<i64>,
    pub checklist_len: usize,
}

impl RoutineRow {
    pub fn build(r: MaintenanceRoutine, asset_names: &HashMap<String, String>) -> Self {
        let next = r.next_date();
        Self {
            id: r.to_string_id(),
            code: r.base.code.clone(),
            name: r.name().to_string(),
            asset_name: asset_names
                .get(&r.asset_id)
                .cloned()
                .unwrap_or_else(|| r.asset_id.clone()),
            discipline: r.discipline,
            frequency_days: r.frequency_days,
            last_execution: format_date_opt(r.last_execution_date),
            next_date: format_date_opt(next),
            days_left: next.map(|d| (d - today()).num_days()),
            checklist_len: r.checklist_items.len(),
        }
    }
}

impl Searchable for RoutineRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.name.as_str(), self.asset_name.as_str()]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn RoutineList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let (items, set_items) = signal::<Vec<RoutineRow>>(Vec::new());
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
                Ok(v) => {
                    set_items.set(
                        v.into_iter()
                            .map(|r| RoutineRow::build(r, &asset_names))
                            .collect(),
                    );
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

    let open_details_modal = move |id: Option<String>| {
        modal_stack.clear();
        modal_stack.push_with_frame(
            Some("max-width: min(960px, 95vw); width: min(960px, 95vw);".to_string()),
            move |handle| {
                let handle_for_save = handle.clone();
                let on_saved = Callback::new(move |_| {
                    handle_for_save.close();
                    toast.success("Регламент сохранён");
                    ctx.notify_changed();
                });
                let on_cancel = Callback::new(move |_| handle.close());
                view! { <RoutineDetails id=id.clone() on_saved=on_saved on_cancel=on_cancel /> }
                    .into_any()
            },
        );
    };

    let start_checklist = move |id: String, name: String| {
        wasm_bindgen_futures::spawn_local(async move {
            match model::start_checklist(&id).await {
                Ok(execution_id) => {
                    ctx.notify_changed();
                    ctx.open_tab(
                        &checklist_detail_key(&execution_id),
                        &detail_tab_label("Осмотр", &name),
                    );
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get_untracked().into_iter().collect();
        if ids.is_empty() || !confirm(&format!("Удалить выбранные регламенты? Количество: {}", ids.len())) {
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
                    <h1 class="header__title">{"План ТО"}</h1>
                    <SearchInput on_change=Callback::new(move |v| set_filter.set(v)) placeholder="Код, регламент, актив..." />
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"Новый регламент"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            wasm_bindgen_futures::spawn_local(async move {
                                match model::insert_test_data().await {
                                    Ok(()) => ctx.notify_changed(),
                                    Err(e) => toast.error(e),
                                }
                            });
                        }
                    >
                        {icon("database")}
                        {"Тестовые данные"}
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

            <ErrorBox error=error />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox"></th>
                            <th class="table__header-cell">{"Код"}</th>
                            <th class="table__header-cell">{"Регламент"}</th>
                            <th class="table__header-cell">{"Актив"}</th>
                            <th class="table__header-cell">{"Дисциплина"}</th>
                            <th class="table__header-cell table__header-cell--right">{"Период, дн."}</th>
                            <th class="table__header-cell">{"Последнее"}</th>
                            <th class="table__header-cell">{"Следующее"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|row| {
                            let id_for_click = row.id.clone();
                            let id_for_checkbox = row.id.clone();
                            let id_for_toggle = row.id.clone();
                            let id_for_checklist = row.id.clone();
                            let name_for_checklist = row.name.clone();
                            let overdue = row.days_left.is_some_and(|d| d < 0);
                            let has_checklist = row.checklist_len > 0;
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--danger=overdue
                                    on:click=move |_| open_details_modal(Some(id_for_click.clone()))
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
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.asset_name}</td>
                                    <td class="table__cell">{row.discipline.display_name()}</td>
                                    <td class="table__cell table__cell--right">{row.frequency_days}</td>
                                    <td class="table__cell">{row.last_execution}</td>
                                    <td class="table__cell">{row.next_date}</td>
                                    <td class="table__cell" on:click=|e| e.stop_propagation()>
                                        <button
                                            class="button button--small"
                                            title="Провести осмотр по чек-листу"
                                            disabled=!has_checklist
                                            on:click=move |_| start_checklist(id_for_checklist.clone(), name_for_checklist.clone())
                                        >
                                            {icon("check-square")}
                                        </button>
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    #[test]
    fn test_row_without_last_execution_has_no_due_date() {
        let routine = MaintenanceRoutine::new_for_insert(
            "PM-1".into(),
            "Смазка подшипников".into(),
            "asset-1".into(),
            30,
        );
        let row = RoutineRow::build(routine, &HashMap::new());
        assert_eq!(row.days_left, None);
        assert_eq!(row.next_date, "-");
        assert_eq!(row.asset_name, "asset-1");
    }

    #[test]
    fn test_row_overdue_days() {
        let mut routine = MaintenanceRoutine::new_for_insert(
            "PM-2".into(),
            "Осмотр".into(),
            "asset-1".into(),
            10,
        );
        routine.last_execution_date = today().checked_sub_days(Days::new(15));
        let names = HashMap::from([("asset-1".to_string(), "Насос".to_string())]);
        let row = RoutineRow::build(routine, &names);
        assert_eq!(row.days_left, Some(-5));
        assert_eq!(row.asset_name, "Насос");
    }
}
