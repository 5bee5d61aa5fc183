use crate::domain::a004_warehouse::ui::details::{model, WarehouseDetails};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::{confirm, ToastService};
use contracts::domain::a004_warehouse::Warehouse;
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
pub struct WarehouseRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub location: String,
    pub comment: String,
}

impl From<Warehouse> for WarehouseRow {
    fn from(w: Warehouse) -> Self {
        Self {
            id: w.to_string_id(),
            code: w.base.code,
            description: w.base.description,
            location: w.location,
            comment: w.base.comment.unwrap_or_default(),
        }
    }
}

impl Searchable for WarehouseRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.description.as_str(), self.location.as_str()]
    }
}

impl CsvExportable for WarehouseRow {
    fn headers() -> Vec<&'static str> {
        vec!["code", "description", "location", "comment"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.description.clone(),
            self.location.clone(),
            self.comment.clone(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn WarehouseList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let (items, set_items) = signal::<Vec<WarehouseRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (filter, set_filter) = signal(String::new());
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_all().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
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
            Some("max-width: min(600px, 95vw); width: min(600px, 95vw);".to_string()),
            move |handle| {
                let handle_for_save = handle.clone();
                let on_saved = Callback::new(move |_| {
                    handle_for_save.close();
                    ctx.notify_changed();
                });
                let on_cancel = Callback::new(move |_| handle.close());
                view! { <WarehouseDetails id=id.clone() on_saved=on_saved on_cancel=on_cancel /> }
                    .into_any()
            },
        );
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get_untracked().into_iter().collect();
        if ids.is_empty() || !confirm(&format!("Удалить выбранные склады? Количество: {}", ids.len())) {
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
                    <h1 class="header__title">{"Склады"}</h1>
                    <SearchInput on_change=Callback::new(move |v| set_filter.set(v)) />
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"Новый склад"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            if let Err(e) = export_to_csv(&visible.get_untracked(), "warehouses.csv") {
                                toast.error(e);
                            }
                        }
                    >
                        {icon("download")}
                        {"CSV"}
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
                            <th class="table__header-cell">{"Наименование"}</th>
                            <th class="table__header-cell">{"Расположение"}</th>
                            <th class="table__header-cell">{"Комментарий"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|row| {
                            let id_for_click = row.id.clone();
                            let id_for_checkbox = row.id.clone();
                            let id_for_toggle = row.id.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| open_details_modal(Some(id_for_click.clone()))>
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
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.location}</td>
                                    <td class="table__cell">{row.comment}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
