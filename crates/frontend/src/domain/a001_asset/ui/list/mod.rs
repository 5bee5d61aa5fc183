use crate::domain::a001_asset::ui::details::{model, AssetDetails};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::registry::asset_history_key;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::{confirm, ToastService};
use contracts::domain::a001_asset::{Asset, AssetStatus, Criticality};
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
pub struct AssetRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub criticality: Criticality,
    pub status: AssetStatus,
    pub comment: String,
}

impl From<Asset> for AssetRow {
    fn from(a: Asset) -> Self {
        Self {
            id: a.to_string_id(),
            code: a.base.code,
            description: a.base.description,
            location: a.location,
            category: a.category,
            manufacturer: a.manufacturer,
            model: a.model,
            serial_number: a.serial_number,
            criticality: a.criticality,
            status: a.status,
            comment: a.base.comment.unwrap_or_default(),
        }
    }
}

impl Searchable for AssetRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.code.as_str(),
            self.description.as_str(),
            self.location.as_str(),
            self.category.as_str(),
            self.serial_number.as_str(),
        ]
    }
}

/// Колонки совпадают с заголовками импорта, выгрузку можно загрузить обратно
impl CsvExportable for AssetRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "code",
            "description",
            "location",
            "category",
            "manufacturer",
            "model",
            "serial_number",
            "criticality",
            "comment",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.description.clone(),
            self.location.clone(),
            self.category.clone(),
            self.manufacturer.clone(),
            self.model.clone(),
            self.serial_number.clone(),
            self.criticality.code().to_string(),
            self.comment.clone(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AssetList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let (items, set_items) = signal::<Vec<AssetRow>>(Vec::new());
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
            Some("max-width: min(900px, 95vw); width: min(900px, 95vw);".to_string()),
            move |handle| {
                let handle_for_save = handle.clone();
                let on_saved = Callback::new(move |_| {
                    handle_for_save.close();
                    toast.success("Актив сохранён");
                    ctx.notify_changed();
                });
                let on_cancel = Callback::new(move |_| handle.close());
                view! { <AssetDetails id=id.clone() on_saved=on_saved on_cancel=on_cancel /> }
                    .into_any()
            },
        );
    };

    let toggle_select = move |id: String, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get_untracked().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        if !confirm(&format!("Удалить выбранные активы? Количество: {}", ids.len())) {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            let mut failed = 0;
            for id in &ids {
                if let Err(e) = model::delete_by_id(id).await {
                    log::warn!("delete asset {}: {}", id, e);
                    failed += 1;
                }
            }
            if failed > 0 {
                toast.error(format!("Не удалось удалить записей: {}", failed));
            }
            set_selected.set(HashSet::new());
            ctx.notify_changed();
        });
    };

    let fill_test_data = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match model::insert_test_data().await {
                Ok(()) => {
                    toast.success("Тестовые активы добавлены");
                    ctx.notify_changed();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let export = move || {
        if let Err(e) = export_to_csv(&visible.get_untracked(), "assets.csv") {
            toast.error(e);
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Активы"}</h1>
                    <SearchInput on_change=Callback::new(move |v| set_filter.set(v)) placeholder="Код, наименование, место..." />
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"Новый актив"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| export()>
                        {icon("download")}
                        {"CSV"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fill_test_data()>
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
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    on:change=move |ev| {
                                        if event_target_checked(&ev) {
                                            set_selected.set(visible.get().into_iter().map(|r| r.id).collect());
                                        } else {
                                            set_selected.set(HashSet::new());
                                        }
                                    }
                                />
                            </th>
                            <th class="table__header-cell">{"Код"}</th>
                            <th class="table__header-cell">{"Наименование"}</th>
                            <th class="table__header-cell">{"Расположение"}</th>
                            <th class="table__header-cell">{"Категория"}</th>
                            <th class="table__header-cell">{"Производитель / модель"}</th>
                            <th class="table__header-cell">{"Критичность"}</th>
                            <th class="table__header-cell">{"Состояние"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|row| {
                            let id_for_click = row.id.clone();
                            let id_for_checkbox = row.id.clone();
                            let id_for_toggle = row.id.clone();
                            let id_for_history = row.id.clone();
                            let title_for_history = row.description.clone();
                            let is_selected = selected.get().contains(&row.id);
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected=is_selected
                                    on:click=move |_| open_details_modal(Some(id_for_click.clone()))
                                >
                                    <TableCheckbox
                                        checked=Signal::derive(move || selected.get().contains(&id_for_checkbox))
                                        on_change=Callback::new(move |checked| toggle_select(id_for_toggle.clone(), checked))
                                    />
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.location}</td>
                                    <td class="table__cell">{row.category}</td>
                                    <td class="table__cell">{format!("{} {}", row.manufacturer, row.model)}</td>
                                    <td class="table__cell">
                                        <span class=format!("badge badge--{}", row.criticality.code())>
                                            {row.criticality.display_name()}
                                        </span>
                                    </td>
                                    <td class="table__cell">{row.status.display_name()}</td>
                                    <td class="table__cell" on:click=|e| e.stop_propagation()>
                                        <button
                                            class="button button--small"
                                            title="История обслуживания"
                                            on:click=move |_| ctx.open_tab(
                                                &asset_history_key(&id_for_history),
                                                &format!("История: {}", title_for_history),
                                            )
                                        >
                                            {icon("clock")}
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

    fn row() -> AssetRow {
        AssetRow {
            id: "1".into(),
            code: "BOMBA-01".into(),
            description: "Насос; подача \"А\"".into(),
            location: "Цех 1".into(),
            category: "Насосы".into(),
            manufacturer: "Grundfos".into(),
            model: "CR 10".into(),
            serial_number: "SN-77".into(),
            criticality: Criticality::High,
            status: AssetStatus::Operational,
            comment: String::new(),
        }
    }

    #[test]
    fn test_csv_headers_match_import() {
        use contracts::usecases::u502_csv_import::ImportCollection;
        assert_eq!(
            AssetRow::headers(),
            ImportCollection::Asset.known_headers().to_vec()
        );
        assert_eq!(row().to_csv_row()[7], Criticality::High.code());
    }

    #[test]
    fn test_search_by_serial_number() {
        assert!(row().matches_filter("sn-77"));
        assert!(row().matches_filter("цех"));
        assert!(!row().matches_filter("компрессор"));
    }
}
