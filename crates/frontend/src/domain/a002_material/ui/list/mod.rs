use crate::domain::a002_material::ui::details::{model, MaterialDetails};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::{confirm, ToastService};
use contracts::domain::a002_material::Material;
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
pub struct MaterialRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub unit: String,
    pub stock_quantity: f64,
    pub min_stock: f64,
    pub unit_cost: f64,
    pub needs_replenishment: bool,
    pub comment: String,
}

impl From<Material> for MaterialRow {
    fn from(m: Material) -> Self {
        let needs_replenishment = m.needs_replenishment();
        Self {
            id: m.to_string_id(),
            code: m.base.code,
            description: m.base.description,
            unit: m.unit,
            stock_quantity: m.stock_quantity,
            min_stock: m.min_stock,
            unit_cost: m.unit_cost,
            needs_replenishment,
            comment: m.base.comment.unwrap_or_default(),
        }
    }
}

impl Searchable for MaterialRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.description.as_str()]
    }
}

impl CsvExportable for MaterialRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "code",
            "description",
            "unit",
            "stock_quantity",
            "min_stock",
            "unit_cost",
            "comment",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.description.clone(),
            self.unit.clone(),
            self.stock_quantity.to_string(),
            self.min_stock.to_string(),
            self.unit_cost.to_string(),
            self.comment.clone(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MaterialList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let (items, set_items) = signal::<Vec<MaterialRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (filter, set_filter) = signal(String::new());
    let (only_low_stock, set_only_low_stock) = signal(false);
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

    let visible = Memo::new(move |_| {
        let mut rows = filter_list(&items.get(), &filter.get());
        if only_low_stock.get() {
            rows.retain(|r| r.needs_replenishment);
        }
        rows
    });
    let low_stock_count = move || items.with(|rows| rows.iter().filter(|r| r.needs_replenishment).count());

    let open_details_modal = move |id: Option<String>| {
        modal_stack.clear();
        modal_stack.push_with_frame(
            Some("max-width: min(800px, 95vw); width: min(800px, 95vw);".to_string()),
            move |handle| {
                let handle_for_save = handle.clone();
                let on_saved = Callback::new(move |_| {
                    handle_for_save.close();
                    toast.success("Материал сохранён");
                    ctx.notify_changed();
                });
                let on_cancel = Callback::new(move |_| handle.close());
                view! { <MaterialDetails id=id.clone() on_saved=on_saved on_cancel=on_cancel /> }
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
        if ids.is_empty()
            || !confirm(&format!("Удалить выбранные материалы? Количество: {}", ids.len()))
        {
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

    let fill_test_data = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match model::insert_test_data().await {
                Ok(()) => ctx.notify_changed(),
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Материалы"}</h1>
                    <SearchInput on_change=Callback::new(move |v| set_filter.set(v)) />
                    <label class="header__toggle">
                        <input
                            type="checkbox"
                            prop:checked=only_low_stock
                            on:change=move |ev| set_only_low_stock.set(event_target_checked(&ev))
                        />
                        {move || format!("Ниже минимума ({})", low_stock_count())}
                    </label>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"Новый материал"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            if let Err(e) = export_to_csv(&visible.get_untracked(), "materials.csv") {
                                toast.error(e);
                            }
                        }
                    >
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
                            <th class="table__header-cell table__header-cell--checkbox"></th>
                            <th class="table__header-cell">{"Код"}</th>
                            <th class="table__header-cell">{"Наименование"}</th>
                            <th class="table__header-cell">{"Ед."}</th>
                            <th class="table__header-cell table__header-cell--right">{"Остаток"}</th>
                            <th class="table__header-cell table__header-cell--right">{"Минимум"}</th>
                            <th class="table__header-cell table__header-cell--right">{"Цена"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().into_iter().map(|row| {
                            let id_for_click = row.id.clone();
                            let id_for_checkbox = row.id.clone();
                            let id_for_toggle = row.id.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--warning=row.needs_replenishment
                                    on:click=move |_| open_details_modal(Some(id_for_click.clone()))
                                >
                                    <TableCheckbox
                                        checked=Signal::derive(move || selected.get().contains(&id_for_checkbox))
                                        on_change=Callback::new(move |checked| toggle_select(id_for_toggle.clone(), checked))
                                    />
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">
                                        {row.description}
                                        {row.needs_replenishment.then(|| view! {
                                            <span class="badge badge--warning" title="Остаток ниже минимального">
                                                {icon("alert-triangle")}
                                                {"закупка"}
                                            </span>
                                        })}
                                    </td>
                                    <td class="table__cell">{row.unit}</td>
                                    <td class="table__cell table__cell--right">{format!("{:.2}", row.stock_quantity)}</td>
                                    <td class="table__cell table__cell--right">{format!("{:.2}", row.min_stock)}</td>
                                    <td class="table__cell table__cell--right">{format!("{:.2}", row.unit_cost)}</td>
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
    use contracts::usecases::u502_csv_import::ImportCollection;

    #[test]
    fn test_row_flags_low_stock() {
        let mut m = Material::new_for_insert("MAT-1".into(), "Ремень".into(), "шт".into());
        m.stock_quantity = 1.0;
        m.min_stock = 3.0;
        let row = MaterialRow::from(m);
        assert!(row.needs_replenishment);
        assert_eq!(
            MaterialRow::headers(),
            ImportCollection::Material.known_headers().to_vec()
        );
    }
}
