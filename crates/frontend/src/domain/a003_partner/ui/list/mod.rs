use crate::domain::a003_partner::ui::details::{model, PartnerDetails};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::{confirm, ToastService};
use contracts::domain::a003_partner::{Partner, PartnerKind};
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
pub struct PartnerRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub kind: PartnerKind,
    pub tax_id: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub comment: String,
}

impl From<Partner> for PartnerRow {
    fn from(p: Partner) -> Self {
        Self {
            id: p.to_string_id(),
            code: p.base.code,
            description: p.base.description,
            kind: p.kind,
            tax_id: p.tax_id,
            email: p.email,
            phone: p.phone,
            address: p.address,
            comment: p.base.comment.unwrap_or_default(),
        }
    }
}

impl Searchable for PartnerRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.code.as_str(),
            self.description.as_str(),
            self.tax_id.as_str(),
            self.email.as_str(),
        ]
    }
}

impl CsvExportable for PartnerRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "code",
            "description",
            "kind",
            "tax_id",
            "email",
            "phone",
            "address",
            "comment",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.description.clone(),
            self.kind.code().to_string(),
            self.tax_id.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.address.clone(),
            self.comment.clone(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PartnerList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let (items, set_items) = signal::<Vec<PartnerRow>>(Vec::new());
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
            Some("max-width: min(800px, 95vw); width: min(800px, 95vw);".to_string()),
            move |handle| {
                let handle_for_save = handle.clone();
                let on_saved = Callback::new(move |_| {
                    handle_for_save.close();
                    ctx.notify_changed();
                });
                let on_cancel = Callback::new(move |_| handle.close());
                view! { <PartnerDetails id=id.clone() on_saved=on_saved on_cancel=on_cancel /> }
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
            || !confirm(&format!("Удалить выбранных контрагентов? Количество: {}", ids.len()))
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
                    <h1 class="header__title">{"Контрагенты"}</h1>
                    <SearchInput on_change=Callback::new(move |v| set_filter.set(v)) placeholder="Код, наименование, ИНН..." />
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"Новый контрагент"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            if let Err(e) = export_to_csv(&visible.get_untracked(), "partners.csv") {
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
                            <th class="table__header-cell">{"Вид"}</th>
                            <th class="table__header-cell">{"ИНН"}</th>
                            <th class="table__header-cell">{"E-mail"}</th>
                            <th class="table__header-cell">{"Телефон"}</th>
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
                                        on_change=Callback::new(move |checked| toggle_select(id_for_toggle.clone(), checked))
                                    />
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.kind.display_name()}</td>
                                    <td class="table__cell">{row.tax_id}</td>
                                    <td class="table__cell">{row.email}</td>
                                    <td class="table__cell">{row.phone}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
