use crate::domain::a003_partner::ui::details::model as partner_model;
use crate::domain::a005_contract::ui::details::{model, ContractDetails};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::date_utils::{format_date_opt, today};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::{confirm, ToastService};
use contracts::domain::a005_contract::Contract;
use leptos::prelude::*;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, PartialEq)]
pub struct ContractRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub partner_name: String,
    pub period: String,
    pub amount: f64,
    pub is_active: bool,
}

impl ContractRow {
    /// `partners`: id контрагента → наименование
    pub fn build(c: Contract, partners: &HashMap<String, String>) -> Self {
        let is_active = c.is_active_on(today());
        Self {
            id: c.to_string_id(),
            partner_name: partners
                .get(&c.partner_id)
                .cloned()
                .unwrap_or_else(|| c.partner_id.clone()),
            period: format!(
                "{} - {}",
                format_date_opt(c.start_date),
                format_date_opt(c.end_date)
            ),
            code: c.base.code,
            description: c.base.description,
            amount: c.amount,
            is_active,
        }
    }
}

impl Searchable for ContractRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.code.as_str(),
            self.description.as_str(),
            self.partner_name.as_str(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ContractList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let (items, set_items) = signal::<Vec<ContractRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (filter, set_filter) = signal(String::new());
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let partners: HashMap<String, String> = partner_model::fetch_all()
                .await
                .unwrap_or_default()
                .into_iter()
                .map(|p| (p.to_string_id(), p.base.description))
                .collect();
            match model::fetch_all().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(|c| ContractRow::build(c, &partners)).collect());
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
                    toast.success("Договор сохранён");
                    ctx.notify_changed();
                });
                let on_cancel = Callback::new(move |_| handle.close());
                view! { <ContractDetails id=id.clone() on_saved=on_saved on_cancel=on_cancel /> }
                    .into_any()
            },
        );
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get_untracked().into_iter().collect();
        if ids.is_empty() || !confirm(&format!("Удалить выбранные договоры? Количество: {}", ids.len())) {
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
                    <h1 class="header__title">{"Договоры"}</h1>
                    <SearchInput on_change=Callback::new(move |v| set_filter.set(v)) />
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"Новый договор"}
                    </button>
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

            <ErrorBox error=error />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox"></th>
                            <th class="table__header-cell">{"Номер"}</th>
                            <th class="table__header-cell">{"Предмет"}</th>
                            <th class="table__header-cell">{"Контрагент"}</th>
                            <th class="table__header-cell">{"Период"}</th>
                            <th class="table__header-cell table__header-cell--right">{"Сумма"}</th>
                            <th class="table__header-cell">{"Статус"}</th>
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
                                    <td class="table__cell">{row.partner_name}</td>
                                    <td class="table__cell">{row.period}</td>
                                    <td class="table__cell table__cell--right">{format!("{:.2}", row.amount)}</td>
                                    <td class="table__cell">
                                        {if row.is_active {
                                            view! { <span class="badge badge--success">{"Действует"}</span> }.into_any()
                                        } else {
                                            view! { <span class="badge badge--neutral">{"Не действует"}</span> }.into_any()
                                        }}
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
