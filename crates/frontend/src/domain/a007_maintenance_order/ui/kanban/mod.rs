//! Канбан заказов: четыре колонки по статусам, перевод карточки в
//! следующий статус кнопкой.

use crate::domain::a001_asset::ui::details::model as asset_model;
use crate::domain::a007_maintenance_order::ui::details::model;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::registry::order_detail_key;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::domain::a007_maintenance_order::{group_by_status, MaintenanceOrder, OrderFilter};
use contracts::enums::OrderType;
use leptos::prelude::*;
use std::collections::HashMap;

#[component]
#[allow(non_snake_case)]
pub fn OrderKanban() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let (orders, set_orders) = signal::<Vec<MaintenanceOrder>>(Vec::new());
    let (asset_names, set_asset_names) = signal::<HashMap<String, String>>(HashMap::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let type_filter = RwSignal::new(None::<OrderType>);

    Effect::new(move |_| {
        ctx.data_version.track();
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(list) = asset_model::fetch_all().await {
                set_asset_names.set(
                    list.into_iter()
                        .map(|a| (a.to_string_id(), a.base.description))
                        .collect(),
                );
            }
            match model::fetch_all().await {
                Ok(v) => {
                    set_orders.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let columns = Memo::new(move |_| {
        let filter = OrderFilter {
            order_type: type_filter.get(),
            ..Default::default()
        };
        let mut visible: Vec<MaintenanceOrder> = orders
            .get()
            .into_iter()
            .filter(|o| filter.matches(o))
            .collect();
        visible.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then(a.effective_date().cmp(&b.effective_date()))
        });
        group_by_status(&visible)
    });

    let advance = move |order: MaintenanceOrder| {
        let Some(target) = order.status.next() else {
            return;
        };
        let id = order.to_string_id();
        wasm_bindgen_futures::spawn_local(async move {
            match model::change_status(&id, target).await {
                Ok(updated) => {
                    toast.success(format!("{}: {}", updated.number(), target.display_name()));
                    ctx.notify_changed();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <div class="page page--wide">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Канбан заказов"}</h1>
                </div>
                <div class="header__actions">
                    <select
                        class="filter-panel__select"
                        on:change=move |ev| type_filter.set(OrderType::from_code(&event_target_value(&ev)))
                    >
                        <option value="">{"Все типы"}</option>
                        {OrderType::all().into_iter().map(|t| view! {
                            <option value=t.code()>{t.display_name()}</option>
                        }).collect_view()}
                    </select>
                    <button
                        class="button button--primary"
                        on:click=move |_| ctx.open_tab(&order_detail_key(None), "Новый заказ")
                    >
                        {icon("plus")}
                        {"Новый заказ"}
                    </button>
                </div>
            </div>

            <ErrorBox error=error />

            <div class="kanban">
                {move || columns.get().into_iter().map(|column| {
                    let status = column.status;
                    let count = column.orders.len();
                    view! {
                        <div class=format!("kanban__column kanban__column--{}", status.code())>
                            <div class="kanban__column-header">
                                <span>{status.display_name()}</span>
                                <span class="kanban__count">{count}</span>
                            </div>
                            <div class="kanban__cards">
                                {column.orders.into_iter().map(|order| {
                                    let id = order.to_string_id();
                                    let number = order.number().to_string();
                                    let asset = asset_names.with(|names| {
                                        names.get(&order.asset_id).cloned().unwrap_or_default()
                                    });
                                    let next = order.status.next();
                                    let order_for_advance = order.clone();
                                    view! {
                                        <div
                                            class=format!("kanban__card kanban__card--{}", order.priority.code())
                                            on:click=move |_| ctx.open_tab(
                                                &order_detail_key(Some(&id)),
                                                &detail_tab_label("Заказ", &number),
                                            )
                                        >
                                            <div class="kanban__card-title">
                                                <strong>{order.number().to_string()}</strong>
                                                <span class="kanban__card-date">{format_date(order.effective_date())}</span>
                                            </div>
                                            <div class="kanban__card-body">{order.base.description.clone()}</div>
                                            <div class="kanban__card-meta">
                                                <span>{asset}</span>
                                                <span>{order.order_type.display_name()}</span>
                                                <span>{order.assigned_to.clone()}</span>
                                            </div>
                                            {next.map(|target| view! {
                                                <button
                                                    class="button button--small kanban__advance"
                                                    title=format!("Перевести в \"{}\"", target.display_name())
                                                    on:click=move |e| {
                                                        e.stop_propagation();
                                                        advance(order_for_advance.clone());
                                                    }
                                                >
                                                    {target.display_name()}
                                                    {icon("chevron-right")}
                                                </button>
                                            })}
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
