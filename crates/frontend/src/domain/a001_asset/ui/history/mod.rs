//! История обслуживания актива: закрытые заказы, последние сверху

use crate::domain::a001_asset::ui::details::model as asset_model;
use crate::domain::a007_maintenance_order::ui::details::model as order_model;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::registry::order_detail_key;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::date_utils::format_date_opt;
use contracts::domain::a007_maintenance_order::{asset_history, MaintenanceOrder};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn AssetHistory(asset_id: String) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (title, set_title) = signal(String::new());
    let (orders, set_orders) = signal::<Vec<MaintenanceOrder>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let asset_id = StoredValue::new(asset_id);

    Effect::new(move |_| {
        ctx.data_version.track();
        let id = asset_id.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match asset_model::fetch_by_id(&id).await {
                Ok(asset) => set_title.set(format!(
                    "{} - {}",
                    asset.base.code, asset.base.description
                )),
                Err(e) => set_error.set(Some(e)),
            }
            match order_model::fetch_all().await {
                Ok(all) => set_orders.set(asset_history(&all, &id)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let total_cost = move || orders.with(|o| o.iter().map(|x| x.materials_total()).sum::<f64>());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"История обслуживания"}</h1>
                    <span class="header__subtitle">{move || title.get()}</span>
                </div>
            </div>

            <ErrorBox error=error />

            <Show
                when=move || !orders.get().is_empty()
                fallback=|| view! { <div class="placeholder">{"Закрытых заказов по активу нет"}</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Номер"}</th>
                                <th class="table__header-cell">{"Тип"}</th>
                                <th class="table__header-cell">{"Описание"}</th>
                                <th class="table__header-cell">{"Начат"}</th>
                                <th class="table__header-cell">{"Закрыт"}</th>
                                <th class="table__header-cell">{"Исполнитель"}</th>
                                <th class="table__header-cell table__header-cell--right">{"Материалы, ₽"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || orders.get()
                                key=|o| o.to_string_id()
                                children=move |o| {
                                    let id = o.to_string_id();
                                    let number = o.number().to_string();
                                    view! {
                                        <tr
                                            class="table__row"
                                            on:click=move |_| ctx.open_tab(
                                                &order_detail_key(Some(&id)),
                                                &detail_tab_label("Заказ", &number),
                                            )
                                        >
                                            <td class="table__cell">{o.number().to_string()}</td>
                                            <td class="table__cell">{o.order_type.display_name()}</td>
                                            <td class="table__cell">{o.base.description.clone()}</td>
                                            <td class="table__cell">{format_date_opt(o.started_at)}</td>
                                            <td class="table__cell">{format_date_opt(o.closed_date)}</td>
                                            <td class="table__cell">{o.assigned_to.clone()}</td>
                                            <td class="table__cell table__cell--right">{format!("{:.2}", o.materials_total())}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
                <div class="table__totals">
                    {move || format!("Заказов: {}, материалов на сумму {:.2}", orders.get().len(), total_cost())}
                </div>
            </Show>
        </div>
    }
}
