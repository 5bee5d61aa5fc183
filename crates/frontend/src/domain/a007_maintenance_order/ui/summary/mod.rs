use crate::domain::a007_maintenance_order::ui::details::model;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a007_maintenance_order::count_by_status;
use contracts::enums::OrderStatus;
use leptos::prelude::*;

/// Счётчики заказов по статусам для правой панели
#[component]
pub fn OrderSummary() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let counts = RwSignal::new(Vec::<(OrderStatus, usize)>::new());

    Effect::new(move |_| {
        ctx.data_version.track();
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_all().await {
                Ok(orders) => counts.set(count_by_status(&orders)),
                Err(e) => log::warn!("order summary: {}", e),
            }
        });
    });

    view! {
        <div class="panel-section">
            <div class="panel-section__title">{"Заказы"}</div>
            <ul class="panel-section__list">
                {move || counts.get().into_iter().map(|(status, count)| view! {
                    <li class="panel-section__item">
                        <span class=format!("badge badge--status-{}", status.code())>{status.display_name()}</span>
                        <span class="panel-section__value">{count}</span>
                    </li>
                }).collect_view()}
            </ul>
            <button
                class="button button--small"
                on:click=move |_| ctx.open_tab("a007_maintenance_order_kanban", "Канбан заказов")
            >
                {"Открыть канбан"}
            </button>
        </div>
    }
}
