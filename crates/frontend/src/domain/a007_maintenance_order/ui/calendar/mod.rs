//! Календарь заказов на месяц. Заказ попадает в день плановой даты,
//! без неё в день создания.

use crate::domain::a007_maintenance_order::ui::details::model;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::registry::order_detail_key;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::date_utils::{calendar_weeks, first_of_month, month_title, shift_month, today, WEEKDAY_NAMES};
use crate::shared::icons::icon;
use chrono::Datelike;
use contracts::domain::a007_maintenance_order::{group_by_day, MaintenanceOrder};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn OrderCalendar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (orders, set_orders) = signal::<Vec<MaintenanceOrder>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let month = RwSignal::new(first_of_month(today()));

    Effect::new(move |_| {
        ctx.data_version.track();
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_all().await {
                Ok(v) => {
                    set_orders.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let cells = Memo::new(move |_| group_by_day(&orders.get(), month.get()));

    view! {
        <div class="page page--wide">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Календарь заказов"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| month.update(|m| *m = shift_month(*m, -1))>
                        {icon("chevron-left")}
                    </button>
                    <span class="calendar__title">{move || month_title(month.get())}</span>
                    <button class="button button--secondary" on:click=move |_| month.update(|m| *m = shift_month(*m, 1))>
                        {icon("chevron-right")}
                    </button>
                    <button class="button button--secondary" on:click=move |_| month.set(first_of_month(today()))>
                        {"Сегодня"}
                    </button>
                </div>
            </div>

            <ErrorBox error=error />

            <table class="calendar">
                <thead>
                    <tr>
                        {WEEKDAY_NAMES.iter().map(|d| view! { <th class="calendar__weekday">{*d}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let now = today();
                        calendar_weeks(month.get()).into_iter().map(|week| view! {
                            <tr>
                                {week.into_iter().map(|day| match day {
                                    None => view! { <td class="calendar__cell calendar__cell--empty"></td> }.into_any(),
                                    Some(date) => {
                                        let day_orders = cells.with(|c| c.get(&date).cloned().unwrap_or_default());
                                        view! {
                                            <td class="calendar__cell" class:calendar__cell--today=date == now>
                                                <div class="calendar__day">{date.day()}</div>
                                                {day_orders.into_iter().map(|o| {
                                                    let id = o.to_string_id();
                                                    let number = o.number().to_string();
                                                    view! {
                                                        <div
                                                            class=format!("calendar__order badge--status-{}", o.status.code())
                                                            title=o.base.description.clone()
                                                            on:click=move |_| ctx.open_tab(
                                                                &order_detail_key(Some(&id)),
                                                                &detail_tab_label("Заказ", &number),
                                                            )
                                                        >
                                                            {o.number().to_string()}
                                                        </div>
                                                    }
                                                }).collect_view()}
                                            </td>
                                        }.into_any()
                                    }
                                }).collect_view()}
                            </tr>
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
