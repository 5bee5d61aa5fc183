//! Правая панель: сводка по заказам и список открытых окон

use super::windows_list::WindowsList;
use crate::domain::a007_maintenance_order::ui::summary::OrderSummary;
use leptos::prelude::*;

#[component]
pub fn RightPanel() -> impl IntoView {
    view! {
        <div class="app-panel__content">
            <OrderSummary />
            <WindowsList />
        </div>
    }
}
