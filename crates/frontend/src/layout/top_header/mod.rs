//! TopHeader - верхняя панель приложения: название предприятия и
//! переключатели боковых панелей.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::settings::model::fetch_settings;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let company = RwSignal::new(String::new());
    // Название перечитывается после сохранения настроек
    Effect::new(move |_| {
        ctx.data_version.track();
        spawn_local(async move {
            if let Ok(settings) = fetch_settings().await {
                company.set(settings.company_name);
            }
        });
    });

    let is_sidebar_visible = move || ctx.left_open.get();
    let is_right_panel_visible = move || ctx.right_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Обслуживание оборудования"</span>
                <span class="top-header__subtitle">{move || company.get()}</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Скрыть навигацию" } else { "Показать навигацию" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_right()
                    title=move || if is_right_panel_visible() { "Скрыть правую панель" } else { "Показать правую панель" }
                >
                    {move || if is_right_panel_visible() {
                        icon("panel-right-close")
                    } else {
                        icon("panel-right-open")
                    }}
                </button>

                <button
                    class="top-header__icon-btn"
                    title="Настройки"
                    on:click=move |_| ctx.open_tab("sys_settings", "Настройки")
                >
                    {icon("settings")}
                </button>
            </div>
        </div>
    }
}
