use super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::ui::{Input, NumberInput};
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::system::settings::AppSettings;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SettingsForm() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let form = RwSignal::new(AppSettings::default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    spawn_local(async move {
        match model::fetch_settings().await {
            Ok(settings) => form.set(settings),
            Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
        }
    });

    let save = move |_| {
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            error.set(Some(e));
            return;
        }
        saving.set(true);
        spawn_local(async move {
            match model::save_settings(&current).await {
                Ok(()) => {
                    error.set(None);
                    toast.success("Настройки сохранены");
                    ctx.notify_changed();
                }
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    };

    let preview = move || form.with(|f| f.format_order_number(1));

    view! {
        <div class="details-container settings-form">
            <div class="details-header">
                <h3>{"Настройки"}</h3>
            </div>

            <ErrorBox error=error />

            <div class="details-form">
                <Input
                    label="Название предприятия"
                    value=Signal::derive(move || form.get().company_name)
                    on_input=Callback::new(move |v| form.update(|f| f.company_name = v))
                />
                <NumberInput
                    label="Горизонт планирования, дней"
                    value=Signal::derive(move || f64::from(form.get().default_horizon_days))
                    on_input=Callback::new(move |v: f64| {
                        form.update(|f| f.default_horizon_days = v.max(0.0).round() as u32)
                    })
                    step="1"
                />
                <Input
                    label="Префикс номера заказа"
                    value=Signal::derive(move || form.get().order_number_prefix)
                    on_input=Callback::new(move |v| form.update(|f| f.order_number_prefix = v))
                />
                <div class="form__hint">{move || format!("Пример номера: {}", preview())}</div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=save
                    disabled=move || saving.get()
                >
                    {icon("save")}
                    {"Сохранить"}
                </button>
            </div>
        </div>
    }
}
