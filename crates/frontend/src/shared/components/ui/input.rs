use leptos::prelude::*;

/// Поле ввода с подписью. `input_type`: "text" (по умолчанию), "date", "email"
#[component]
pub fn Input(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=input_type.unwrap_or_else(|| "text".to_string())
                prop:value=move || value.get()
                placeholder=placeholder
                disabled=disabled
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Числовое поле; нечисловой ввод не меняет значение
#[component]
pub fn NumberInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<f64>,
    on_input: Callback<f64>,
    #[prop(optional, into)] step: Option<String>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type="number"
                step=step.unwrap_or_else(|| "any".to_string())
                prop:value=move || value.get().to_string()
                disabled=disabled
                on:input=move |ev| {
                    if let Ok(v) = event_target_value(&ev).trim().replace(',', ".").parse::<f64>() {
                        on_input.run(v);
                    }
                }
            />
        </div>
    }
}
