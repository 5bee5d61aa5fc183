use leptos::prelude::*;

/// Выпадающий список; `options` - пары (значение, подпись)
#[component]
pub fn Select(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                disabled=disabled
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <For
                    each=move || options.get()
                    key=|(val, label)| (val.clone(), label.clone())
                    children=move |(val, label)| {
                        let val_for_selected = val.clone();
                        view! {
                            <option
                                value=val
                                selected=move || value.get() == val_for_selected
                            >
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
