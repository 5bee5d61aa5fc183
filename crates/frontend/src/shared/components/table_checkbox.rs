use leptos::prelude::*;

/// Ячейка `<td>` с чекбоксом выбора строки.
/// Клик по чекбоксу не открывает строку.
#[component]
pub fn TableCheckbox(checked: Signal<bool>, on_change: Callback<bool>) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--checkbox" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}
