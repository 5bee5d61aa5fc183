use super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::date_utils::{format_date, format_date_opt};
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use crate::system::settings::model::fetch_settings;
use contracts::usecases::u501_preventive_planning::{
    DueRoutine, GenerateOrdersResponse, DEFAULT_HORIZON_DAYS,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

/// Текст итогового уведомления о генерации заказов
fn summary_message(resp: &GenerateOrdersResponse) -> String {
    let mut message = format!("Создано заказов: {}", resp.created_order_ids.len());
    if resp.skipped > 0 {
        message.push_str(&format!(", пропущено: {}", resp.skipped));
    }
    if resp.failed > 0 {
        message.push_str(&format!(", ошибок: {}", resp.failed));
    }
    message
}

#[component]
pub fn PlannerView() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let horizon = RwSignal::new(DEFAULT_HORIZON_DAYS);
    let (due, set_due) = signal::<Vec<DueRoutine>>(Vec::new());
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let last_errors = RwSignal::new(Vec::<String>::new());

    let fetch = move || {
        let days = horizon.get_untracked();
        set_is_loading.set(true);
        spawn_local(async move {
            match api::fetch_due(days).await {
                Ok(list) => {
                    // Выбор сохраняется только для регламентов, оставшихся в списке
                    let ids: HashSet<String> =
                        list.iter().map(|d| d.routine.to_string_id()).collect();
                    set_selected.update(|s| s.retain(|id| ids.contains(id)));
                    set_due.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    // Горизонт по умолчанию берётся из настроек
    spawn_local(async move {
        if let Ok(settings) = fetch_settings().await {
            horizon.set(settings.default_horizon_days);
        }
        fetch();
    });

    Effect::new(move |prev: Option<()>| {
        ctx.data_version.track();
        if prev.is_some() {
            fetch();
        }
    });

    let generate = move || {
        let ids: Vec<String> = selected.get_untracked().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        let days = horizon.get_untracked();
        set_is_loading.set(true);
        spawn_local(async move {
            match api::generate_orders(ids, days).await {
                Ok(resp) => {
                    let message = summary_message(&resp);
                    if resp.failed > 0 {
                        toast.warning(message);
                    } else {
                        toast.success(message);
                    }
                    last_errors.set(resp.errors);
                    set_selected.set(HashSet::new());
                    ctx.notify_changed();
                }
                Err(e) => toast.error(e),
            }
            set_is_loading.set(false);
        });
    };

    let overdue_count = move || due.with(|d| d.iter().filter(|r| r.is_overdue()).count());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Планирование ТО"}</h1>
                </div>
                <div class="header__actions">
                    <label class="header__label">{"Горизонт, дней"}</label>
                    <input
                        type="number"
                        min="0"
                        class="form__input form__input--short"
                        prop:value=move || horizon.get().to_string()
                        on:change=move |ev| {
                            if let Ok(v) = event_target_value(&ev).trim().parse::<u32>() {
                                horizon.set(v);
                                fetch();
                            }
                        }
                    />
                    <button class="button button--secondary" on:click=move |_| fetch() disabled=move || is_loading.get()>
                        {icon("refresh")}
                        {"Пересчитать"}
                    </button>
                    <button
                        class="button button--primary"
                        on:click=move |_| generate()
                        disabled=move || selected.get().is_empty() || is_loading.get()
                    >
                        {icon("play")}
                        {move || format!("Создать заказы ({})", selected.get().len())}
                    </button>
                </div>
            </div>

            <ErrorBox error=error />

            <div class="info-box">
                {move || format!(
                    "К выполнению в ближайшие {} дн.: {}, из них просрочено: {}",
                    horizon.get(),
                    due.get().len(),
                    overdue_count()
                )}
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    prop:checked=move || {
                                        let n = due.get().len();
                                        n > 0 && selected.get().len() == n
                                    }
                                    on:change=move |ev| {
                                        if event_target_checked(&ev) {
                                            set_selected.set(due.get_untracked().iter().map(|d| d.routine.to_string_id()).collect());
                                        } else {
                                            set_selected.set(HashSet::new());
                                        }
                                    }
                                />
                            </th>
                            <th class="table__header-cell">{"Регламент"}</th>
                            <th class="table__header-cell">{"Актив"}</th>
                            <th class="table__header-cell">{"Дисциплина"}</th>
                            <th class="table__header-cell">{"Последнее"}</th>
                            <th class="table__header-cell">{"Срок"}</th>
                            <th class="table__header-cell table__header-cell--right">{"Дней"}</th>
                            <th class="table__header-cell table__header-cell--right">{"Часы"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || due.get()
                            key=|d| (d.routine.to_string_id(), d.next_date)
                            children=move |d| {
                                let id = d.routine.to_string_id();
                                let id_for_check = id.clone();
                                let overdue = d.is_overdue();
                                view! {
                                    <tr class="table__row" class:table__row--danger=overdue>
                                        <td class="table__cell table__cell--checkbox">
                                            <input
                                                type="checkbox"
                                                class="table__checkbox"
                                                prop:checked=move || selected.get().contains(&id_for_check)
                                                on:change=move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    let id = id.clone();
                                                    set_selected.update(|s| {
                                                        if checked {
                                                            s.insert(id);
                                                        } else {
                                                            s.remove(&id);
                                                        }
                                                    });
                                                }
                                            />
                                        </td>
                                        <td class="table__cell">{format!("{} {}", d.routine.base.code, d.routine.name())}</td>
                                        <td class="table__cell">{d.asset_name.clone()}</td>
                                        <td class="table__cell">{d.routine.discipline.display_name()}</td>
                                        <td class="table__cell">{format_date_opt(d.routine.last_execution_date)}</td>
                                        <td class="table__cell">{format_date(d.next_date)}</td>
                                        <td class="table__cell table__cell--right">{d.days_until_due}</td>
                                        <td class="table__cell table__cell--right">{format!("{:.1}", d.routine.estimated_hours)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <Show when=move || !last_errors.get().is_empty()>
                <div class="warning-box">
                    <ul>
                        {move || last_errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                    </ul>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_message() {
        let resp = GenerateOrdersResponse {
            created_order_ids: vec!["a".into(), "b".into()],
            skipped: 1,
            failed: 0,
            errors: vec![],
        };
        assert_eq!(summary_message(&resp), "Создано заказов: 2, пропущено: 1");
    }
}
