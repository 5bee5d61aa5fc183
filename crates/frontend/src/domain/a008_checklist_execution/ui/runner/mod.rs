//! Проведение осмотра: отметка пунктов чек-листа, сохранение, аварийный
//! заказ по дефектам и печатная форма.

use crate::domain::a008_checklist_execution::ui::model;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::registry::order_detail_key;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::domain::a008_checklist_execution::{
    CheckResult, ChecklistExecution, ChecklistExecutionDto,
};
use leptos::prelude::*;

/// Итог по текущему (ещё не сохранённому) состоянию формы
fn preview_result(saved: &Option<ChecklistExecution>, form: &ChecklistExecutionDto) -> CheckResult {
    match saved {
        Some(execution) => {
            let mut preview = execution.clone();
            preview.items = form.items.clone();
            preview.overall_result()
        }
        None => CheckResult::Pending,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ChecklistRunner(id: String, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let id = StoredValue::new(id);
    let execution = RwSignal::new(None::<ChecklistExecution>);
    let form = RwSignal::new(ChecklistExecutionDto::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let load = move || {
        let id = id.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(&id).await {
                Ok(e) => {
                    form.set(e.to_dto());
                    execution.set(Some(e));
                }
                Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    };
    load();

    let result = Memo::new(move |_| preview_result(&execution.get(), &form.get()));
    let item_count = Memo::new(move |_| form.with(|f| f.items.len()));
    let corrective_order_id =
        move || execution.with(|e| e.as_ref().and_then(|e| e.corrective_order_id.clone()));

    let set_item_result = move |index: usize, value: CheckResult| {
        form.update(|f| {
            if let Some(item) = f.items.get_mut(index) {
                item.result = value;
            }
        });
    };

    let set_item_observation = move |index: usize, value: String| {
        form.update(|f| {
            if let Some(item) = f.items.get_mut(index) {
                item.observation = value;
            }
        });
    };

    // Сохранение перед командами: backend работает с записанной версией
    let save_then = move |then: Option<Callback<()>>| {
        let dto = form.get_untracked();
        busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&dto).await {
                Ok(saved_id) => {
                    if let Ok(e) = model::fetch_by_id(&saved_id).await {
                        form.set(e.to_dto());
                        execution.set(Some(e));
                    }
                    error.set(None);
                    ctx.notify_changed();
                    match then {
                        Some(cb) => cb.run(()),
                        None => toast.success("Осмотр сохранён"),
                    }
                }
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    let create_corrective = Callback::new(move |_| {
        let id = id.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match model::create_corrective_order(&id).await {
                Ok(order_id) => {
                    load();
                    ctx.notify_changed();
                    toast.success("Аварийный заказ создан");
                    ctx.open_tab(
                        &order_detail_key(Some(&order_id)),
                        &detail_tab_label("Заказ", "аварийный"),
                    );
                }
                Err(e) => toast.error(e),
            }
        });
    });

    let print = Callback::new(move |_| {
        if let Err(e) = model::open_report(&id.get_value()) {
            toast.error(e);
        }
    });

    view! {
        <div class="details-container checklist-runner">
            <div class="details-header">
                <h3>{move || format!("Осмотр {}", form.get().code.unwrap_or_default())}</h3>
                <span class=move || format!("badge badge--check-{}", result.get().code())>
                    {move || result.get().display_name()}
                </span>
                <span class="details-header__caption">{move || form.get().description}</span>
            </div>

            <ErrorBox error=error />

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || busy.get()
                    on:click=move |_| save_then(None)
                >
                    {icon("save")}
                    {"Сохранить"}
                </button>
                <Show when=move || result.get() == CheckResult::Fail>
                    {move || match corrective_order_id() {
                        Some(order_id) => view! {
                            <button
                                class="button button--secondary"
                                on:click=move |_| ctx.open_tab(
                                    &order_detail_key(Some(&order_id)),
                                    &detail_tab_label("Заказ", "аварийный"),
                                )
                            >
                                {icon("tool")}
                                {"Открыть аварийный заказ"}
                            </button>
                        }.into_any(),
                        None => view! {
                            <button
                                class="button button--danger"
                                disabled=move || busy.get()
                                on:click=move |_| save_then(Some(create_corrective))
                            >
                                {icon("alert-triangle")}
                                {"Создать аварийный заказ"}
                            </button>
                        }.into_any(),
                    }}
                </Show>
                <button class="button button--secondary" on:click=move |_| save_then(Some(print))>
                    {icon("printer")}
                    {"Печать"}
                </button>
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    {icon("x")}
                    {"Закрыть"}
                </button>
            </div>

            <div class="details-form details-form--grid">
                <Input
                    label="Инспектор"
                    value=Signal::derive(move || form.get().inspector)
                    on_input=Callback::new(move |v| form.update(|f| f.inspector = v))
                />
                <Input
                    label="Дата осмотра"
                    input_type="date"
                    value=Signal::derive(move || form.get().execution_date)
                    on_input=Callback::new(move |v| form.update(|f| f.execution_date = v))
                />
            </div>

            <div class="table">
                <table class="table__data checklist">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"#"}</th>
                            <th class="table__header-cell">{"Пункт"}</th>
                            <th class="table__header-cell">{"Результат"}</th>
                            <th class="table__header-cell">{"Замечание"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            (0..item_count.get()).map(|index| {
                                let text = form.with_untracked(|f| {
                                    f.items.get(index).map(|i| i.text.clone()).unwrap_or_default()
                                });
                                let current = move || form.with(|f| f.items.get(index).map(|i| i.result).unwrap_or_default());
                                view! {
                                    <tr class="table__row" class:table__row--danger=move || current() == CheckResult::Fail>
                                        <td class="table__cell">{index + 1}</td>
                                        <td class="table__cell">{text}</td>
                                        <td class="table__cell checklist__results">
                                            {[CheckResult::Ok, CheckResult::Fail, CheckResult::NotApplicable]
                                                .into_iter()
                                                .map(|value| view! {
                                                    <button
                                                        class=format!("button button--small checklist__result checklist__result--{}", value.code())
                                                        class:checklist__result--active=move || current() == value
                                                        on:click=move |_| set_item_result(index, value)
                                                    >
                                                        {value.display_name()}
                                                    </button>
                                                })
                                                .collect_view()}
                                        </td>
                                        <td class="table__cell">
                                            <input
                                                type="text"
                                                class="form__input"
                                                prop:value=move || form.with(|f| f.items.get(index).map(|i| i.observation.clone()).unwrap_or_default())
                                                on:change=move |ev| set_item_observation(index, event_target_value(&ev))
                                            />
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a008_checklist_execution::ChecklistItem;

    #[test]
    fn test_preview_follows_unsaved_items() {
        let mut execution =
            ChecklistExecution::new_for_insert("CHK-1".into(), "Осмотр".into(), "a1".into());
        execution.items = vec![ChecklistItem::new("Вибрация"), ChecklistItem::new("Утечки")];
        let saved = Some(execution.clone());

        let mut form = execution.to_dto();
        assert_eq!(preview_result(&saved, &form), CheckResult::Pending);

        form.items[0].result = CheckResult::Ok;
        form.items[1].result = CheckResult::NotApplicable;
        assert_eq!(preview_result(&saved, &form), CheckResult::Ok);

        form.items[1].result = CheckResult::Fail;
        assert_eq!(preview_result(&saved, &form), CheckResult::Fail);
        assert_eq!(preview_result(&None, &form), CheckResult::Pending);
    }
}
