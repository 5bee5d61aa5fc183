//! Форма склада: три поля, состояние держится прямо в компоненте

use super::model;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::icons::icon;
use contracts::domain::a004_warehouse::WarehouseDto;
use leptos::prelude::*;

#[component]
pub fn WarehouseDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(WarehouseDto::default());
    let error = RwSignal::new(None::<String>);

    if let Some(existing_id) = id {
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(&existing_id).await {
                Ok(w) => form.set(w.to_dto()),
                Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    let is_edit_mode = move || form.with(|f| f.id.is_some());
    let is_form_valid = move || {
        form.with(|f| {
            !f.description.trim().is_empty()
                && f.code.as_deref().is_some_and(|c| !c.trim().is_empty())
        })
    };

    let save = move || {
        let current = form.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&current).await {
                Ok(_) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="details-container warehouse-details">
            <div class="details-header">
                <h3>{move || if is_edit_mode() { "Редактирование склада" } else { "Новый склад" }}</h3>
            </div>

            <ErrorBox error=error />

            <div class="details-form">
                <Input
                    label="Код"
                    value=Signal::derive(move || form.get().code.unwrap_or_default())
                    on_input=Callback::new(move |v: String| form.update(|f| f.code = Some(v)))
                />
                <Input
                    label="Наименование"
                    value=Signal::derive(move || form.get().description)
                    on_input=Callback::new(move |v| form.update(|f| f.description = v))
                />
                <Input
                    label="Адрес / расположение"
                    value=Signal::derive(move || form.get().location)
                    on_input=Callback::new(move |v| form.update(|f| f.location = v))
                />
                <Textarea
                    label="Комментарий"
                    value=Signal::derive(move || form.get().comment.unwrap_or_default())
                    on_input=Callback::new(move |v: String| {
                        form.update(|f| f.comment = if v.is_empty() { None } else { Some(v) })
                    })
                />
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| save()
                    disabled=move || !is_form_valid()
                >
                    {icon("save")}
                    {move || if is_edit_mode() { "Сохранить" } else { "Создать" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    {"Отмена"}
                </button>
            </div>
        </div>
    }
}
