use super::view_model::AssetDetailsViewModel;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::icons::icon;
use contracts::domain::a001_asset::{AssetStatus, Criticality};
use leptos::prelude::*;

#[component]
pub fn AssetDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AssetDetailsViewModel::new();
    vm.load_if_needed(id);

    let criticality_options: Vec<(String, String)> = Criticality::all()
        .into_iter()
        .map(|c| (c.code().to_string(), c.display_name().to_string()))
        .collect();
    let status_options: Vec<(String, String)> = AssetStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect();

    view! {
        <div class="details-container asset-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Редактирование актива" } else { "Новый актив" }}</h3>
            </div>

            <ErrorBox error=vm.error />

            <div class="details-form details-form--grid">
                <Input
                    label="Код"
                    value=Signal::derive(move || vm.form.get().code.unwrap_or_default())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.code = Some(v)))
                    placeholder="BOMBA-01"
                />
                <Input
                    label="Наименование"
                    value=Signal::derive(move || vm.form.get().description)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.description = v))
                />
                <Input
                    label="Расположение"
                    value=Signal::derive(move || vm.form.get().location)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.location = v))
                />
                <Input
                    label="Категория"
                    value=Signal::derive(move || vm.form.get().category)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.category = v))
                />
                <Input
                    label="Производитель"
                    value=Signal::derive(move || vm.form.get().manufacturer)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.manufacturer = v))
                />
                <Input
                    label="Модель"
                    value=Signal::derive(move || vm.form.get().model)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.model = v))
                />
                <Input
                    label="Серийный номер"
                    value=Signal::derive(move || vm.form.get().serial_number)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.serial_number = v))
                />
                <Select
                    label="Критичность"
                    value=Signal::derive(move || vm.form.get().criticality.code().to_string())
                    on_change=Callback::new(move |code: String| {
                        if let Some(c) = Criticality::from_code(&code) {
                            vm.form.update(|f| f.criticality = c);
                        }
                    })
                    options=Signal::derive(move || criticality_options.clone())
                />
                <Select
                    label="Состояние"
                    value=Signal::derive(move || vm.form.get().status.code().to_string())
                    on_change=Callback::new(move |code: String| {
                        if let Some(s) = AssetStatus::from_code(&code) {
                            vm.form.update(|f| f.status = s);
                        }
                    })
                    options=Signal::derive(move || status_options.clone())
                />
                <Textarea
                    label="Комментарий"
                    value=Signal::derive(move || vm.form.get().comment.unwrap_or_default())
                    on_input=Callback::new(move |v: String| {
                        vm.form.update(|f| f.comment = if v.is_empty() { None } else { Some(v) })
                    })
                />
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || !vm.is_form_valid() || vm.saving.get()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Сохранить" } else { "Создать" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    {"Отмена"}
                </button>
            </div>
        </div>
    }
}
