use super::view_model::MaterialDetailsViewModel;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::ui::{Input, NumberInput, Select, Textarea};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn MaterialDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = MaterialDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container material-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Редактирование материала" } else { "Новый материал" }}</h3>
            </div>

            <ErrorBox error=vm.error />

            <div class="details-form details-form--grid">
                <Input
                    label="Код"
                    value=Signal::derive(move || vm.form.get().code.unwrap_or_default())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.code = Some(v)))
                />
                <Input
                    label="Наименование"
                    value=Signal::derive(move || vm.form.get().description)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.description = v))
                />
                <Input
                    label="Ед. изм."
                    value=Signal::derive(move || vm.form.get().unit)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.unit = v))
                />
                <Select
                    label="Склад"
                    value=Signal::derive(move || vm.form.get().warehouse_id.unwrap_or_default())
                    on_change=Callback::new(move |v: String| {
                        vm.form.update(|f| f.warehouse_id = if v.is_empty() { None } else { Some(v) })
                    })
                    options=vm.warehouses
                />
                <NumberInput
                    label="Остаток"
                    value=Signal::derive(move || vm.form.get().stock_quantity)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.stock_quantity = v))
                />
                <NumberInput
                    label="Минимальный остаток"
                    value=Signal::derive(move || vm.form.get().min_stock)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.min_stock = v))
                />
                <NumberInput
                    label="Цена за единицу"
                    value=Signal::derive(move || vm.form.get().unit_cost)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.unit_cost = v))
                    step="0.01"
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
                    disabled=move || !vm.is_form_valid()
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
