use super::view_model::ContractDetailsViewModel;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::ui::{Input, NumberInput, Select, Textarea};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ContractDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ContractDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container contract-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Редактирование договора" } else { "Новый договор" }}</h3>
            </div>

            <ErrorBox error=vm.error />

            <div class="details-form details-form--grid">
                <Input
                    label="Номер договора"
                    value=Signal::derive(move || vm.form.get().code.unwrap_or_default())
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.code = Some(v)))
                />
                <Input
                    label="Предмет"
                    value=Signal::derive(move || vm.form.get().description)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.description = v))
                />
                <Select
                    label="Контрагент"
                    value=Signal::derive(move || vm.form.get().partner_id)
                    on_change=Callback::new(move |v| vm.form.update(|f| f.partner_id = v))
                    options=vm.partners
                />
                <Select
                    label="Оборудование"
                    value=Signal::derive(move || vm.form.get().asset_id.unwrap_or_default())
                    on_change=Callback::new(move |v: String| {
                        vm.form.update(|f| f.asset_id = if v.is_empty() { None } else { Some(v) })
                    })
                    options=vm.assets
                />
                <Input
                    label="Дата начала"
                    input_type="date"
                    value=Signal::derive(move || vm.form.get().start_date)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.start_date = v))
                />
                <Input
                    label="Дата окончания"
                    input_type="date"
                    value=Signal::derive(move || vm.form.get().end_date)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.end_date = v))
                />
                <NumberInput
                    label="Сумма"
                    step="0.01"
                    value=Signal::derive(move || vm.form.get().amount)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.amount = v))
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
