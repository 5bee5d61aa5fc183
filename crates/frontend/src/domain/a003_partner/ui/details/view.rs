use super::view_model::PartnerDetailsViewModel;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::icons::icon;
use contracts::domain::a003_partner::PartnerKind;
use leptos::prelude::*;

#[component]
pub fn PartnerDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = PartnerDetailsViewModel::new();
    vm.load_if_needed(id);

    let kind_options: Vec<(String, String)> = PartnerKind::all()
        .into_iter()
        .map(|k| (k.code().to_string(), k.display_name().to_string()))
        .collect();

    view! {
        <div class="details-container partner-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Редактирование контрагента" } else { "Новый контрагент" }}</h3>
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
                <Select
                    label="Вид"
                    value=Signal::derive(move || vm.form.get().kind.code().to_string())
                    on_change=Callback::new(move |code: String| {
                        if let Some(kind) = PartnerKind::from_code(&code) {
                            vm.form.update(|f| f.kind = kind);
                        }
                    })
                    options=Signal::derive(move || kind_options.clone())
                />
                <Input
                    label="ИНН"
                    value=Signal::derive(move || vm.form.get().tax_id)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.tax_id = v))
                />
                <Input
                    label="E-mail"
                    input_type="email"
                    value=Signal::derive(move || vm.form.get().email)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.email = v))
                />
                <Input
                    label="Телефон"
                    value=Signal::derive(move || vm.form.get().phone)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.phone = v))
                />
                <Input
                    label="Адрес"
                    value=Signal::derive(move || vm.form.get().address)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.address = v))
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
