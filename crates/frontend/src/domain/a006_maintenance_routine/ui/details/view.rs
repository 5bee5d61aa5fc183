use super::view_model::RoutineDetailsViewModel;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::ui::{Input, NumberInput, Select, Textarea};
use crate::shared::icons::icon;
use contracts::domain::a006_maintenance_routine::Discipline;
use contracts::shared::date::{parse_date, to_iso};
use leptos::prelude::*;

#[component]
pub fn RoutineDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = RoutineDetailsViewModel::new();
    vm.load_if_needed(id);

    let discipline_options: Vec<(String, String)> = Discipline::all()
        .into_iter()
        .map(|d| (d.code().to_string(), d.display_name().to_string()))
        .collect();

    // Подсказка под периодичностью
    let next_date_hint = move || {
        let f = vm.form.get();
        parse_date(&f.last_execution_date)
            .and_then(|d| d.checked_add_days(chrono::Days::new(u64::from(f.frequency_days))))
            .map(|d| format!("Следующее выполнение: {}", to_iso(d)))
            .unwrap_or_default()
    };

    view! {
        <div class="details-container routine-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Редактирование регламента ТО" } else { "Новый регламент ТО" }}</h3>
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
                    value=Signal::derive(move || vm.form.get().name)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.name = v))
                />
                <Select
                    label="Актив"
                    value=Signal::derive(move || vm.form.get().asset_id)
                    on_change=Callback::new(move |v| vm.form.update(|f| f.asset_id = v))
                    options=vm.assets
                />
                <Select
                    label="Дисциплина"
                    value=Signal::derive(move || vm.form.get().discipline.code().to_string())
                    on_change=Callback::new(move |code: String| {
                        if let Some(d) = Discipline::from_code(&code) {
                            vm.form.update(|f| f.discipline = d);
                        }
                    })
                    options=Signal::derive(move || discipline_options.clone())
                />
                <NumberInput
                    label="Периодичность, дней"
                    step="1"
                    value=Signal::derive(move || f64::from(vm.form.get().frequency_days))
                    on_input=Callback::new(move |v: f64| {
                        vm.form.update(|f| f.frequency_days = v.max(0.0).round() as u32)
                    })
                />
                <Input
                    label="Последнее выполнение"
                    input_type="date"
                    value=Signal::derive(move || vm.form.get().last_execution_date)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.last_execution_date = v))
                />
                <NumberInput
                    label="Трудоёмкость, ч"
                    step="0.5"
                    value=Signal::derive(move || vm.form.get().estimated_hours)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.estimated_hours = v))
                />
                <div class="form__hint">{next_date_hint}</div>
                <Textarea
                    label="Чек-лист (пункт на строку)"
                    rows=6
                    value=Signal::derive(move || vm.checklist_text())
                    on_input=Callback::new(move |v| vm.set_checklist_text(v))
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
