use super::view_model::OrderDetailsViewModel;
use super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::registry::order_detail_key;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::ui::{Input, NumberInput, Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::domain::a002_material::StockCheck;
use contracts::enums::{OrderType, Priority};
use leptos::prelude::*;

#[component]
pub fn OrderDetails(id: Option<String>, tab_key: String, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let vm = OrderDetailsViewModel::new();
    vm.load(id);
    let tab_key = StoredValue::new(tab_key);

    let type_options: Vec<(String, String)> = OrderType::all()
        .into_iter()
        .map(|t| (t.code().to_string(), t.display_name().to_string()))
        .collect();
    let priority_options: Vec<(String, String)> = Priority::all()
        .into_iter()
        .map(|p| (p.code().to_string(), p.display_name().to_string()))
        .collect();

    let on_saved = Callback::new(move |(id, number): (String, String)| {
        toast.success(format!("Заказ {} сохранён", number));
        ctx.notify_changed();
        let label = detail_tab_label("Заказ", &number);
        let current_key = tab_key.get_value();
        let saved_key = order_detail_key(Some(&id));
        if current_key != saved_key {
            // новый заказ: вкладка "new" заменяется вкладкой с id
            ctx.close_tab(&current_key);
            ctx.open_tab(&saved_key, &label);
        } else {
            ctx.update_tab_title(&current_key, &label);
        }
    });

    let on_status_changed = Callback::new(move |_| {
        toast.success(format!("Статус: {}", vm.status().display_name()));
        ctx.notify_changed();
    });

    let on_material_added = Callback::new(move |check: StockCheck| {
        if check.replenishment_needed {
            toast.warning(format!(
                "Остаток {:.2} ниже минимального {:.2}, нужна закупка",
                check.stock_quantity, check.min_stock
            ));
        } else {
            toast.success("Материал списан в заказ");
        }
        ctx.notify_changed();
    });

    let open_report = move || {
        if let Some(id) = vm.id() {
            if let Err(e) = model::open_report(&id) {
                toast.error(e);
            }
        }
    };

    view! {
        <div class="details-container order-details">
            <div class="details-header">
                <h3>
                    {move || match vm.form.get().number {
                        Some(n) => format!("Заказ {}", n),
                        None => "Новый заказ".to_string(),
                    }}
                </h3>
                <Show when=move || vm.is_edit_mode()>
                    <span class=move || format!("badge badge--status-{}", vm.status().code())>
                        {move || vm.status().display_name()}
                    </span>
                    <span class="details-header__caption">{move || vm.lifecycle_caption()}</span>
                </Show>
            </div>

            <ErrorBox error=vm.error />

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || !vm.is_form_valid() || vm.busy.get() || vm.is_closed()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Сохранить" } else { "Создать" }}
                </button>
                <Show when=move || vm.is_edit_mode()>
                    {move || vm.available_transitions().into_iter().map(|target| view! {
                        <button
                            class="button button--secondary"
                            disabled=move || vm.busy.get()
                            on:click=move |_| vm.change_status_command(target, on_status_changed)
                        >
                            {icon("chevron-right")}
                            {target.display_name()}
                        </button>
                    }).collect_view()}
                    <button class="button button--secondary" on:click=move |_| open_report()>
                        {icon("printer")}
                        {"Печать"}
                    </button>
                </Show>
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    {icon("x")}
                    {"Закрыть"}
                </button>
            </div>

            <div class="details-form details-form--grid">
                <Input
                    label="Описание работ"
                    value=Signal::derive(move || vm.form.get().description)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.description = v))
                />
                <Select
                    label="Актив"
                    value=Signal::derive(move || vm.form.get().asset_id)
                    on_change=Callback::new(move |v| vm.form.update(|f| f.asset_id = v))
                    options=vm.assets
                />
                <Select
                    label="Тип"
                    value=Signal::derive(move || vm.form.get().order_type.code().to_string())
                    on_change=Callback::new(move |code: String| {
                        if let Some(t) = OrderType::from_code(&code) {
                            vm.form.update(|f| f.order_type = t);
                        }
                    })
                    options=Signal::derive(move || type_options.clone())
                />
                <Select
                    label="Приоритет"
                    value=Signal::derive(move || vm.form.get().priority.code().to_string())
                    on_change=Callback::new(move |code: String| {
                        if let Some(p) = Priority::from_code(&code) {
                            vm.form.update(|f| f.priority = p);
                        }
                    })
                    options=Signal::derive(move || priority_options.clone())
                />
                <Input
                    label="Плановая дата"
                    input_type="date"
                    value=Signal::derive(move || vm.form.get().planned_date)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.planned_date = v))
                />
                <Input
                    label="Исполнитель"
                    value=Signal::derive(move || vm.form.get().assigned_to)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.assigned_to = v))
                />
                <NumberInput
                    label="Трудоёмкость, ч"
                    step="0.5"
                    value=Signal::derive(move || vm.form.get().estimated_hours)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.estimated_hours = v))
                />
                <Textarea
                    label="Выполненные работы"
                    rows=4
                    value=Signal::derive(move || vm.form.get().work_notes)
                    on_input=Callback::new(move |v| vm.form.update(|f| f.work_notes = v))
                />
            </div>

            <Show when=move || vm.is_edit_mode()>
                <div class="details-section">
                    <h4 class="details-section__title">{"Материалы"}</h4>
                    <div class="table">
                        <table class="table__data">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">{"Код"}</th>
                                    <th class="table__header-cell">{"Наименование"}</th>
                                    <th class="table__header-cell table__header-cell--right">{"Кол-во"}</th>
                                    <th class="table__header-cell table__header-cell--right">{"Цена"}</th>
                                    <th class="table__header-cell table__header-cell--right">{"Сумма"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || vm.order.get().map(|o| o.materials).unwrap_or_default().into_iter().map(|line| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{line.material_code.clone()}</td>
                                        <td class="table__cell">{line.description.clone()}</td>
                                        <td class="table__cell table__cell--right">{format!("{:.2}", line.quantity)}</td>
                                        <td class="table__cell table__cell--right">{format!("{:.2}", line.unit_cost)}</td>
                                        <td class="table__cell table__cell--right">{format!("{:.2}", line.line_total())}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                    <div class="table__totals">
                        {move || format!(
                            "Итого: {:.2}",
                            vm.order.with(|o| o.as_ref().map(|o| o.materials_total()).unwrap_or(0.0))
                        )}
                    </div>

                    <Show when=move || !vm.is_closed()>
                        <div class="details-form details-form--inline">
                            <Select
                                label="Материал"
                                value=vm.new_material_id
                                on_change=Callback::new(move |v| vm.new_material_id.set(v))
                                options=Signal::derive(move || vm.material_options())
                            />
                            <NumberInput
                                label="Количество"
                                value=vm.new_quantity
                                on_input=Callback::new(move |v| vm.new_quantity.set(v))
                            />
                            <button
                                class="button button--secondary"
                                on:click=move |_| vm.add_material_command(on_material_added)
                            >
                                {icon("plus")}
                                {"Добавить"}
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
