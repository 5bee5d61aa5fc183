use super::model;
use crate::domain::a001_asset::ui::details::model as asset_model;
use crate::domain::a002_material::ui::details::model as material_model;
use contracts::domain::a002_material::{Material, StockCheck};
use contracts::domain::a007_maintenance_order::{MaintenanceOrder, MaintenanceOrderDto};
use contracts::enums::{OrderStatus, OrderType};
use contracts::shared::date::{to_iso, to_iso_opt};
use leptos::prelude::*;

/// ViewModel вкладки заказа.
///
/// `form` редактируется пользователем, `order` хранит последнюю версию с
/// сервера (статус, даты, материалы).
#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub form: RwSignal<MaintenanceOrderDto>,
    pub order: RwSignal<Option<MaintenanceOrder>>,
    pub error: RwSignal<Option<String>>,
    pub busy: RwSignal<bool>,
    pub assets: RwSignal<Vec<(String, String)>>,
    pub materials: RwSignal<Vec<Material>>,
    pub new_material_id: RwSignal<String>,
    pub new_quantity: RwSignal<f64>,
}

impl OrderDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(MaintenanceOrderDto {
                order_type: OrderType::Corrective,
                ..Default::default()
            }),
            order: RwSignal::new(None),
            error: RwSignal::new(None),
            busy: RwSignal::new(false),
            assets: RwSignal::new(Vec::new()),
            materials: RwSignal::new(Vec::new()),
            new_material_id: RwSignal::new(String::new()),
            new_quantity: RwSignal::new(1.0),
        }
    }

    pub fn id(&self) -> Option<String> {
        self.form.with(|f| f.id.clone())
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn status(&self) -> OrderStatus {
        self.order
            .with(|o| o.as_ref().map(|o| o.status))
            .unwrap_or_default()
    }

    pub fn is_closed(&self) -> bool {
        self.status().is_terminal()
    }

    pub fn is_form_valid(&self) -> bool {
        self.form
            .with(|f| !f.description.trim().is_empty() && !f.asset_id.is_empty())
    }

    /// Статусы, в которые можно перевести заказ из текущего
    pub fn available_transitions(&self) -> Vec<OrderStatus> {
        let current = self.status();
        OrderStatus::all()
            .into_iter()
            .filter(|s| current.can_transition_to(*s))
            .collect()
    }

    fn apply(&self, order: MaintenanceOrder) {
        self.form.set(order.to_dto());
        self.order.set(Some(order));
    }

    /// Принять серверную версию после действия (статус, материалы),
    /// не трогая несохранённые правки формы
    fn apply_keeping_edits(&self, order: MaintenanceOrder) {
        self.form.update(|f| sync_server_fields(f, &order));
        self.order.set(Some(order));
    }

    pub fn load(&self, id: Option<String>) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match asset_model::fetch_all().await {
                Ok(list) => {
                    let mut options = vec![(String::new(), "(выберите актив)".to_string())];
                    options.extend(asset_model::to_options(&list));
                    vm.assets.set(options);
                }
                Err(e) => vm.error.set(Some(e)),
            }
            match material_model::fetch_all().await {
                Ok(list) => vm.materials.set(list),
                Err(e) => vm.error.set(Some(e)),
            }
            if let Some(existing_id) = id {
                match model::fetch_by_id(&existing_id).await {
                    Ok(order) => vm.apply(order),
                    Err(e) => vm.error.set(Some(format!("Ошибка загрузки: {}", e))),
                }
            }
        });
    }

    /// Сохранить форму; `on_saved` получает id и номер заказа
    pub fn save_command(&self, on_saved: Callback<(String, String)>) {
        let current = self.form.get_untracked();
        if current.asset_id.is_empty() {
            self.error.set(Some("Не указан актив".to_string()));
            return;
        }
        let vm = *self;
        vm.busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&current).await {
                Ok(id) => match model::fetch_by_id(&id).await {
                    Ok(order) => {
                        let number = order.number().to_string();
                        vm.apply(order);
                        vm.error.set(None);
                        on_saved.run((id, number));
                    }
                    Err(e) => vm.error.set(Some(e)),
                },
                Err(e) => vm.error.set(Some(e)),
            }
            vm.busy.set(false);
        });
    }

    pub fn change_status_command(&self, target: OrderStatus, on_changed: Callback<()>) {
        let Some(id) = self.id() else {
            return;
        };
        // Без плановой даты backend поставит сегодняшнюю
        let vm = *self;
        vm.busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::change_status(&id, target).await {
                Ok(order) => {
                    vm.apply_keeping_edits(order);
                    vm.error.set(None);
                    on_changed.run(());
                }
                Err(e) => vm.error.set(Some(e)),
            }
            vm.busy.set(false);
        });
    }

    /// Списать материал; `on_added` получает остаток после списания
    pub fn add_material_command(&self, on_added: Callback<StockCheck>) {
        let Some(id) = self.id() else {
            return;
        };
        let material_id = self.new_material_id.get_untracked();
        let quantity = self.new_quantity.get_untracked();
        if material_id.is_empty() {
            self.error.set(Some("Выберите материал".to_string()));
            return;
        }
        if quantity <= 0.0 {
            self.error
                .set(Some("Количество должно быть больше нуля".to_string()));
            return;
        }
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::add_material(&id, material_id, quantity).await {
                Ok(check) => {
                    if let Ok(order) = model::fetch_by_id(&id).await {
                        vm.apply_keeping_edits(order);
                    }
                    if let Ok(list) = material_model::fetch_all().await {
                        vm.materials.set(list);
                    }
                    vm.new_material_id.set(String::new());
                    vm.new_quantity.set(1.0);
                    vm.error.set(None);
                    on_added.run(check);
                }
                Err(e) => vm.error.set(Some(e)),
            }
        });
    }

    pub fn material_options(&self) -> Vec<(String, String)> {
        let mut options = vec![(String::new(), "(материал)".to_string())];
        self.materials.with(|list| {
            options.extend(list.iter().map(|m| {
                (
                    m.to_string_id(),
                    format!(
                        "{} - {} (остаток {} {})",
                        m.base.code, m.base.description, m.stock_quantity, m.unit
                    ),
                )
            }))
        });
        options
    }

    /// Подпись дат жизненного цикла для шапки вкладки
    pub fn lifecycle_caption(&self) -> String {
        self.order.with(|o| {
            let Some(o) = o else {
                return String::new();
            };
            let mut parts = vec![format!("создан {}", to_iso(o.created_date))];
            if let Some(d) = o.started_at {
                parts.push(format!("начат {}", to_iso(d)));
            }
            if let Some(d) = o.closed_date {
                parts.push(format!("закрыт {}", to_iso(d)));
            }
            parts.join(", ")
        })
    }
}

/// Поля, которые меняет сервер при смене статуса: сам статус и плановая
/// дата, если пользователь её не заполнил.
fn sync_server_fields(form: &mut MaintenanceOrderDto, order: &MaintenanceOrder) {
    form.status = order.status;
    if form.planned_date.trim().is_empty() {
        form.planned_date = to_iso_opt(order.planned_date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_status_change_keeps_unsaved_edits() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut order = MaintenanceOrder::new_for_insert(
            "OT-000007".into(),
            "Замена ремня".into(),
            "asset".into(),
            OrderType::Corrective,
            today,
        );
        let mut form = order.to_dto();
        form.description = "Замена ремня и натяжителя".into();
        form.work_notes = "ремень 1250 мм".into();

        // сервер ставит сегодняшнюю плановую дату при переводе в Planned
        order.transition_to(OrderStatus::Planned, today).unwrap();
        order.planned_date = Some(today);
        sync_server_fields(&mut form, &order);

        assert_eq!(form.status, OrderStatus::Planned);
        assert_eq!(form.planned_date, "2024-03-01");
        assert_eq!(form.description, "Замена ремня и натяжителя");
        assert_eq!(form.work_notes, "ремень 1250 мм");
    }

    #[test]
    fn test_user_planned_date_not_overwritten() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut order = MaintenanceOrder::new_for_insert(
            "OT-000008".into(),
            "Осмотр".into(),
            "asset".into(),
            OrderType::Preventive,
            today,
        );
        let mut form = order.to_dto();
        form.planned_date = "2024-03-20".into();

        order.transition_to(OrderStatus::InProgress, today).unwrap();
        sync_server_fields(&mut form, &order);

        assert_eq!(form.status, OrderStatus::InProgress);
        assert_eq!(form.planned_date, "2024-03-20");
    }
}
