use super::model;
use crate::domain::a001_asset::ui::details::model as asset_model;
use contracts::domain::a006_maintenance_routine::MaintenanceRoutineDto;
use contracts::shared::date::parse_date;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct RoutineDetailsViewModel {
    pub form: RwSignal<MaintenanceRoutineDto>,
    pub error: RwSignal<Option<String>>,
    pub assets: RwSignal<Vec<(String, String)>>,
}

impl RoutineDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(MaintenanceRoutineDto::default()),
            error: RwSignal::new(None),
            assets: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| {
            !f.name.trim().is_empty()
                && !f.asset_id.is_empty()
                && f.frequency_days > 0
                && f.code.as_deref().is_some_and(|c| !c.trim().is_empty())
        })
    }

    /// Пункты чек-листа для textarea: по одному на строку
    pub fn checklist_text(&self) -> String {
        self.form.with(|f| f.checklist_items.join("\n"))
    }

    pub fn set_checklist_text(&self, text: String) {
        self.form
            .update(|f| f.checklist_items = text.split('\n').map(str::to_string).collect());
    }

    pub fn load_if_needed(&self, id: Option<String>) {
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
            if let Some(existing_id) = id {
                match model::fetch_by_id(&existing_id).await {
                    Ok(routine) => vm.form.set(routine.to_dto()),
                    Err(e) => vm.error.set(Some(format!("Ошибка загрузки: {}", e))),
                }
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        let last = current.last_execution_date.trim();
        if !last.is_empty() && parse_date(last).is_none() {
            self.error
                .set(Some(format!("Некорректная дата последнего выполнения: {}", last)));
            return;
        }

        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&current).await {
                Ok(_) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
