use super::model;
use contracts::domain::a001_asset::AssetDto;
use leptos::prelude::*;

/// ViewModel формы актива
#[derive(Clone, Copy)]
pub struct AssetDetailsViewModel {
    pub form: RwSignal<AssetDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl AssetDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(AssetDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| {
            !f.description.trim().is_empty()
                && f.code.as_deref().is_some_and(|c| !c.trim().is_empty())
        })
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(&existing_id).await {
                Ok(asset) => form.set(asset.to_dto()),
                Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if current.code.as_deref().unwrap_or("").trim().is_empty() {
            self.error.set(Some("Код обязателен для заполнения".to_string()));
            return;
        }
        if current.description.trim().is_empty() {
            self.error
                .set(Some("Наименование обязательно для заполнения".to_string()));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&current).await {
                Ok(_) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    }
}
