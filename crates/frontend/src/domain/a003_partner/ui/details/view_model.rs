use super::model;
use contracts::domain::a003_partner::PartnerDto;
use leptos::prelude::*;

/// ViewModel формы контрагента
#[derive(Clone, Copy)]
pub struct PartnerDetailsViewModel {
    pub form: RwSignal<PartnerDto>,
    pub error: RwSignal<Option<String>>,
}

impl PartnerDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PartnerDto::default()),
            error: RwSignal::new(None),
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
        if let Some(existing_id) = id {
            let form = self.form;
            let error = self.error;
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_by_id(&existing_id).await {
                    Ok(partner) => form.set(partner.to_dto()),
                    Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
                }
            });
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        let email = current.email.trim();
        if !email.is_empty() && !email.contains('@') {
            self.error.set(Some("Некорректный e-mail".to_string()));
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
