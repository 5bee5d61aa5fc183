use super::model;
use crate::domain::a001_asset::ui::details::model as asset_model;
use crate::domain::a003_partner::ui::details::model as partner_model;
use contracts::domain::a005_contract::ContractDto;
use contracts::shared::date::parse_date;
use leptos::prelude::*;

/// ViewModel формы договора. Справочники контрагентов и активов
/// подгружаются вместе с формой.
#[derive(Clone, Copy)]
pub struct ContractDetailsViewModel {
    pub form: RwSignal<ContractDto>,
    pub error: RwSignal<Option<String>>,
    pub partners: RwSignal<Vec<(String, String)>>,
    pub assets: RwSignal<Vec<(String, String)>>,
}

impl ContractDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ContractDto::default()),
            error: RwSignal::new(None),
            partners: RwSignal::new(Vec::new()),
            assets: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| {
            !f.description.trim().is_empty()
                && !f.partner_id.is_empty()
                && f.code.as_deref().is_some_and(|c| !c.trim().is_empty())
        })
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match partner_model::fetch_all().await {
                Ok(list) => {
                    let mut options = vec![(String::new(), "(выберите)".to_string())];
                    options.extend(list.into_iter().map(|p| (p.to_string_id(), p.base.description)));
                    vm.partners.set(options);
                }
                Err(e) => vm.error.set(Some(e)),
            }
            match asset_model::fetch_all().await {
                Ok(list) => {
                    let mut options = vec![(String::new(), "(все оборудование)".to_string())];
                    options.extend(asset_model::to_options(&list));
                    vm.assets.set(options);
                }
                Err(e) => vm.error.set(Some(e)),
            }
            if let Some(existing_id) = id {
                match model::fetch_by_id(&existing_id).await {
                    Ok(contract) => vm.form.set(contract.to_dto()),
                    Err(e) => vm.error.set(Some(format!("Ошибка загрузки: {}", e))),
                }
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        match (parse_date(&current.start_date), parse_date(&current.end_date)) {
            (Some(start), Some(end)) if end < start => {
                self.error
                    .set(Some("Дата окончания раньше даты начала".to_string()));
                return;
            }
            (Some(_), Some(_)) => {}
            _ => {
                self.error
                    .set(Some("Укажите даты начала и окончания".to_string()));
                return;
            }
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
