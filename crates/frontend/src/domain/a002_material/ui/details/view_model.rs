use super::model;
use crate::domain::a004_warehouse::ui::details::model as warehouse_model;
use contracts::domain::a002_material::MaterialDto;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct MaterialDetailsViewModel {
    pub form: RwSignal<MaterialDto>,
    pub error: RwSignal<Option<String>>,
    /// Склады для выпадающего списка: (id, наименование)
    pub warehouses: RwSignal<Vec<(String, String)>>,
}

impl MaterialDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(MaterialDto {
                unit: "шт".to_string(),
                ..Default::default()
            }),
            error: RwSignal::new(None),
            warehouses: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| {
            !f.description.trim().is_empty()
                && !f.unit.trim().is_empty()
                && f.code.as_deref().is_some_and(|c| !c.trim().is_empty())
        })
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let form = self.form;
        let error = self.error;
        let warehouses = self.warehouses;
        wasm_bindgen_futures::spawn_local(async move {
            match warehouse_model::fetch_all().await {
                Ok(list) => {
                    let mut options = vec![(String::new(), "(не указан)".to_string())];
                    options.extend(
                        list.into_iter()
                            .map(|w| (w.to_string_id(), w.base.description)),
                    );
                    warehouses.set(options);
                }
                Err(e) => error.set(Some(format!("Склады не загружены: {}", e))),
            }
            if let Some(existing_id) = id {
                match model::fetch_by_id(&existing_id).await {
                    Ok(material) => form.set(material.to_dto()),
                    Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
                }
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if current.min_stock < 0.0 || current.unit_cost < 0.0 {
            self.error
                .set(Some("Минимальный остаток и цена не могут быть отрицательными".to_string()));
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
