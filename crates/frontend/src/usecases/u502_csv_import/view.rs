use super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::usecases::u502_csv_import::{ImportCollection, ImportResult};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

fn collection_options() -> Vec<(String, String)> {
    ImportCollection::all()
        .into_iter()
        .map(|c| (c.code().to_string(), c.display_name().to_string()))
        .collect()
}

async fn read_file_text(file: &File) -> Result<String, String> {
    let value = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Не удалось прочитать файл: {:?}", e))?;
    value
        .as_string()
        .ok_or_else(|| "Файл не является текстовым".to_string())
}

#[component]
pub fn ImportWidget() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toast = use_context::<ToastService>().expect("ToastService not found in context");

    let collection = RwSignal::new(ImportCollection::Asset.code().to_string());
    let selected_file = RwSignal::new_local(None::<File>);
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (result, set_result) = signal::<Option<ImportResult>>(None);

    let headers_hint = move || {
        ImportCollection::from_code(&collection.get())
            .map(|c| c.known_headers().join(", "))
            .unwrap_or_default()
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        selected_file.set(file);
        set_result.set(None);
    };

    let on_import = move |_| {
        let Some(target) = ImportCollection::from_code(&collection.get_untracked()) else {
            set_error.set(Some("Выберите коллекцию".to_string()));
            return;
        };
        let Some(file) = selected_file.get_untracked() else {
            set_error.set(Some("Выберите CSV-файл".to_string()));
            return;
        };

        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let outcome = match read_file_text(&file).await {
                Ok(content) => api::import_csv(target, file.name(), content).await,
                Err(e) => Err(e),
            };
            match outcome {
                Ok(res) => {
                    log::info!(
                        "import {}: created={} skipped={} failed={}",
                        target.code(),
                        res.created,
                        res.skipped,
                        res.failed
                    );
                    if res.failed > 0 {
                        toast.warning(format!("Импорт завершён с ошибками: {}", res.failed));
                    } else {
                        toast.success(format!("Импортировано записей: {}", res.created));
                    }
                    set_result.set(Some(res));
                    ctx.notify_changed();
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Импорт из CSV"}</h1>
                </div>
            </div>

            <ErrorBox error=error />

            <div class="details-form">
                <Select
                    label="Коллекция"
                    value=Signal::derive(move || collection.get())
                    on_change=Callback::new(move |v| {
                        collection.set(v);
                        set_result.set(None);
                    })
                    options=Signal::derive(collection_options)
                />

                <div class="form__group">
                    <label class="form__label">{"Файл"}</label>
                    <input
                        type="file"
                        accept=".csv,text/csv"
                        class="form__input"
                        on:change=on_file_change
                    />
                </div>

                <div class="info-box">
                    {"Первая строка - заголовки. Поддерживаемые колонки: "}
                    <code>{headers_hint}</code>
                </div>

                <div class="details-actions">
                    <button
                        class="button button--primary"
                        on:click=on_import
                        disabled=move || is_loading.get() || selected_file.with(|f| f.is_none())
                    >
                        {icon("import")}
                        {move || if is_loading.get() { "Импорт..." } else { "Импортировать" }}
                    </button>
                </div>
            </div>

            {move || result.get().map(|res| view! {
                <div class="import-result">
                    <div class="import-result__summary">
                        <span class="badge badge--success">{format!("Создано: {}", res.created)}</span>
                        <span class="badge badge--neutral">{format!("Пропущено: {}", res.skipped)}</span>
                        <span class="badge badge--error">{format!("Ошибок: {}", res.failed)}</span>
                        <span>{format!("Всего строк: {}", res.total_rows())}</span>
                    </div>
                    {(!res.errors.is_empty()).then(|| view! {
                        <ul class="import-result__errors">
                            {res.errors.iter().cloned().map(|e| view! { <li>{e}</li> }).collect_view()}
                        </ul>
                    })}
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_options_cover_all() {
        let options = collection_options();
        assert_eq!(options.len(), ImportCollection::all().len());
        assert!(options
            .iter()
            .all(|(code, _)| ImportCollection::from_code(code).is_some()));
    }
}
