/// Поиск по спискам справочников: трейт строки и поле ввода с debounce
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Поиск начинается с этой длины запроса
pub const MIN_FILTER_LEN: usize = 2;

/// Строка списка, поддерживающая текстовый поиск
pub trait Searchable {
    /// Значения полей, по которым идёт поиск
    fn search_fields(&self) -> Vec<&str>;

    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Фильтрует список; короткий запрос не ограничивает выборку
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.trim().chars().count() < MIN_FILTER_LEN {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Поле поиска с задержкой 300 мс и кнопкой очистки
#[component]
pub fn SearchInput(
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };
    let input_value = RwSignal::new(String::new());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |value: String| {
        input_value.set(value.clone());
        // предыдущий таймер отменяется при drop
        pending.set_value(Some(Timeout::new(300, move || on_change.run(value))));
    };

    let clear = move |_| {
        pending.set_value(None);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Очистить" on:click=clear>
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        code: &'static str,
        name: &'static str,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.code, self.name]
        }
    }

    #[test]
    fn test_filter_list() {
        let rows = vec![
            Row { code: "AST-001", name: "Насос циркуляционный" },
            Row { code: "AST-002", name: "Компрессор" },
        ];
        assert_eq!(filter_list(&rows, "насос").len(), 1);
        assert_eq!(filter_list(&rows, "ast-00").len(), 2);
        assert_eq!(filter_list(&rows, "x").len(), 2);
        assert!(filter_list(&rows, "турбина").is_empty());
    }
}
