use contracts::domain::a001_category::Category;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Value of the "all categories" option
pub const ALL_CATEGORIES: &str = "";

/// Выбор категории: sentinel "Todas las Categorías" + все категории по порядку
#[component]
pub fn CategorySelect(
    /// Категории в порядке документа
    categories: Vec<Category>,
    /// Текущее значение `<select>`
    #[prop(into)]
    value: Signal<String>,
    /// Обработчик изменения
    on_change: Callback<String>,
) -> impl IntoView {
    let options: Vec<(String, String)> = std::iter::once((
        ALL_CATEGORIES.to_string(),
        "Todas las Categorías".to_string(),
    ))
    .chain(categories.into_iter().map(|c| (c.id.as_string(), c.name)))
    .collect();

    view! {
        <div class="form__group category-filter">
            <label class="form__label" for="category-select">
                "Filtrar por Categoría:"
            </label>
            <select
                id="category-select"
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get()
            >
                {options
                    .into_iter()
                    .map(|(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
