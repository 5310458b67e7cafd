/// Утилиты для списков: подсветка совпадений и поле поиска
use leptos::prelude::*;

/// Диапазоны (в байтах исходного текста) всех непересекающихся
/// case-insensitive вхождений `filter` в `text`.
///
/// Сравнение идёт по нижнему регистру, поэтому диапазоны пересчитываются
/// обратно на границы символов исходной строки.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    if filter.is_empty() {
        return Vec::new();
    }
    let needle = filter.to_lowercase();

    // lowered byte -> (start, end) of the source char it came from
    let mut lowered = String::with_capacity(text.len());
    let mut source: Vec<(usize, usize)> = Vec::with_capacity(text.len());
    for (idx, ch) in text.char_indices() {
        let span = (idx, idx + ch.len_utf8());
        for lc in ch.to_lowercase() {
            lowered.push(lc);
            source.extend(std::iter::repeat(span).take(lc.len_utf8()));
        }
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = lowered[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        let range = (source[start].0, source[end - 1].1);
        if ranges.last().map_or(true, |&(_, prev_end)| range.0 >= prev_end) {
            ranges.push(range);
        }
        from = end;
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Поле поиска с иконкой и кнопкой очистки.
///
/// Каждое изменение сразу передаётся в `on_change`, без задержки.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div class="search-container">
            <input
                type="text"
                class=move || if is_filter_active() { "search-input search-input--active" } else { "search-input" }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || if is_filter_active() {
                view! {
                    <button
                        class="search-clear"
                        title="Limpiar"
                        on:click=move |_| on_change.run(String::new())
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <span class="search-icon">{crate::shared::icons::icon("search")}</span> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Queso fresco", "queso"), vec![(0, 5)]);
        assert_eq!(match_ranges("Pan de pan", "PAN"), vec![(0, 3), (7, 10)]);
    }

    #[test]
    fn test_match_ranges_no_match_or_empty_filter() {
        assert!(match_ranges("Leche", "pan").is_empty());
        assert!(match_ranges("Leche", "").is_empty());
    }

    #[test]
    fn test_match_ranges_multibyte() {
        let text = "AZÚCAR rubia";
        let ranges = match_ranges(text, "úca");
        assert_eq!(ranges.len(), 1);
        let (start, end) = ranges[0];
        assert_eq!(&text[start..end], "ÚCA");
    }

    #[test]
    fn test_match_ranges_lowercase_expansion() {
        // 'İ' lowercases to two chars ("i̇"); ranges must stay on char boundaries
        let text = "İstanbul";
        let ranges = match_ranges(text, "i");
        assert_eq!(ranges.len(), 1);
        let (start, end) = ranges[0];
        assert_eq!(&text[start..end], "İ");
    }
}
