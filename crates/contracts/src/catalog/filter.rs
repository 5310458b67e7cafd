//! Фильтрация каталога по тексту и категории.
//!
//! Результат всегда является подпоследовательностью исходного списка
//! с сохранением порядка. Оба критерия объединяются через AND.

use crate::domain::a001_category::CategoryId;
use crate::domain::a002_product::Product;

/// Выбор категории, полученный из значения `<select>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategorySelection {
    /// Sentinel option: no category predicate
    #[default]
    All,
    Id(CategoryId),
    /// Non-empty selector without a leading integer; matches no product
    Unmatchable,
}

impl CategorySelection {
    /// Parse a `<select>` value.
    ///
    /// `""` selects all categories. Otherwise the leading integer is used
    /// (leading whitespace and trailing characters are ignored, so `" 3"` and
    /// `"3abc"` both select category 3). A value without a leading integer
    /// becomes [`CategorySelection::Unmatchable`].
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return CategorySelection::All;
        }

        let s = raw.trim_start();
        let (sign, digits) = match s.as_bytes().first().copied() {
            Some(b'-') => ("-", &s[1..]),
            Some(b'+') => ("", &s[1..]),
            _ => ("", s),
        };
        let len = digits.bytes().take_while(|b| b.is_ascii_digit()).count();
        if len == 0 {
            return CategorySelection::Unmatchable;
        }

        match format!("{}{}", sign, &digits[..len]).parse::<i64>() {
            Ok(id) => CategorySelection::Id(CategoryId(id)),
            Err(_) => CategorySelection::Unmatchable,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }

    pub fn matches(&self, category_id: CategoryId) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Id(id) => *id == category_id,
            CategorySelection::Unmatchable => false,
        }
    }
}

impl From<Option<CategoryId>> for CategorySelection {
    fn from(value: Option<CategoryId>) -> Self {
        value.map_or(CategorySelection::All, CategorySelection::Id)
    }
}

/// Критерии фильтрации: поисковая строка и выбранная категория
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search_text: String,
    pub category: CategorySelection,
}

impl CatalogFilter {
    pub fn new(search_text: impl Into<String>, category: impl Into<CategorySelection>) -> Self {
        Self {
            search_text: search_text.into(),
            category: category.into(),
        }
    }

    /// No predicate applies: filtering returns the full collection.
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && self.category.is_all()
    }

    pub fn active_filters_count(&self) -> usize {
        usize::from(!self.search_text.is_empty()) + usize::from(!self.category.is_all())
    }

    pub fn matches(&self, product: &Product) -> bool {
        text_matches(product, &self.search_text.to_lowercase()) && self.category.matches(product.category_id)
    }
}

/// `needle` must already be lowercased; an empty needle matches everything.
fn text_matches(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

/// Отфильтровать товары по критериям (порядок сохраняется)
pub fn filter_products(products: &[Product], filter: &CatalogFilter) -> Vec<Product> {
    if filter.is_empty() {
        return products.to_vec();
    }

    let needle = filter.search_text.to_lowercase();
    products
        .iter()
        .filter(|p| text_matches(p, &needle) && filter.category.matches(p.category_id))
        .cloned()
        .collect()
}
