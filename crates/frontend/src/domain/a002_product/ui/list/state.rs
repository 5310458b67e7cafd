use contracts::catalog::{filter_products, CatalogFilter, CategorySelection};
use contracts::domain::a002_product::{Product, ProductId};
use leptos::prelude::*;

/// Раскрытая карточка товара: не более одной одновременно
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Expansion {
    #[default]
    Collapsed,
    Expanded(ProductId),
}

impl Expansion {
    /// Click on a product card: collapse it if it is the open one,
    /// otherwise open it (closing any other).
    pub fn activate(self, id: ProductId) -> Self {
        match self {
            Expansion::Expanded(current) if current == id => Expansion::Collapsed,
            _ => Expansion::Expanded(id),
        }
    }

    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            Expansion::Collapsed => None,
            Expansion::Expanded(id) => Some(*id),
        }
    }
}

/// Состояние списка товаров.
///
/// Фильтры меняются только через методы-переходы, каждый из которых
/// пересчитывает `filtered`.
#[derive(Clone, Debug, Default)]
pub struct ProductListState {
    // source
    products: Vec<Product>,

    // filters
    search_text: String,
    category_selector: String,
    category: CategorySelection,

    // expansion
    expansion: Expansion,

    // derived
    filtered: Vec<Product>,
}

impl ProductListState {
    pub fn new(products: Vec<Product>) -> Self {
        let mut st = Self {
            products,
            ..Self::default()
        };
        st.recompute();
        st
    }

    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.recompute();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.recompute();
    }

    /// Raw `<select>` value; `""` is the "all categories" option.
    pub fn set_category(&mut self, selector: impl Into<String>) {
        self.category_selector = selector.into();
        self.category = CategorySelection::parse(&self.category_selector);
        self.recompute();
    }

    /// Clears search text and category. Expansion is left as is.
    pub fn reset(&mut self) {
        self.search_text.clear();
        self.category_selector.clear();
        self.category = CategorySelection::All;
        self.recompute();
    }

    pub fn activate(&mut self, id: ProductId) {
        self.expansion = self.expansion.activate(id);
    }

    pub fn filter(&self) -> CatalogFilter {
        CatalogFilter::new(self.search_text.clone(), self.category)
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn category_selector(&self) -> &str {
        &self.category_selector
    }

    pub fn category(&self) -> CategorySelection {
        self.category
    }

    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    pub fn expanded_product_id(&self) -> Option<ProductId> {
        self.expansion.product_id()
    }

    pub fn is_expanded(&self, id: ProductId) -> bool {
        self.expansion == Expansion::Expanded(id)
    }

    pub fn filtered_products(&self) -> &[Product] {
        &self.filtered
    }

    pub fn total_count(&self) -> usize {
        self.products.len()
    }

    fn recompute(&mut self) {
        self.filtered = filter_products(&self.products, &self.filter());
        log::debug!(
            "Product list recomputed: q='{}', category={:?}, {} of {} shown",
            self.search_text,
            self.category,
            self.filtered.len(),
            self.products.len()
        );
    }
}

pub fn create_state(products: Vec<Product>) -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::new(products))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::CategoryId;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(1, "Queso", "Queso fresco", 10.0, 1),
            Product::new(2, "Pan", "Pan integral", 5.0, 2),
        ]
    }

    fn ids(st: &ProductListState) -> Vec<i64> {
        st.filtered_products().iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let st = ProductListState::new(sample());
        assert_eq!(st.filtered_products(), sample().as_slice());
        assert_eq!(st.expanded_product_id(), None);
        assert!(st.filter().is_empty());
    }

    #[test]
    fn test_search_text_recomputes() {
        let mut st = ProductListState::new(sample());
        st.set_search_text("queso");
        assert_eq!(ids(&st), vec![1]);
        st.set_search_text("");
        assert_eq!(ids(&st), vec![1, 2]);
    }

    #[test]
    fn test_category_recomputes() {
        let mut st = ProductListState::new(sample());
        st.set_category("2");
        assert_eq!(st.category(), CategorySelection::Id(CategoryId(2)));
        assert_eq!(ids(&st), vec![2]);
    }

    #[test]
    fn test_mismatched_criteria_yield_empty() {
        let mut st = ProductListState::new(sample());
        st.set_search_text("pan");
        st.set_category("1");
        assert!(st.filtered_products().is_empty());
    }

    #[test]
    fn test_unparseable_category_matches_nothing() {
        let mut st = ProductListState::new(sample());
        st.set_category("lácteos");
        assert_eq!(st.category(), CategorySelection::Unmatchable);
        assert!(st.filtered_products().is_empty());
    }

    #[test]
    fn test_reset_clears_filters_but_not_expansion() {
        let mut st = ProductListState::new(sample());
        st.activate(ProductId(2));
        st.set_search_text("pan");
        st.set_category("1");
        st.reset();
        assert_eq!(st.search_text(), "");
        assert_eq!(st.category_selector(), "");
        assert_eq!(st.category(), CategorySelection::All);
        assert_eq!(ids(&st), vec![1, 2]);
        assert_eq!(st.expanded_product_id(), Some(ProductId(2)));
    }

    #[test]
    fn test_expansion_toggle() {
        let mut st = ProductListState::new(sample());
        st.activate(ProductId(1));
        assert!(st.is_expanded(ProductId(1)));
        st.activate(ProductId(1));
        assert_eq!(st.expansion(), Expansion::Collapsed);
    }

    #[test]
    fn test_expansion_is_exclusive() {
        let mut st = ProductListState::new(sample());
        st.activate(ProductId(1));
        st.activate(ProductId(2));
        assert!(!st.is_expanded(ProductId(1)));
        assert!(st.is_expanded(ProductId(2)));
        assert_eq!(st.expanded_product_id(), Some(ProductId(2)));
    }

    #[test]
    fn test_filter_changes_keep_expansion() {
        let mut st = ProductListState::new(sample());
        st.activate(ProductId(1));
        st.set_search_text("pan");
        assert_eq!(st.expanded_product_id(), Some(ProductId(1)));
    }

    #[test]
    fn test_source_change_recomputes() {
        let mut st = ProductListState::new(sample());
        st.set_search_text("leche");
        assert!(st.filtered_products().is_empty());
        let mut products = sample();
        products.push(Product::new(3, "Leche", "Leche entera", 4.0, 1));
        st.set_products(products);
        assert_eq!(ids(&st), vec![3]);
        assert_eq!(st.total_count(), 3);
    }
}
