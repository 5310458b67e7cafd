//! Статический каталог: категории и товары, загружаемые один раз при старте.

pub mod filter;

pub use filter::{filter_products, CatalogFilter, CategorySelection};

use crate::domain::a001_category::{Category, CategoryId};
use crate::domain::a002_product::{Product, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Ошибки загрузки каталога
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Product {product_id} has a negative price: {price}")]
    NegativePrice { product_id: ProductId, price: f64 },

    #[error("Duplicate product id: {0}")]
    DuplicateProductId(ProductId),

    #[error("Duplicate category id: {0}")]
    DuplicateCategoryId(CategoryId),
}

/// Документ статических данных (`categorias` + `productos`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(rename = "categorias", default)]
    pub categories: Vec<Category>,

    #[serde(rename = "productos", default)]
    pub products: Vec<Product>,
}

impl CatalogData {
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Parse and validate the static catalog document.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(raw)?;
        data.validate()?;
        Ok(data)
    }

    /// Ids are unique per collection and prices are non-negative.
    /// A product pointing at an unknown category is accepted.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id) {
                return Err(CatalogError::DuplicateCategoryId(category.id));
            }
        }

        let mut product_ids = HashSet::new();
        for product in &self.products {
            if !product_ids.insert(product.id) {
                return Err(CatalogError::DuplicateProductId(product.id));
            }
            if product.price < 0.0 || product.price.is_nan() {
                return Err(CatalogError::NegativePrice {
                    product_id: product.id,
                    price: product.price,
                });
            }
        }
        Ok(())
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_name(&self, id: CategoryId) -> Option<&str> {
        self.category(id).map(|c| c.name.as_str())
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
