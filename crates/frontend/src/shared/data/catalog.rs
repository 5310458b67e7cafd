//! Статический источник данных каталога.
//!
//! Документ `productos.json` встраивается в бандл и разбирается один раз
//! при первом обращении; дальше каталог только читается.

use contracts::catalog::{CatalogData, CatalogError};
use once_cell::sync::Lazy;

const CATALOG_JSON: &str = include_str!("../../../data/productos.json");

static CATALOG: Lazy<Result<CatalogData, CatalogError>> =
    Lazy::new(|| CatalogData::from_json(CATALOG_JSON));

/// Загруженный каталог или ошибка разбора документа
pub fn load_catalog() -> Result<&'static CatalogData, &'static CatalogError> {
    match &*CATALOG {
        Ok(data) => {
            log::info!(
                "Catalog loaded: {} categories, {} products",
                data.categories.len(),
                data.products.len()
            );
            Ok(data)
        }
        Err(e) => {
            log::error!("Failed to load catalog: {}", e);
            Err(e)
        }
    }
}
