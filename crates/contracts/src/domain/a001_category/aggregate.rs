use crate::domain::common::aggregate_id::int_aggregate_id;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

int_aggregate_id!(CategoryId);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория каталога. Загружается один раз из статических данных.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    #[serde(rename = "nombre")]
    pub name: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::AggregateId;

    #[test]
    fn test_category_from_contract_json() {
        let category: Category =
            serde_json::from_str(r#"{"id": 3, "nombre": "Lácteos"}"#).unwrap();
        assert_eq!(category, Category::new(3, "Lácteos"));
    }

    #[test]
    fn test_category_id_string_roundtrip() {
        assert_eq!(CategoryId(42).as_string(), "42");
        assert_eq!(CategoryId::from_string(" 7 ").unwrap(), CategoryId(7));
        assert!(CategoryId::from_string("abc").is_err());
    }
}
