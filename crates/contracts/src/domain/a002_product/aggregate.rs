use crate::domain::a001_category::CategoryId;
use crate::domain::common::aggregate_id::int_aggregate_id;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

int_aggregate_id!(ProductId);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар каталога в формате статического документа (`productos`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion", default)]
    pub description: String,

    #[serde(rename = "precio")]
    pub price: f64,

    #[serde(rename = "photo", default)]
    pub photo_ref: String,

    #[serde(rename = "categoriaId")]
    pub category_id: CategoryId,

    #[serde(
        rename = "fechaElaboracion",
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub manufacture_date: Option<NaiveDate>,

    #[serde(
        rename = "fechaExpiracion",
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry_date: Option<NaiveDate>,

    #[serde(
        rename = "lote",
        default,
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub batch: Option<String>,
}

impl Product {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category_id: i64,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            description: description.into(),
            price,
            photo_ref: String::new(),
            category_id: CategoryId(category_id),
            manufacture_date: None,
            expiry_date: None,
            batch: None,
        }
    }
}

/// Parse a contract date: `YYYY-MM-DD`, or an ISO datetime truncated to its date part.
/// Anything else is treated as absent.
/// Example: "2024-03-15T14:02:26Z" -> 2024-03-15
pub fn parse_contract_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_contract_date))
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_full_contract() {
        let json = r#"{
            "id": 1,
            "nombre": "Queso",
            "descripcion": "Queso fresco",
            "precio": 10,
            "photo": "img/queso.png",
            "categoriaId": 1,
            "fechaElaboracion": "2024-03-15",
            "fechaExpiracion": "2024-04-15T00:00:00Z",
            "lote": "L-001"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.category_id, CategoryId(1));
        assert_eq!(product.price, 10.0);
        assert_eq!(product.photo_ref, "img/queso.png");
        assert_eq!(product.manufacture_date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(product.expiry_date, NaiveDate::from_ymd_opt(2024, 4, 15));
        assert_eq!(product.batch.as_deref(), Some("L-001"));
    }

    #[test]
    fn test_optional_fields_absent() {
        let json = r#"{"id": 2, "nombre": "Pan", "descripcion": "Pan integral", "precio": 5.5, "photo": "", "categoriaId": 2}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.manufacture_date, None);
        assert_eq!(product.expiry_date, None);
        assert_eq!(product.batch, None);
    }

    #[test]
    fn test_invalid_or_empty_optional_fields_degrade_to_absent() {
        let json = r#"{
            "id": 3, "nombre": "Leche", "descripcion": "", "precio": 4, "photo": "", "categoriaId": 1,
            "fechaElaboracion": "", "fechaExpiracion": "mañana", "lote": "  "
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.manufacture_date, None);
        assert_eq!(product.expiry_date, None);
        assert_eq!(product.batch, None);
    }

    #[test]
    fn test_parse_contract_date() {
        assert_eq!(parse_contract_date("2024-12-31"), NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(parse_contract_date("2024-02-30"), None);
        assert_eq!(parse_contract_date("invalid"), None);
    }
}
