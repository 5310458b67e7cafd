//! Utilities for date formatting
//!
//! Dates are shown in long Spanish form, the way the catalog cards display
//! manufacture and expiry dates.

use chrono::{Datelike, NaiveDate};

/// Placeholder for an absent date
pub const DATE_NOT_SPECIFIED: &str = "No especificada";

/// Placeholder for absent free text (batch number)
pub const TEXT_NOT_SPECIFIED: &str = "No especificado";

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Format a date as "D de <mes> de YYYY"
/// Example: 2024-03-15 -> "15 de marzo de 2024", None -> "No especificada"
pub fn format_long_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!(
            "{} de {} de {}",
            d.day(),
            MONTHS_ES[d.month0() as usize],
            d.year()
        ),
        None => DATE_NOT_SPECIFIED.to_string(),
    }
}

/// Text value or the "not specified" placeholder
pub fn text_or_placeholder(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(TEXT_NOT_SPECIFIED)
        .to_string()
}
