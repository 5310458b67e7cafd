//! Форматирование цен для карточек товаров

/// Форматирует цену с двумя знаками после запятой и префиксом валюты
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_price;
/// assert_eq!(format_price(10.0, "S/."), "S/. 10.00");
/// ```
pub fn format_price(value: f64, currency: &str) -> String {
    if currency.is_empty() {
        format!("{:.2}", value)
    } else {
        format!("{} {:.2}", currency, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(10.0, "S/."), "S/. 10.00");
        assert_eq!(format_price(4.2, "S/."), "S/. 4.20");
        assert_eq!(format_price(1234.567, "S/."), "S/. 1234.57");
        assert_eq!(format_price(0.0, "S/."), "S/. 0.00");
    }

    #[test]
    fn test_format_price_without_currency() {
        assert_eq!(format_price(5.0, ""), "5.00");
    }
}
