//! Display formatting for product table cells.

/// Currency prefix for price cells.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Price with currency prefix and two decimal places.
pub fn format_price(value: f64) -> String {
    format!("{CURRENCY_SYMBOL}{value:.2}")
}

/// Discount with one decimal place and a percent suffix.
pub fn format_discount(percent: f64) -> String {
    format!("{percent:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate_discount;

    #[test]
    fn prices_use_two_decimals() {
        assert_eq!(format_price(100.0), "₹100.00");
        assert_eq!(format_price(79.999), "₹80.00");
        assert_eq!(format_price(0.5), "₹0.50");
    }

    #[test]
    fn discounts_use_one_decimal() {
        assert_eq!(format_discount(calculate_discount(100.0, 75.0)), "25.0%");
        assert_eq!(format_discount(calculate_discount(3.0, 2.0)), "33.3%");
        assert_eq!(format_discount(0.0), "0.0%");
    }
}
