use std::str::FromStr;

use bigdecimal::BigDecimal;

/// Parse a price string as sent by the backend (`"150000"`, `"99.50"`).
///
/// Malformed values degrade the way the original client did: the longest
/// leading integer prefix is used, and a string with no leading digits
/// is worth zero.
pub fn parse_price(raw: &str) -> BigDecimal {
    let trimmed = raw.trim();
    if let Ok(value) = BigDecimal::from_str(trimmed) {
        return value;
    }

    let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return BigDecimal::from(0);
    }
    let prefix = if trimmed.starts_with('-') {
        format!("-{digits}")
    } else {
        digits
    };
    BigDecimal::from_str(&prefix).unwrap_or_else(|_| BigDecimal::from(0))
}

/// Price of one cart or order line: unit price times quantity.
pub fn line_total(price: &str, quantity: i64) -> BigDecimal {
    parse_price(price) * BigDecimal::from(quantity)
}
