//! Display-price parsing and formatting.
//!
//! Catalog prices are carried as display strings in the es-CO convention:
//! a `$` symbol followed by an integer amount with `.` as the thousands
//! separator and no decimal places (e.g. `"$10.000"` for ten thousand
//! pesos). Totals are computed on the parsed integer amount and formatted
//! back with the same convention.

/// Parse a display price into an integer amount.
///
/// Strips the currency symbol and thousands separators. Returns `None`
/// when no digits remain or the amount overflows.
#[must_use]
pub fn parse_display_price(price: &str) -> Option<i64> {
    let digits: String = price.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Format an integer amount as a display price (`"$45.000"`).
#[must_use]
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}${grouped}")
}
