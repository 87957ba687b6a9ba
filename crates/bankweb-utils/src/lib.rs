//! Display helpers shared by the page-rendering code

use rust_decimal::Decimal;

/// Insert thousands separators into a plain digit string
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

/// Format a monetary amount with two decimal places and thousands separators
pub fn format_money(value: &Decimal) -> String {
    let rendered = format!("{:.2}", value);
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest.to_string()),
        None => ("", rendered),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (unsigned, "00".to_string()),
    };
    format!("{}{}.{}", sign, group_thousands(&int_part), frac_part)
}

/// Escape user-supplied text for interpolation into HTML
pub fn escape_html(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
