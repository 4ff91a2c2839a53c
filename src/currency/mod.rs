//! Reply-facing amount formatting. Amounts always render as a grouped
//! integer followed by the configured three-letter currency code.

/// Rounds to a whole amount and inserts thousands separators, keeping the
/// sign: `-1234.5` becomes `"-1,235"`.
pub fn format_amount(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();
    let grouped = group_digits(&digits, ',');
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// `"<grouped amount> <CODE>"`, e.g. `"1,200 KES"`.
pub fn format_currency(amount: f64, code: &str) -> String {
    format!("{} {}", format_amount(amount), code)
}

/// Whole-number percentage for a spend ratio: `0.92` becomes `"92%"`.
pub fn format_percent(ratio: f64) -> String {
    format!("{}%", (ratio * 100.0).round() as i64)
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
