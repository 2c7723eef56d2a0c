//! Display formatting for amounts and dates (en-US, USD fixed).

use chrono::{DateTime, Utc};

/// Formats an amount as US dollars with thousands separators and two
/// decimals. The sign leads the currency symbol: `-$50.00`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let grouped = group_thousands(cents / 100);
    let formatted = format!("${}.{:02}", grouped, cents % 100);
    if amount < 0.0 && cents > 0 {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// Short date label, e.g. `Jun 15, 2025`.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Month heading label, e.g. `June 2025`.
pub fn format_month_year(date: DateTime<Utc>) -> String {
    date.format("%B %Y").to_string()
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
