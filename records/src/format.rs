//! Display formatting for money amounts and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::macros::format_description;

/// Format a whole-unit amount with its currency symbol and thousands separators.
///
/// Unknown currency codes are printed as a prefix: `EUR 1,500`.
#[must_use]
pub fn format_money(amount: u64, currency: &str) -> String {
    let digits = group_thousands(amount);
    match currency {
        "NGN" => format!("\u{20a6}{digits}"),
        "USD" => format!("${digits}"),
        "GBP" => format!("\u{a3}{digits}"),
        other => format!("{other} {digits}"),
    }
}

fn group_thousands(amount: u64) -> String {
    let raw = amount.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format unix milliseconds (UTC) as `Jul 03, 2023 12:00 AM`.
#[must_use]
pub fn format_timestamp(ms: i64) -> String {
    let format = format_description!("[month repr:short] [day], [year] [hour repr:12]:[minute] [period]");
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
        .ok()
        .and_then(|dt| dt.format(&format).ok())
        .unwrap_or_else(|| "Invalid date".to_owned())
}

/// Like [`format_timestamp`], with `Never` for a missing value.
#[must_use]
pub fn format_optional_timestamp(ms: Option<i64>) -> String {
    ms.map_or_else(|| "Never".to_owned(), format_timestamp)
}
