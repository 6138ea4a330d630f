//! Display formatting for panel values.
//!
//! Every formatter takes `Option<f64>` and renders `None` (or a non-finite
//! number) as [`PLACEHOLDER`], never as zero or blank.

use chrono::NaiveDate;

/// Shown wherever a value is absent.
pub const PLACEHOLDER: &str = "N/A";

const COMPACT_UNITS: [(f64, &str); 5] = [
    (1.0, ""),
    (1e3, "K"),
    (1e6, "M"),
    (1e9, "B"),
    (1e12, "T"),
];

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Compact currency, at most one fractional digit: `1_234_567.0` → `$1.2M`.
pub fn format_currency(value: Option<f64>) -> String {
    match finite(value) {
        Some(v) => compact_currency(v),
        None => PLACEHOLDER.to_string(),
    }
}

fn compact_currency(value: f64) -> String {
    let abs = value.abs();
    let mut unit = COMPACT_UNITS
        .iter()
        .rposition(|(scale, _)| abs >= *scale)
        .unwrap_or(0);

    let mut rounded = round_to_tenth(abs / COMPACT_UNITS[unit].0);
    // 999_950 rounds to 1000.0K, which reads as $1M
    while rounded >= 1000.0 && unit + 1 < COMPACT_UNITS.len() {
        unit += 1;
        rounded = round_to_tenth(abs / COMPACT_UNITS[unit].0);
    }

    let sign = if value < 0.0 && rounded > 0.0 { "-" } else { "" };
    format!(
        "{}${}{}",
        sign,
        trim_tenths(rounded),
        COMPACT_UNITS[unit].1
    )
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn trim_tenths(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Percentage with exactly two fractional digits: `25.3123` → `25.31%`.
pub fn format_percent(value: Option<f64>) -> String {
    match finite(value) {
        Some(v) => format!("{:.2}%", v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Price with grouping and two fractional digits: `1234.5` → `$1,234.50`.
pub fn format_price(value: Option<f64>) -> String {
    match finite(value) {
        Some(v) => {
            let sign = if v < 0.0 { "-" } else { "" };
            let fixed = format!("{:.2}", v.abs());
            let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
            format!("{}${}.{}", sign, group_thousands(whole), cents)
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Plain ratio with two fractional digits (P/E, EPS, beta).
pub fn format_number(value: Option<f64>) -> String {
    match finite(value) {
        Some(v) => format!("{:.2}", v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Share count with thousands separators: `51234567.0` → `51,234,567`.
pub fn format_volume(value: Option<f64>) -> String {
    match finite(value) {
        Some(v) => {
            let sign = if v < 0.0 { "-" } else { "" };
            format!("{}{}", sign, group_thousands(&format!("{:.0}", v.abs())))
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Long-form table header for an ISO date key: `2023-06-30` → `June 30, 2023`.
///
/// Keys that are not ISO dates are shown verbatim.
pub fn format_date_header(key: &str) -> String {
    match NaiveDate::parse_from_str(key, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => key.to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
