//! Display formatting for readings and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Placeholder for an absent reading.
pub const MISSING: &str = "-";

/// Two-decimal reading with an optional unit suffix, or `"-"` when absent.
pub fn format_reading(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if unit.is_empty() => format!("{v:.2}"),
        Some(v) => format!("{v:.2} {unit}"),
        None => MISSING.to_owned(),
    }
}

/// Reading rounded to `decimals` places, or `"-"` when absent.
pub fn format_fixed(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| MISSING.to_owned(), |v| format!("{v:.decimals$}"))
}

/// `2024-01-15T10:30:00.123` -> `2024-01-15 10:30`.
///
/// Anything that does not look like an ISO timestamp is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    match raw.split_once('T').and_then(|(date, time)| Some((date, time.get(..5)?))) {
        Some((date, hours_minutes)) => format!("{date} {hours_minutes}"),
        None => raw.to_owned(),
    }
}

/// Date part of an ISO timestamp.
pub fn format_date(raw: &str) -> &str {
    raw.split_once('T').map_or(raw, |(date, _)| date)
}
