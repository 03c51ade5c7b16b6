use chrono::{DateTime, Utc};

/// Appends `- {label}: {value}` when the value is present
pub fn push_field<T: std::fmt::Display>(lines: &mut Vec<String>, label: &str, value: Option<T>) {
    if let Some(value) = value {
        lines.push(format!("- {label}: {value}"));
    }
}

/// Human readable UTC timestamp
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Joins a tenant base and a relative web link; relative links are kept as is without a base
#[must_use]
pub fn absolute_url(base: Option<&str>, link: &str) -> String {
    match base {
        Some(base) if link.starts_with('/') => format!("{}{}", base.trim_end_matches('/'), link),
        _ => link.to_string(),
    }
}
