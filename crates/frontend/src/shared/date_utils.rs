/// Utilities for date and time formatting
use chrono::{DateTime, Utc};

/// Short date used in tables, e.g. "Mar 15, 2024"
pub fn format_date(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Date and time used in detail views, e.g. "Mar 15, 2024 14:02"
pub fn format_datetime(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%b %d, %Y %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
