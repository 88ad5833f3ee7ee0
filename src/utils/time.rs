//! Time utilities: parsing HH:MM, formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Strict HH:MM parse; malformed input never reaches the duration math.
pub fn parse_required_time(s: &str) -> AppResult<NaiveTime> {
    parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
