use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse a `--range` expression into inclusive date bounds.
///
/// Supported forms:
/// - `YYYY`
/// - `YYYY-MM`
/// - `YYYY-MM-DD`
/// - any `start:end` pair of the above (same granularity on both sides)
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(invalid(r, "start and end must have the same format"));
        }

        let (d1, _) = expand_period(start).ok_or_else(|| invalid(r, "invalid start"))?;
        let (_, d2) = expand_period(end).ok_or_else(|| invalid(r, "invalid end"))?;

        if d1 > d2 {
            return Err(invalid(r, "start is after end"));
        }
        Ok((d1, d2))
    } else {
        expand_period(r.trim()).ok_or_else(|| invalid(r, "unsupported format"))
    }
}

/// Expand a single period string to its first and last day.
fn expand_period(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").ok()?;
            let last = last_day_of_month(first)?;
            Some((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").ok()?;
            Some((d, d))
        }
        _ => None,
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = (first.year(), first.month());
    let next_month_first = if m == 12 {
        NaiveDate::from_ymd_opt(y + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(y, m + 1, 1)?
    };
    next_month_first.pred_opt()
}

fn invalid(r: &str, why: &str) -> AppError {
    AppError::InvalidDate(format!("range '{r}': {why}"))
}
