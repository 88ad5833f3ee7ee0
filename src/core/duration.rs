//! Wrap-aware elapsed-minutes computation between two times of day.

use chrono::NaiveTime;

/// Elapsed minutes from `start` to `end` on the same clock.
/// When `end` is earlier than `start` the operation ran past midnight,
/// so a full day is added (cutting never spans more than 24 hours).
/// `start == end` yields 0. The result is always in `0..1440`.
pub fn compute_duration_minutes(start: NaiveTime, end: NaiveTime) -> i64 {
    let raw = (end - start).num_minutes();
    raw.rem_euclid(24 * 60)
}
