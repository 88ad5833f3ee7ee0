use chrono::NaiveTime;
use cutlog::core::duration::compute_duration_minutes;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn plain_same_day_interval() {
    assert_eq!(compute_duration_minutes(t(8, 0), t(9, 0)), 60);
    assert_eq!(compute_duration_minutes(t(8, 15), t(12, 40)), 265);
}

#[test]
fn start_equals_end_is_zero() {
    assert_eq!(compute_duration_minutes(t(9, 0), t(9, 0)), 0);
    assert_eq!(compute_duration_minutes(t(0, 0), t(0, 0)), 0);
}

#[test]
fn wraps_past_midnight() {
    assert_eq!(compute_duration_minutes(t(22, 0), t(2, 0)), 240);
    assert_eq!(compute_duration_minutes(t(23, 59), t(0, 0)), 1);
    assert_eq!(compute_duration_minutes(t(0, 1), t(0, 0)), 1439);
}

#[test]
fn result_equals_end_minus_start_mod_1440_for_all_hours() {
    for sh in 0..24 {
        for eh in 0..24 {
            let start = t(sh, 30);
            let end = t(eh, 30);
            let expected = ((eh as i64 - sh as i64) * 60).rem_euclid(1440);
            assert_eq!(
                compute_duration_minutes(start, end),
                expected,
                "start={sh:02}:30 end={eh:02}:30"
            );
        }
    }
}

#[test]
fn never_negative() {
    for sh in 0..24 {
        for eh in 0..24 {
            let d = compute_duration_minutes(t(sh, 45), t(eh, 10));
            assert!((0..1440).contains(&d));
        }
    }
}
