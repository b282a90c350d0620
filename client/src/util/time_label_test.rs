use super::*;
use chrono::{FixedOffset, Utc};

#[test]
fn epoch_zero_renders_midnight_utc() {
    let label = time_label(0, &Utc);
    assert_eq!(label.short, "00:00");
    assert_eq!(label.full, "1970-01-01 00:00:00");
}

#[test]
fn month_is_one_based_and_day_is_day_of_month() {
    // 2024-03-15 09:05:07 UTC, a Friday.
    let label = time_label(1_710_493_507, &Utc);
    assert_eq!(label.short, "09:05");
    assert_eq!(label.full, "2024-03-15 09:05:07");
}

#[test]
fn offset_zone_shifts_the_clock() {
    let plus_three = FixedOffset::east_opt(3 * 3600).expect("valid offset");
    let label = time_label(0, &plus_three);
    assert_eq!(label.short, "03:00");
    assert_eq!(label.full, "1970-01-01 03:00:00");
}

#[test]
fn unrepresentable_timestamp_falls_back_to_placeholder() {
    let label = time_label(i64::MAX, &Utc);
    assert_eq!(label.short, UNKNOWN_TIME);
    assert!(label.full.is_empty());
}
