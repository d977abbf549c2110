//! # Derivation Path Equivalence
//!
//! A time of day can reach an absolute instant two ways: bind the date with
//! `on` and then resolve the calendar minute, or call `as_time_point_given`
//! directly. These tests drive both paths through the public API across
//! dates and offsets and require identical results.

use proptest::prelude::*;
use wallclock_core::{CalendarDate, HourOfDay, MinuteOfHour, TimeOfDay, Timezone};

fn nine_thirty() -> TimeOfDay {
    TimeOfDay::new(HourOfDay::new(9).unwrap(), MinuteOfHour::new(30).unwrap())
}

#[test]
fn paths_agree_on_fixed_vectors() {
    let dates = [
        CalendarDate::from_ymd(1970, 1, 1).unwrap(),
        CalendarDate::from_ymd(2000, 2, 29).unwrap(),
        CalendarDate::from_ymd(2026, 1, 15).unwrap(),
        CalendarDate::from_ymd(2026, 12, 31).unwrap(),
    ];
    let zones = [
        Timezone::utc(),
        Timezone::from_offset_minutes(330).unwrap(),
        Timezone::from_offset_minutes(-600).unwrap(),
        Timezone::from_offset_minutes(14 * 60).unwrap(),
    ];

    let time = nine_thirty();
    for date in dates {
        for zone in zones {
            let two_step = time.on(date).as_time_point(zone).unwrap();
            let direct = time.as_time_point_given(date, zone).unwrap();
            assert_eq!(two_step, direct, "date {date}, zone {zone}");
        }
    }
}

#[test]
fn resolved_instant_reads_back_in_same_zone() {
    let date = CalendarDate::from_ymd(2026, 1, 15).unwrap();
    let zone = Timezone::from_offset_minutes(-300).unwrap();
    let point = nine_thirty().as_time_point_given(date, zone).unwrap();

    assert_eq!(point.to_iso8601(), "2026-01-15T14:30:00Z");
    let local = point.in_zone(zone).unwrap();
    assert_eq!(local.date(), date);
    assert_eq!(local.time_of_day(), nine_thirty());
}

#[test]
fn later_time_same_day_is_later_instant() {
    let date = CalendarDate::from_ymd(2026, 1, 15).unwrap();
    let zone = Timezone::from_offset_minutes(60).unwrap();
    let early = TimeOfDay::from_hm(9, 30).unwrap();
    let late = TimeOfDay::from_hm(9, 45).unwrap();

    assert!(early.is_before(&late));
    assert!(
        early.as_time_point_given(date, zone).unwrap()
            < late.as_time_point_given(date, zone).unwrap()
    );
}

proptest! {
    #[test]
    fn paths_agree_everywhere(
        h in 0i32..=23,
        m in 0i32..=59,
        year in 1900i32..=2200,
        month in 1u32..=12,
        day in 1u32..=28,
        offset_minutes in -1439i32..=1439,
    ) {
        let time = TimeOfDay::from_hm(h, m).unwrap();
        let date = CalendarDate::from_ymd(year, month, day).unwrap();
        let zone = Timezone::from_offset_minutes(offset_minutes).unwrap();

        let two_step = time.on(date).as_time_point(zone).unwrap();
        let direct = time.as_time_point_given(date, zone).unwrap();
        prop_assert_eq!(two_step, direct);
        prop_assert_eq!(direct.in_zone(zone).unwrap(), time.on(date));
    }
}
