use chrono::{DateTime, Datelike, TimeZone, Utc};
use proptest::prelude::*;
use timeline_rs::core::{increment, TimeScale};

fn fixed_duration_unit() -> impl Strategy<Value = TimeScale> {
    prop_oneof![
        Just(TimeScale::Day),
        Just(TimeScale::Hour),
        Just(TimeScale::Minute),
    ]
}

fn timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    // 1970-01-01 .. 2100-01-01, minute-aligned like real layer dates.
    (0i64..4_102_444_800 / 60).prop_map(|minutes| {
        DateTime::<Utc>::from_timestamp(minutes * 60, 0).expect("in range")
    })
}

proptest! {
    #[test]
    fn fixed_duration_steps_are_exactly_invertible(
        base in timestamp(),
        unit in fixed_duration_unit(),
        delta in 1u32..=1_000,
        forward_first in any::<bool>()
    ) {
        let first = if forward_first { 1 } else { -1 };
        let there = increment(base, unit, delta, first);
        let back = increment(there, unit, delta, -first);
        prop_assert_eq!(back, base);
    }

    #[test]
    fn month_steps_round_trip_when_day_of_month_survives(
        year in 1990i32..=2050,
        month in 1u32..=12,
        day in 1u32..=28,
        delta in 1u32..=48
    ) {
        // Days 1..=28 exist in every month, so the documented clamping edge
        // case cannot trigger and the round trip must be exact.
        let base = Utc
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .expect("valid date");
        let there = increment(base, TimeScale::Month, delta, 1);
        let back = increment(there, TimeScale::Month, delta, -1);
        prop_assert_eq!(back, base);
    }

    #[test]
    fn year_steps_round_trip_off_leap_day(
        year in 1990i32..=2050,
        month in 1u32..=12,
        day in 1u32..=28,
        delta in 1u32..=20
    ) {
        let base = Utc
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .expect("valid date");
        let there = increment(base, TimeScale::Year, delta, 1);
        let back = increment(there, TimeScale::Year, delta, -1);
        prop_assert_eq!(back, base);
    }

    #[test]
    fn month_step_never_overflows_into_next_month(
        year in 1990i32..=2050,
        month in 1u32..=12,
        day in 29u32..=31,
        delta in 1u32..=48
    ) {
        let Some(base) = Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single() else {
            // Not every month has this day; nothing to test.
            return Ok(());
        };
        let there = increment(base, TimeScale::Month, delta, 1);
        let expected_month0 = (month - 1 + delta) % 12;
        prop_assert_eq!(there.month0(), expected_month0);
        prop_assert!(there.day() <= day);
    }

    #[test]
    fn zero_direction_is_the_identity(
        base in timestamp(),
        delta in 1u32..=1_000
    ) {
        for unit in TimeScale::ALL {
            prop_assert_eq!(increment(base, unit, delta, 0), base);
        }
    }
}
