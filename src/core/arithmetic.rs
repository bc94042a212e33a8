use chrono::{DateTime, Duration, Months, Utc};

use super::time_scale::TimeScale;

/// Steps `base` by `direction * delta` units of `unit`.
///
/// Month and year steps are calendar-aware: the day-of-month is clamped to
/// the target month's length, so `2021-01-31` plus one month is `2021-02-28`.
/// Day, hour, and minute steps are fixed-duration. The result is not clamped
/// to any timeline bounds; that policy belongs to the caller.
///
/// Pure and deterministic. A step that would leave chrono's representable
/// range returns `base` unchanged.
#[must_use]
pub fn increment(
    base: DateTime<Utc>,
    unit: TimeScale,
    delta: u32,
    direction: i32,
) -> DateTime<Utc> {
    let amount = i64::from(direction) * i64::from(delta);
    let stepped = match unit {
        TimeScale::Year => step_months(base, amount.saturating_mul(12)),
        TimeScale::Month => step_months(base, amount),
        TimeScale::Day => base.checked_add_signed(Duration::days(amount)),
        TimeScale::Hour => base.checked_add_signed(Duration::hours(amount)),
        TimeScale::Minute => base.checked_add_signed(Duration::minutes(amount)),
    };
    stepped.unwrap_or(base)
}

fn step_months(base: DateTime<Utc>, amount: i64) -> Option<DateTime<Utc>> {
    let magnitude = u32::try_from(amount.unsigned_abs()).ok()?;
    if amount >= 0 {
        base.checked_add_months(Months::new(magnitude))
    } else {
        base.checked_sub_months(Months::new(magnitude))
    }
}
