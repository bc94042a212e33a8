use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimelineError;

/// Temporal resolution of the timeline, ordered coarsest to finest.
///
/// The active scale selects the unit for interval stepping and doubles as the
/// ordered list of editable date sub-fields (year/month/day, plus hour/minute
/// when sub-daily layers are present).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TimeScale {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

impl TimeScale {
    pub const ALL: [TimeScale; 5] = [
        TimeScale::Year,
        TimeScale::Month,
        TimeScale::Day,
        TimeScale::Hour,
        TimeScale::Minute,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TimeScale::Year => "year",
            TimeScale::Month => "month",
            TimeScale::Day => "day",
            TimeScale::Hour => "hour",
            TimeScale::Minute => "minute",
        }
    }

    /// Short unit label shown next to the interval arrows.
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            TimeScale::Year => "year",
            TimeScale::Month => "mon",
            TimeScale::Day => "day",
            TimeScale::Hour => "hour",
            TimeScale::Minute => "min",
        }
    }

    #[must_use]
    pub fn is_subdaily(self) -> bool {
        matches!(self, TimeScale::Hour | TimeScale::Minute)
    }

    /// Tab index of this scale's date sub-field (year = 1 .. minute = 5).
    #[must_use]
    pub fn tab_index(self) -> u8 {
        match self {
            TimeScale::Year => 1,
            TimeScale::Month => 2,
            TimeScale::Day => 3,
            TimeScale::Hour => 4,
            TimeScale::Minute => 5,
        }
    }

    /// Highest focusable tab index for the current field layout.
    #[must_use]
    pub fn max_tab(has_subdaily: bool) -> u8 {
        if has_subdaily { 5 } else { 3 }
    }
}

impl fmt::Display for TimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeScale {
    type Err = TimelineError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "year" => Ok(TimeScale::Year),
            "month" => Ok(TimeScale::Month),
            "day" => Ok(TimeScale::Day),
            "hour" => Ok(TimeScale::Hour),
            "minute" => Ok(TimeScale::Minute),
            other => Err(TimelineError::InvalidConfig(format!(
                "unknown time scale: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TimeScale;

    #[test]
    fn scales_order_coarsest_to_finest() {
        assert!(TimeScale::Year < TimeScale::Month);
        assert!(TimeScale::Day < TimeScale::Hour);
        assert!(TimeScale::Hour < TimeScale::Minute);
    }

    #[test]
    fn name_round_trip() {
        for scale in TimeScale::ALL {
            assert_eq!(scale.as_str().parse::<TimeScale>().unwrap(), scale);
        }
    }

    #[test]
    fn subdaily_split() {
        assert!(!TimeScale::Day.is_subdaily());
        assert!(TimeScale::Hour.is_subdaily());
        assert!(TimeScale::Minute.is_subdaily());
    }

    #[test]
    fn max_tab_drops_subdaily_stops() {
        assert_eq!(TimeScale::max_tab(true), 5);
        assert_eq!(TimeScale::max_tab(false), 3);
    }

    #[test]
    fn tab_indices_follow_field_order() {
        for (position, scale) in TimeScale::ALL.into_iter().enumerate() {
            assert_eq!(scale.tab_index(), position as u8 + 1);
        }
    }
}
