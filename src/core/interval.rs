use serde::{Deserialize, Serialize};

use super::time_scale::TimeScale;

/// One navigation step: a unit and a positive step count.
///
/// `delta >= 1` holds by construction; both constructors floor the requested
/// delta at 1, so no later range check is needed anywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub unit: TimeScale,
    pub delta: u32,
    pub is_custom: bool,
}

impl Interval {
    /// Fixed zoom-preset interval: one step of `unit`.
    #[must_use]
    pub fn preset(unit: TimeScale) -> Self {
        Self {
            unit,
            delta: 1,
            is_custom: false,
        }
    }

    /// User-defined interval from the custom-interval panel.
    #[must_use]
    pub fn custom(unit: TimeScale, delta: u32) -> Self {
        Self {
            unit,
            delta: delta.max(1),
            is_custom: true,
        }
    }

    /// Label shown beside the step arrows, e.g. `"1 day"` or `"5 min"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{} {}", self.delta, self.unit.abbreviation())
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::preset(TimeScale::Day)
    }
}
