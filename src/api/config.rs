use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::date_value::format_iso;
use crate::core::{CursorId, TimeScale};
use crate::error::{TimelineError, TimelineResult};

/// Bootstrap configuration for [`TimeNavigator`](crate::api::TimeNavigator).
///
/// This type is serializable so host applications can persist/load timeline
/// setup without inventing their own ad-hoc format. The same shape is re-read
/// on every external update, closing the prop loop with the date-state owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeNavigatorConfig {
    pub initial_date_a: DateTime<Utc>,
    #[serde(default)]
    pub initial_date_b: Option<DateTime<Utc>>,
    pub min_date: DateTime<Utc>,
    pub max_date: DateTime<Utc>,
    #[serde(default = "default_scale")]
    pub time_scale: TimeScale,
    #[serde(default = "default_scale")]
    pub interval_unit: TimeScale,
    #[serde(default = "default_interval_delta")]
    pub interval_delta: u32,
    #[serde(default)]
    pub has_subdaily_layers: bool,
    #[serde(default = "default_dragger")]
    pub dragger_selected: CursorId,
    #[serde(default)]
    pub compare_mode_active: bool,
}

impl TimeNavigatorConfig {
    /// Creates a config with daily scale, a one-day interval, and cursor A
    /// selected.
    #[must_use]
    pub fn new(
        initial_date_a: DateTime<Utc>,
        min_date: DateTime<Utc>,
        max_date: DateTime<Utc>,
    ) -> Self {
        Self {
            initial_date_a,
            initial_date_b: None,
            min_date,
            max_date,
            time_scale: default_scale(),
            interval_unit: default_scale(),
            interval_delta: default_interval_delta(),
            has_subdaily_layers: false,
            dragger_selected: default_dragger(),
            compare_mode_active: false,
        }
    }

    /// Serializes the config for persistence by a host application.
    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            TimelineError::InvalidConfig(format!("failed to serialize config json: {err}"))
        })
    }

    /// Loads and validates a persisted config.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|err| {
            TimelineError::InvalidConfig(format!("failed to parse config json: {err}"))
        })?;
        config.validate()
    }

    pub fn validate(self) -> TimelineResult<Self> {
        if self.min_date > self.max_date {
            return Err(TimelineError::InvalidDateRange {
                min: format_iso(self.min_date),
                max: format_iso(self.max_date),
            });
        }

        if self.initial_date_a < self.min_date || self.initial_date_a > self.max_date {
            return Err(TimelineError::InvalidConfig(format!(
                "initial date A {} outside [{}, {}]",
                format_iso(self.initial_date_a),
                format_iso(self.min_date),
                format_iso(self.max_date),
            )));
        }

        if let Some(date_b) = self.initial_date_b {
            if date_b < self.min_date || date_b > self.max_date {
                return Err(TimelineError::InvalidConfig(format!(
                    "initial date B {} outside [{}, {}]",
                    format_iso(date_b),
                    format_iso(self.min_date),
                    format_iso(self.max_date),
                )));
            }
        }

        Ok(self)
    }
}

fn default_scale() -> TimeScale {
    TimeScale::Day
}

fn default_interval_delta() -> u32 {
    1
}

fn default_dragger() -> CursorId {
    CursorId::A
}
