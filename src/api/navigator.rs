use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{increment, CursorId, DateCursor, Interval, TimeScale};
use crate::error::TimelineResult;
use crate::interaction::DateFieldFocus;

use super::config::TimeNavigatorConfig;
use super::events::NavigationEvent;

/// Which interval the user picked from the step-size menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalSelection {
    /// One of the fixed zoom presets; steps by one unit.
    Preset(TimeScale),
    /// The most recently staged custom unit/delta pair.
    Custom,
}

/// Orchestrating state holder for timeline navigation.
///
/// Owns the active time scale, the stepping interval and its staged custom
/// variant, the dragger selection, the custom-interval modal flag, and the
/// date-field focus cycle. Every operation is synchronous and total: bad
/// input is normalized at the boundary (delta floors, tab wraparound), so no
/// operation has a failure path.
///
/// Operations that the external date-state owner must hear about return a
/// [`NavigationEvent`]; the owner applies it and echoes resulting date
/// changes back through [`TimeNavigator::set_cursor_date`].
#[derive(Debug, Clone)]
pub struct TimeNavigator {
    time_scale: TimeScale,
    interval: Interval,
    staged_custom: Option<Interval>,
    dragger: CursorId,
    date_a: DateTime<Utc>,
    date_b: Option<DateTime<Utc>>,
    min_date: DateTime<Utc>,
    max_date: DateTime<Utc>,
    has_subdaily_layers: bool,
    compare_mode_active: bool,
    custom_interval_modal_open: bool,
    timeline_hidden: bool,
    focus: DateFieldFocus,
}

impl TimeNavigator {
    pub fn new(config: TimeNavigatorConfig) -> TimelineResult<Self> {
        let config = config.validate()?;
        debug!(
            date_a = %config.initial_date_a,
            scale = %config.time_scale,
            subdaily = config.has_subdaily_layers,
            "init time navigator"
        );

        Ok(Self {
            time_scale: config.time_scale,
            interval: Interval {
                unit: config.interval_unit,
                delta: config.interval_delta.max(1),
                is_custom: false,
            },
            staged_custom: None,
            dragger: config.dragger_selected,
            date_a: config.initial_date_a,
            date_b: config.initial_date_b,
            min_date: config.min_date,
            max_date: config.max_date,
            has_subdaily_layers: config.has_subdaily_layers,
            compare_mode_active: config.compare_mode_active,
            custom_interval_modal_open: false,
            timeline_hidden: false,
            focus: DateFieldFocus::default(),
        })
    }

    /// Switches the active time scale. Redundant selections are a no-op and
    /// produce no event.
    pub fn select_time_scale(&mut self, scale: TimeScale) -> Option<NavigationEvent> {
        if self.time_scale == scale {
            return None;
        }
        debug!(from = %self.time_scale, to = %scale, "change time scale");
        self.time_scale = scale;
        Some(NavigationEvent::TimeScaleChange { scale })
    }

    /// Stages a custom interval from the interval panel without activating
    /// it. Activation happens through `select_interval(Custom, ..)`.
    pub fn set_custom_interval(&mut self, delta: u32, unit: TimeScale) -> NavigationEvent {
        let staged = Interval::custom(unit, delta);
        trace!(unit = %staged.unit, delta = staged.delta, "stage custom interval");
        self.staged_custom = Some(staged);
        NavigationEvent::CustomIntervalStaged {
            delta: staged.delta,
            unit: staged.unit,
        }
    }

    /// Resolves and activates the interval for subsequent steps.
    ///
    /// A preset resolves to one unit; `Custom` substitutes the staged pair.
    /// When nothing was staged, `Custom` falls back to the active time scale
    /// at delta 1.
    pub fn select_interval(
        &mut self,
        selection: IntervalSelection,
        custom_flag: bool,
    ) -> NavigationEvent {
        let resolved = match selection {
            IntervalSelection::Preset(unit) => Interval::preset(unit),
            IntervalSelection::Custom => self
                .staged_custom
                .unwrap_or_else(|| Interval::preset(self.time_scale)),
        };

        self.interval = Interval {
            is_custom: custom_flag,
            ..resolved
        };
        debug!(
            unit = %self.interval.unit,
            delta = self.interval.delta,
            custom = custom_flag,
            "select interval"
        );
        NavigationEvent::IntervalChange {
            unit: self.interval.unit,
            delta: self.interval.delta,
            is_custom: custom_flag,
        }
    }

    /// Steps the dragger-selected cursor by the active interval.
    ///
    /// `direction` is the arrow-button multiplier (−1 left, +1 right). The
    /// resulting date is not clamped to `[min_date, max_date]`; the owner
    /// applies its own bounds policy before echoing the date back.
    pub fn increment_cursor(&mut self, direction: i32) -> NavigationEvent {
        let cursor = self.dragger;
        let base = self.cursor_date(cursor);
        let date = increment(base, self.interval.unit, self.interval.delta, direction);
        debug!(
            cursor = %cursor,
            from = %base,
            to = %date,
            unit = %self.interval.unit,
            delta = self.interval.delta,
            "increment cursor"
        );
        NavigationEvent::DateChange { date, cursor }
    }

    /// Flips the custom-interval modal. Purely local; closing without a
    /// `set_custom_interval` in between is how an edit is cancelled.
    pub fn toggle_custom_interval_modal(&mut self) {
        self.custom_interval_modal_open = !self.custom_interval_modal_open;
    }

    /// Switches which cursor subsequent edits and steps target. Never
    /// changes a date value.
    pub fn set_dragger(&mut self, cursor: CursorId) {
        trace!(cursor = %cursor, "select dragger");
        self.dragger = cursor;
    }

    pub fn toggle_timeline_visibility(&mut self) -> NavigationEvent {
        self.timeline_hidden = !self.timeline_hidden;
        NavigationEvent::TimelineVisibilityChange {
            hidden: self.timeline_hidden,
        }
    }

    // ---- date-field focus passthroughs ----

    pub fn focus_field(&mut self, tab: u8) {
        self.focus.focus(tab);
    }

    pub fn blur_fields(&mut self) {
        self.focus.blur();
    }

    /// Tab-cycles focus using the configured field layout.
    pub fn advance_focus(&mut self, requested: i32) -> u8 {
        self.focus.advance(requested, self.has_subdaily_layers)
    }

    // ---- downward sync from the external date-state owner ----

    /// Applies a date accepted by the owner to a cursor.
    pub fn set_cursor_date(&mut self, cursor: CursorId, date: DateTime<Utc>) {
        match cursor {
            CursorId::A => self.date_a = date,
            CursorId::B => self.date_b = Some(date),
        }
    }

    pub fn set_has_subdaily_layers(&mut self, has_subdaily: bool) {
        self.has_subdaily_layers = has_subdaily;
    }

    /// Enters or leaves comparison mode. Leaving drops cursor B and returns
    /// the dragger to cursor A.
    pub fn set_compare_mode(&mut self, active: bool, date_b: Option<DateTime<Utc>>) {
        self.compare_mode_active = active;
        if active {
            self.date_b = date_b.or(self.date_b);
        } else {
            self.date_b = None;
            self.dragger = CursorId::A;
        }
    }

    // ---- accessors ----

    #[must_use]
    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Step label for the arrow controls, e.g. `"1 day"`.
    #[must_use]
    pub fn interval_label(&self) -> String {
        self.interval.label()
    }

    #[must_use]
    pub fn staged_custom_interval(&self) -> Option<Interval> {
        self.staged_custom
    }

    #[must_use]
    pub fn dragger(&self) -> CursorId {
        self.dragger
    }

    /// Current value of a cursor. While cursor B is absent it mirrors cursor
    /// A, matching how an unmounted comparison selection renders.
    #[must_use]
    pub fn cursor_date(&self, cursor: CursorId) -> DateTime<Utc> {
        match cursor {
            CursorId::A => self.date_a,
            CursorId::B => self.date_b.unwrap_or(self.date_a),
        }
    }

    /// The cursor that edits currently target, with its value.
    #[must_use]
    pub fn active_cursor(&self) -> DateCursor {
        DateCursor::new(self.dragger, self.cursor_date(self.dragger))
    }

    #[must_use]
    pub fn custom_interval_modal_open(&self) -> bool {
        self.custom_interval_modal_open
    }

    #[must_use]
    pub fn timeline_hidden(&self) -> bool {
        self.timeline_hidden
    }

    #[must_use]
    pub fn focused_tab(&self) -> Option<u8> {
        self.focus.tab()
    }

    #[must_use]
    pub fn has_subdaily_layers(&self) -> bool {
        self.has_subdaily_layers
    }

    #[must_use]
    pub fn compare_mode_active(&self) -> bool {
        self.compare_mode_active
    }

    #[must_use]
    pub fn min_date(&self) -> DateTime<Utc> {
        self.min_date
    }

    #[must_use]
    pub fn max_date(&self) -> DateTime<Utc> {
        self.max_date
    }
}
