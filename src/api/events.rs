use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{CursorId, TimeScale};

/// Upward notification from the navigation core to the external date-state
/// owner.
///
/// This is a closed set; hosts match exhaustively and forward each variant to
/// their own state container. Events are emitted synchronously by the
/// operation that caused them and carry everything the owner needs, so the
/// core never has to be queried back during dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NavigationEvent {
    /// A cursor stepped to a new date. The cursor itself is not yet updated;
    /// the owner echoes the accepted date back via
    /// [`TimeNavigator::set_cursor_date`](crate::api::TimeNavigator::set_cursor_date).
    DateChange {
        date: DateTime<Utc>,
        cursor: CursorId,
    },
    TimeScaleChange {
        scale: TimeScale,
    },
    /// The active stepping interval changed.
    IntervalChange {
        unit: TimeScale,
        delta: u32,
        is_custom: bool,
    },
    /// A custom interval was staged from the interval panel, without being
    /// activated.
    CustomIntervalStaged {
        delta: u32,
        unit: TimeScale,
    },
    TimelineVisibilityChange {
        hidden: bool,
    },
}
