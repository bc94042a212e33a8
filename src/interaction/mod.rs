use serde::{Deserialize, Serialize};

use crate::core::TimeScale;

/// Cyclic keyboard-focus state over the date sub-field widgets.
///
/// Tabs are 1-based: year, month, day, then hour and minute when sub-daily
/// fields are rendered. `None` means no field is focused. Tab cycling forms a
/// closed loop, so keyboard navigation never escapes the widget and silently
/// skips the sub-daily stops while they are hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFieldFocus {
    tab: Option<u8>,
}

impl DateFieldFocus {
    #[must_use]
    pub fn tab(self) -> Option<u8> {
        self.tab
    }

    /// A field gained focus directly (pointer click).
    pub fn focus(&mut self, tab: u8) {
        self.tab = Some(tab);
    }

    pub fn blur(&mut self) {
        self.tab = None;
    }

    /// Moves focus to `requested`, wrapping out-of-range indices.
    ///
    /// Direction is judged against the stored tab (blurred counts as 0, so
    /// any positive request reads as forward motion). Forward past the last
    /// visible field wraps to 1; backward past the first wraps to the last.
    /// Every integer input lands in `[1, max_tab]`.
    pub fn advance(&mut self, requested: i32, has_subdaily: bool) -> u8 {
        let max_tab = i32::from(TimeScale::max_tab(has_subdaily));
        let current = self.tab.map_or(0, i32::from);

        let next = if requested > current {
            if requested > max_tab { 1 } else { requested }
        } else if requested < 1 {
            max_tab
        } else if requested > max_tab {
            // Stale stored tab after the sub-daily fields unmount; land on
            // the last field still visible.
            max_tab
        } else {
            requested
        };

        let next = next as u8;
        self.tab = Some(next);
        next
    }
}
