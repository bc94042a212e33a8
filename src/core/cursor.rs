use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifies one of the two steppable date selections.
///
/// `A` is the primary selection; `B` exists only in comparison mode. The
/// serialized names are the dragger tokens used in persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorId {
    #[serde(rename = "selected")]
    A,
    #[serde(rename = "selectedB")]
    B,
}

impl CursorId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CursorId::A => "selected",
            CursorId::B => "selectedB",
        }
    }
}

impl fmt::Display for CursorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A date cursor: one selection on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCursor {
    pub id: CursorId,
    pub value: DateTime<Utc>,
}

impl DateCursor {
    #[must_use]
    pub fn new(id: CursorId, value: DateTime<Utc>) -> Self {
        Self { id, value }
    }
}
