//! Compact `id,date` token linking a selected natural event in a share URL.
//!
//! Parsing is total: a malformed id or date degrades that field to `None`
//! without affecting the other, and a parsed token always reopens the events
//! panel (`active = true`). Serialization is deliberately not a full inverse
//! of parsing; a persisted id implies the panel should reopen active even if
//! the selection that produced the token was inactive.

use serde::{Deserialize, Serialize};

/// The event id/date pair inside a selection. Fields are independently
/// nullable; a valid date can outlive an invalid id and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedEvent {
    pub id: Option<String>,
    pub date: Option<String>,
}

/// Events-panel selection state persisted through the permalink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSelection {
    pub selected: SelectedEvent,
    pub active: bool,
    pub show_all: bool,
}

/// Decodes a permalink token into a best-effort selection.
#[must_use]
pub fn parse(token: &str) -> EventSelection {
    let (id_part, date_part) = match token.split_once(',') {
        Some((id, date)) => (id, date),
        None => (token, ""),
    };

    EventSelection {
        selected: SelectedEvent {
            id: is_event_id(id_part).then(|| id_part.to_owned()),
            date: is_event_date(date_part).then(|| date_part.to_owned()),
        },
        active: true,
        show_all: false,
    }
}

/// Encodes a selection as a permalink token, or `None` when there is nothing
/// worth persisting.
#[must_use]
pub fn serialize(selection: &EventSelection) -> Option<String> {
    let id = selection
        .selected
        .id
        .as_deref()
        .filter(|id| !id.is_empty());
    let date = selection
        .selected
        .date
        .as_deref()
        .filter(|date| !date.is_empty());

    match (selection.active, id, date) {
        (true, Some(id), Some(date)) => Some(format!("{id},{date}")),
        (_, Some(id), _) => Some(id.to_owned()),
        (true, None, _) => Some("true".to_owned()),
        (false, None, _) => None,
    }
}

/// Full match against `EONET_[0-9]+`, case-insensitively.
fn is_event_id(text: &str) -> bool {
    const PREFIX: &[u8] = b"EONET_";
    let bytes = text.as_bytes();
    if bytes.len() <= PREFIX.len() {
        return false;
    }
    let (head, digits) = bytes.split_at(PREFIX.len());
    head.eq_ignore_ascii_case(PREFIX) && digits.iter().all(|byte| byte.is_ascii_digit())
}

/// Full match against `\d{4}-\d{2}-\d{2}`.
fn is_event_date(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(index, byte)| match index {
                4 | 7 => *byte == b'-',
                _ => byte.is_ascii_digit(),
            })
}
