pub mod date_value;
pub mod event_permalink;

pub use event_permalink::{EventSelection, SelectedEvent};
