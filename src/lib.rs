//! timeline-rs: time-navigation core for interactive imagery timelines.
//!
//! This crate owns the date cursors, the time-scale/interval state machine,
//! the date-field focus cycle, and the event-permalink encoding of a timeline
//! UI. Axis rendering, drag projection, and playback belong to the host
//! application and talk to this core through [`api::TimeNavigator`].

pub mod api;
pub mod codec;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{NavigationEvent, TimeNavigator, TimeNavigatorConfig};
pub use error::{TimelineError, TimelineResult};
