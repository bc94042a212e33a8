pub mod config;
pub mod events;
pub mod navigator;

pub use config::TimeNavigatorConfig;
pub use events::NavigationEvent;
pub use navigator::{IntervalSelection, TimeNavigator};
