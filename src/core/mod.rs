pub mod arithmetic;
pub mod cursor;
pub mod interval;
pub mod time_scale;

pub use arithmetic::increment;
pub use cursor::{CursorId, DateCursor};
pub use interval::Interval;
pub use time_scale::TimeScale;
