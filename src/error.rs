use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid date range: min={min}, max={max}")]
    InvalidDateRange { min: String, max: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid date value: {0}")]
    InvalidDateValue(String),
}
