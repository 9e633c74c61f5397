use thiserror::Error;

use ws_core::{DayOfWeek, ValidationErrors};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(ValidationErrors),

    #[error("invalid events: {0}")]
    InvalidEvents(ValidationErrors),

    #[error("cannot zoom to {0}: not a visible day")]
    ZoomDayNotVisible(DayOfWeek),

    /// An event reached the geometry stage for a day that is not visible.
    /// The engine filters these out first, so this indicates a caller bug.
    #[error("event day {0} is not among the visible days")]
    DayNotVisible(DayOfWeek),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
