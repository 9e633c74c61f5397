//! The `ScheduleEvent` record.
//!
//! Events are owned by the caller.  The layout engine only reads them and may
//! synthesize *new* overflow placeholders; it never mutates an event it was
//! given.

use ws_core::{DayOfWeek, TimeOnly};

/// CSS class carried by synthesized "+N more" overflow placeholders.
///
/// Renderers use it to skip tooltips and to route clicks to zoom instead of
/// the regular event-click callback.
pub const OVERFLOW_CLASS: &str = "event-overflow-indicator";

/// One time-bounded entry on the weekly grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleEvent {
    /// Unique within the active event set.
    pub id: String,

    pub day: DayOfWeek,

    pub start_time: TimeOnly,

    /// Must be after `start_time` for a batch to validate.
    pub end_time: TimeOnly,

    pub title: String,

    pub description: Option<String>,

    /// Background colour hint, passed through untouched.
    pub color: Option<String>,

    /// Extra CSS classes, passed through untouched.
    pub class_name: Option<String>,

    /// Inline style hint, passed through untouched.
    pub style: Option<String>,
}

impl ScheduleEvent {
    pub fn new(
        id:         impl Into<String>,
        day:        DayOfWeek,
        start_time: TimeOnly,
        end_time:   TimeOnly,
        title:      impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            day,
            start_time,
            end_time,
            title: title.into(),
            description: None,
            color:       None,
            class_name:  None,
            style:       None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Signed length in minutes; zero or negative for degenerate events.
    #[inline]
    pub fn duration_minutes(&self) -> i32 {
        self.start_time.minutes_until(self.end_time)
    }

    /// `true` for synthesized "+N more" placeholders.
    pub fn is_overflow_indicator(&self) -> bool {
        self.class_name
            .as_deref()
            .is_some_and(|c| c.split_whitespace().any(|cls| cls == OVERFLOW_CLASS))
    }

    /// `true` if the half-open intervals `[start, end)` of `self` and `other`
    /// share any time.  The day is not compared.
    ///
    /// Degenerate intervals (`end <= start`) follow the same formula: a
    /// zero-length event at 09:30 overlaps 09:00–10:00 but not 09:30–10:00.
    #[inline]
    pub fn overlaps(&self, other: &ScheduleEvent) -> bool {
        !(other.end_time <= self.start_time || other.start_time >= self.end_time)
    }
}
