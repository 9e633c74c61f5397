//! Axis descriptors: time-slot labels, day headers, and grid dimensions.
//!
//! Pure enumeration with no layout math.  The renderer draws these along the
//! time axis and the day axis respectively.

use ws_core::{DayOfWeek, Orientation, ScheduleConfig, TimeOnly, TimeSlotInterval};

/// One label on the time axis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeSlotLabel {
    pub time:  TimeOnly,
    /// `HH:MM`.
    pub label: String,
}

/// One header on the day axis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayHeader {
    pub day:       DayOfWeek,
    /// Translated name when translations are configured, English otherwise.
    pub name:      String,
    /// `true` when this header belongs to the zoomed-in day.
    pub is_zoomed: bool,
}

/// Row/column counts of the event grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridDimensions {
    pub rows:    u32,
    pub columns: u32,
}

/// Labels from `start_hour:00` to `end_hour:00` inclusive.
///
/// Sub-hour labels are only emitted for hours before `end_hour`, so the last
/// label is always `end_hour:00`.
pub fn time_slot_labels(
    start_hour: u8,
    end_hour:   u8,
    interval:   TimeSlotInterval,
) -> Vec<TimeSlotLabel> {
    let step = interval.minutes();
    let mut labels = Vec::new();

    for hour in start_hour..=end_hour {
        let steps = if hour == end_hour { 1 } else { interval.slots_per_hour() };
        for k in 0..steps {
            // start_hour/end_hour are validated to 0..=23.
            if let Ok(time) = TimeOnly::new(hour as u32, k * step) {
                labels.push(TimeSlotLabel { time, label: time.to_string() });
            }
        }
    }
    labels
}

/// Headers for the visible days, in display order.
///
/// Returns an empty list when `show_day_headers` is off.
pub fn day_headers(config: &ScheduleConfig, zoomed: Option<DayOfWeek>) -> Vec<DayHeader> {
    if !config.show_day_headers {
        return Vec::new();
    }
    config
        .visible_days
        .iter()
        .map(|&day| DayHeader {
            day,
            name:      day.display_name(config.day_name_translations.as_ref()).to_owned(),
            is_zoomed: zoomed == Some(day),
        })
        .collect()
}

/// Grid size for `config`; horizontal orientation swaps rows and columns.
pub fn grid_dimensions(config: &ScheduleConfig) -> GridDimensions {
    let slots = config.total_slots();
    let days = config.visible_days.len() as u32;
    match config.orientation {
        Orientation::Vertical   => GridDimensions { rows: slots, columns: days },
        Orientation::Horizontal => GridDimensions { rows: days, columns: slots },
    }
}
