//! Grid geometry: time → slot indices, fractional offsets, and orientation.
//!
//! # Slot math
//!
//! ```text
//! minutes    = (hour - start_hour) * 60 + minute        clamped to the window
//! slot       = floor(minutes / interval)
//! fraction   = (minutes mod interval) / interval
//! final_end  = max(end_slot + (fraction(end) > 0), start_slot + 1)
//! ```
//!
//! A partly covered end slot belongs to the span, so the grid cell always
//! contains the fractional extent; an empty range still takes one slot.
//!
//! Grid lines are 1-based (CSS grid convention): an event covers lines
//! `[start_slot + 1, final_end + 1)` on the time axis and
//! `[day_index + 1, day_index + 2)` on the day axis.
//!
//! # Fractional placement
//!
//! Percentages refine the coarse grid cell.  Along the time axis they are in
//! units of one slot (100 = one slot) measured from the start of the first
//! covered slot, so 09:00–10:30 on an hourly grid is offset 0, extent 150.
//! Along the lane axis they split the day cell: offset `lane / total * 100`,
//! extent `100 / total`.
//!
//! | Orientation  | time axis        | lane axis        |
//! |--------------|------------------|------------------|
//! | `Vertical`   | rows, top/height | left/width       |
//! | `Horizontal` | columns, left/width | top/height    |

use ws_core::{DayOfWeek, Orientation, ScheduleConfig, TimeOnly, TimeSlotInterval};
use ws_event::ScheduleEvent;

use crate::{LaneInfo, LayoutError, LayoutResult};

// ── Output records ────────────────────────────────────────────────────────────

/// Slot coverage of one event along the time axis (0-based slots).
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlotSpan {
    pub start_slot:     u32,
    /// Slot containing the end time; may equal `start_slot`.
    pub end_slot:       u32,
    /// Exclusive end: covers a partly used `end_slot`, and is at least
    /// `start_slot + 1`.
    pub final_end_slot: u32,
    /// Position of the start time inside `start_slot`, in `[0, 1)`.
    pub start_fraction: f64,
    /// Position of the end time inside `end_slot`, in `[0, 1)`.
    pub end_fraction:   f64,
}

/// 1-based, end-exclusive CSS grid lines.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridPlacement {
    pub row_start:    u32,
    pub row_end:      u32,
    pub column_start: u32,
    pub column_end:   u32,
}

/// Sub-cell placement in percent.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FractionalPlacement {
    pub top_percent:    f64,
    pub height_percent: f64,
    pub left_percent:   f64,
    pub width_percent:  f64,
}

/// Everything the geometry stage computes for one event.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Placement {
    pub slots:    SlotSpan,
    pub grid:     GridPlacement,
    pub fraction: FractionalPlacement,
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Signed minutes from `start_hour:00` to `time`.
#[inline]
pub fn minutes_from_start(time: TimeOnly, start_hour: u8) -> i32 {
    (time.hours() as i32 - start_hour as i32) * 60 + time.minutes() as i32
}

/// 0-based slot index of `time` (negative before `start_hour`).
#[inline]
pub fn slot_index(time: TimeOnly, start_hour: u8, interval: TimeSlotInterval) -> i32 {
    minutes_from_start(time, start_hour).div_euclid(interval.minutes() as i32)
}

/// 1-based grid line at which `time` falls.
#[inline]
pub fn time_to_grid_line(time: TimeOnly, start_hour: u8, interval: TimeSlotInterval) -> i32 {
    slot_index(time, start_hour, interval) + 1
}

// ── GridSpec ──────────────────────────────────────────────────────────────────

/// The slice of configuration the geometry stage needs.
#[derive(Copy, Clone, Debug)]
pub struct GridSpec<'c> {
    pub start_hour:   u8,
    pub interval:     TimeSlotInterval,
    pub visible_days: &'c [DayOfWeek],
    pub orientation:  Orientation,
    /// Slots along the time axis; times are clamped into this window.
    pub total_slots:  u32,
}

impl<'c> GridSpec<'c> {
    pub fn from_config(config: &'c ScheduleConfig) -> Self {
        Self {
            start_hour:   config.start_hour,
            interval:     config.time_slot_interval,
            visible_days: &config.visible_days,
            orientation:  config.orientation,
            total_slots:  config.total_slots(),
        }
    }

    fn window_len(&self) -> i32 {
        (self.total_slots * self.interval.minutes()) as i32
    }

    fn clamped_minutes(&self, time: TimeOnly) -> u32 {
        minutes_from_start(time, self.start_hour).clamp(0, self.window_len()) as u32
    }

    /// Slot coverage of `[start, end)`, clamped to the window.
    pub fn slot_span(&self, start: TimeOnly, end: TimeOnly) -> SlotSpan {
        let interval = self.interval.minutes();
        let start_m = self.clamped_minutes(start);
        let end_m = self.clamped_minutes(end);

        let start_slot = start_m / interval;
        let end_slot = end_m / interval;
        let covered_end = end_slot + u32::from(end_m % interval != 0);
        SlotSpan {
            start_slot,
            end_slot,
            final_end_slot: covered_end.max(start_slot + 1),
            start_fraction: (start_m % interval) as f64 / interval as f64,
            end_fraction:   (end_m % interval) as f64 / interval as f64,
        }
    }

    /// `(offset, extent)` along the time axis in percent of one slot.
    fn time_percent(&self, start: TimeOnly, end: TimeOnly, span: &SlotSpan) -> (f64, f64) {
        let start_m = self.clamped_minutes(start);
        let end_m = self.clamped_minutes(end);
        let offset = span.start_fraction * 100.0;
        let extent = if end_m > start_m {
            (end_m - start_m) as f64 / self.interval.minutes() as f64 * 100.0
        } else {
            100.0
        };
        (offset, extent)
    }

    /// Compute grid lines and percentages for `event`.
    ///
    /// Fails with [`LayoutError::DayNotVisible`] if the event's day is not a
    /// visible day; the engine filters those out before this point, so the
    /// error marks a bug in the caller.
    pub fn place(&self, event: &ScheduleEvent, lane: Option<LaneInfo>) -> LayoutResult<Placement> {
        let day_index = self
            .visible_days
            .iter()
            .position(|d| *d == event.day)
            .ok_or(LayoutError::DayNotVisible(event.day))? as u32;

        let slots = self.slot_span(event.start_time, event.end_time);
        let (time_offset, time_extent) = self.time_percent(event.start_time, event.end_time, &slots);
        let (lane_offset, lane_extent) = match lane {
            Some(info) if info.total_lanes > 0 => {
                let total = info.total_lanes as f64;
                (info.lane as f64 / total * 100.0, 100.0 / total)
            }
            _ => (0.0, 100.0),
        };

        let time_lines = (slots.start_slot + 1, slots.final_end_slot + 1);
        let day_lines = (day_index + 1, day_index + 2);

        let (grid, fraction) = match self.orientation {
            Orientation::Vertical => (
                GridPlacement {
                    row_start:    time_lines.0,
                    row_end:      time_lines.1,
                    column_start: day_lines.0,
                    column_end:   day_lines.1,
                },
                FractionalPlacement {
                    top_percent:    time_offset,
                    height_percent: time_extent,
                    left_percent:   lane_offset,
                    width_percent:  lane_extent,
                },
            ),
            Orientation::Horizontal => (
                GridPlacement {
                    row_start:    day_lines.0,
                    row_end:      day_lines.1,
                    column_start: time_lines.0,
                    column_end:   time_lines.1,
                },
                FractionalPlacement {
                    top_percent:    lane_offset,
                    height_percent: lane_extent,
                    left_percent:   time_offset,
                    width_percent:  time_extent,
                },
            ),
        };

        Ok(Placement { slots, grid, fraction })
    }
}
