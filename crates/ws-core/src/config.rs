//! Schedule configuration: visible days, time window, slot size, orientation.
//!
//! A `ScheduleConfig` is read-only input to every layout pass.  It is
//! validated once up front ([`ScheduleConfig::validate`]); the layout stages
//! assume a valid config and never re-check it.
//!
//! # Grid extent
//!
//! ```text
//! total_slots = (end_hour - start_hour + 1) * (60 / interval)
//! columns     = visible_days.len()
//! ```
//!
//! The end hour is inclusive: a 9–17 schedule shows the 17:00 hour as well.
//! With `Orientation::Horizontal` rows and columns swap roles.

use std::collections::HashSet;
use std::fmt;

use crate::day::{DayNameTranslations, DayOfWeek, WORK_WEEK_DAYS};
use crate::{CoreError, FieldError, ValidationErrors};

// ── TimeSlotInterval ──────────────────────────────────────────────────────────

/// Width of one grid slot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum TimeSlotInterval {
    FifteenMinutes = 15,
    ThirtyMinutes  = 30,
    #[default]
    SixtyMinutes   = 60,
}

impl TimeSlotInterval {
    #[inline]
    pub fn minutes(self) -> u32 {
        self as u32
    }

    #[inline]
    pub fn slots_per_hour(self) -> u32 {
        60 / self.minutes()
    }
}

impl TryFrom<u32> for TimeSlotInterval {
    type Error = CoreError;

    fn try_from(minutes: u32) -> Result<Self, CoreError> {
        match minutes {
            15 => Ok(TimeSlotInterval::FifteenMinutes),
            30 => Ok(TimeSlotInterval::ThirtyMinutes),
            60 => Ok(TimeSlotInterval::SixtyMinutes),
            other => Err(CoreError::InvalidInterval(other)),
        }
    }
}

impl From<TimeSlotInterval> for u32 {
    fn from(interval: TimeSlotInterval) -> u32 {
        interval.minutes()
    }
}

// ── Orientation ───────────────────────────────────────────────────────────────

/// Which grid axis carries time.
///
/// - `Vertical`: rows are time slots, columns are days.
/// - `Horizontal`: rows are days, columns are time slots.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Vertical   => "vertical",
            Orientation::Horizontal => "horizontal",
        })
    }
}

// ── ScheduleConfig ────────────────────────────────────────────────────────────

/// Layout configuration supplied by the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScheduleConfig {
    /// Days to show, in column (or row) order.
    pub visible_days: Vec<DayOfWeek>,

    /// First hour shown (0–23).
    pub start_hour: u8,

    /// Last hour shown, inclusive (0–23).
    pub end_hour: u8,

    pub time_slot_interval: TimeSlotInterval,

    pub orientation: Orientation,

    /// Whether the renderer should draw the day header row.
    pub show_day_headers: bool,

    /// Extra CSS class passed through to the renderer untouched.
    pub class_name: String,

    pub day_name_translations: Option<DayNameTranslations>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            visible_days:          WORK_WEEK_DAYS.to_vec(),
            start_hour:            9,
            end_hour:              17,
            time_slot_interval:    TimeSlotInterval::SixtyMinutes,
            orientation:           Orientation::Vertical,
            show_day_headers:      true,
            class_name:            String::new(),
            day_name_translations: None,
        }
    }
}

impl ScheduleConfig {
    /// Check every field, collecting all problems.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.visible_days.is_empty() {
            errors.push(FieldError::new("visibleDays", "at least one day must be visible"));
        }
        let mut seen = HashSet::with_capacity(self.visible_days.len());
        for day in &self.visible_days {
            if !seen.insert(*day) {
                errors.push(FieldError::new("visibleDays", format!("duplicate day {day}")));
            }
        }

        if self.start_hour > 23 {
            errors.push(FieldError::new(
                "startHour",
                format!("start hour {} must be between 0 and 23", self.start_hour),
            ));
        }
        if self.end_hour > 23 {
            errors.push(FieldError::new(
                "endHour",
                format!("end hour {} must be between 0 and 23", self.end_hour),
            ));
        }
        if self.start_hour > self.end_hour {
            errors.push(FieldError::new(
                "startHour",
                format!(
                    "start hour {} must not be after end hour {}",
                    self.start_hour, self.end_hour
                ),
            ));
        }

        errors.into_result()
    }

    /// Position of `day` in `visible_days`, if shown.
    pub fn day_index(&self, day: DayOfWeek) -> Option<usize> {
        self.visible_days.iter().position(|d| *d == day)
    }

    pub fn is_visible(&self, day: DayOfWeek) -> bool {
        self.visible_days.contains(&day)
    }

    /// Number of slots along the time axis.
    pub fn total_slots(&self) -> u32 {
        let hours = self.end_hour.saturating_sub(self.start_hour) as u32 + 1;
        hours * self.time_slot_interval.slots_per_hour()
    }

    /// `[start, end)` of the visible window in minutes since midnight.
    pub fn window_minutes(&self) -> (u16, u16) {
        let start = self.start_hour as u16 * 60;
        let end = (self.end_hour as u16 + 1) * 60;
        (start, end)
    }

    /// A copy showing only `day`, as used for the zoomed view.
    pub fn zoomed_to(&self, day: DayOfWeek) -> ScheduleConfig {
        ScheduleConfig { visible_days: vec![day], ..self.clone() }
    }

    /// Apply a partial update.  The result is not validated.
    pub fn merged(&self, patch: ConfigPatch) -> ScheduleConfig {
        ScheduleConfig {
            visible_days:          patch.visible_days.unwrap_or_else(|| self.visible_days.clone()),
            start_hour:            patch.start_hour.unwrap_or(self.start_hour),
            end_hour:              patch.end_hour.unwrap_or(self.end_hour),
            time_slot_interval:    patch.time_slot_interval.unwrap_or(self.time_slot_interval),
            orientation:           patch.orientation.unwrap_or(self.orientation),
            show_day_headers:      patch.show_day_headers.unwrap_or(self.show_day_headers),
            class_name:            patch.class_name.unwrap_or_else(|| self.class_name.clone()),
            day_name_translations: patch
                .day_name_translations
                .or_else(|| self.day_name_translations.clone()),
        }
    }
}

// ── ConfigPatch ───────────────────────────────────────────────────────────────

/// A partial [`ScheduleConfig`]; `None` fields keep the current value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConfigPatch {
    pub visible_days:          Option<Vec<DayOfWeek>>,
    pub start_hour:            Option<u8>,
    pub end_hour:              Option<u8>,
    pub time_slot_interval:    Option<TimeSlotInterval>,
    pub orientation:           Option<Orientation>,
    pub show_day_headers:      Option<bool>,
    pub class_name:            Option<String>,
    pub day_name_translations: Option<DayNameTranslations>,
}
