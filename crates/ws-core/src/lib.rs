//! `ws-core` — foundational types for the weekly schedule layout engine.
//!
//! This crate is a dependency of every other `ws-*` crate.  It has no `ws-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`time`]   | `TimeOnly` (hour + minute, ordered by minutes since midnight) |
//! | [`day`]    | `DayOfWeek`, `DayNameTranslations`, `WORK_WEEK_DAYS`          |
//! | [`config`] | `ScheduleConfig`, `ConfigPatch`, `TimeSlotInterval`, `Orientation` |
//! | [`error`]  | `CoreError`, `CoreResult`, `FieldError`, `ValidationErrors`   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types; `TimeOnly` as `"HH:MM"`. |

pub mod config;
pub mod day;
pub mod error;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ConfigPatch, Orientation, ScheduleConfig, TimeSlotInterval};
pub use day::{ALL_DAYS, DayNameTranslations, DayOfWeek, WORK_WEEK_DAYS};
pub use error::{CoreError, CoreResult, FieldError, ValidationErrors};
pub use time::{MINUTES_PER_DAY, TimeOnly};
