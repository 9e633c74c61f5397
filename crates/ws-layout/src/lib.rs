//! `ws-layout` — the event layout engine for weekly schedules.
//!
//! Takes a batch of [`ScheduleEvent`][ws_event::ScheduleEvent]s and a
//! [`ScheduleConfig`][ws_core::ScheduleConfig] and computes, for every event,
//! integer grid lines, sub-cell percentages, and a lane within its conflict
//! cluster.  No markup is produced; a rendering layer consumes the records.
//!
//! # Pipeline
//!
//! ```text
//! events ─► filter (visible days, time window)
//!        ─► group per day into conflict clusters        [`group`]
//!        ─► normal view: compress clusters > 3 events   [`overflow`]
//!        ─► lanes per cluster                           [`lane`]
//!        ─► grid lines + percentages per event          [`geometry`]
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`group`]    | `ConflictGroup`, `find_conflict_groups`                    |
//! | [`lane`]     | `LaneInfo`, `assign_group_lanes`, `assign_lanes`           |
//! | [`overflow`] | `compress_day`, `overflow_id`, `parse_overflow_id`         |
//! | [`geometry`] | `GridSpec`, `SlotSpan`, `GridPlacement`, `FractionalPlacement` |
//! | [`axis`]     | `time_slot_labels`, `day_headers`, `grid_dimensions`       |
//! | [`content`]  | `EventFormatter` trait, `DefaultFormatter`, `EventContent` |
//! | [`engine`]   | `LayoutEngine`, `LayoutEvent`, `ScheduleLayout`            |
//! | [`error`]    | `LayoutError`, `LayoutResult<T>`                           |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Lays out visible days on Rayon's thread pool.          |
//! | `fx-hash`  | FxHash for the batch id index in `ws-event`.           |
//! | `serde`    | `Serialize` on all output records.                     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ws_core::{DayOfWeek, ScheduleConfig};
//! use ws_layout::LayoutEngine;
//!
//! let engine = LayoutEngine::new(ScheduleConfig::default())?;
//! let week = engine.layout(&events, None)?;
//! let monday = engine.layout(&events, Some(DayOfWeek::Monday))?;
//! ```

pub mod axis;
pub mod content;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod group;
pub mod lane;
pub mod overflow;


pub use axis::{DayHeader, GridDimensions, TimeSlotLabel, day_headers, grid_dimensions, time_slot_labels};
pub use content::{ContentContext, DefaultFormatter, Density, EventContent, EventFormatter};
pub use engine::{LayoutEngine, LayoutEvent, ScheduleLayout, layout_events};
pub use error::{LayoutError, LayoutResult};
pub use geometry::{FractionalPlacement, GridPlacement, GridSpec, Placement, SlotSpan};
pub use group::{ConflictGroup, find_conflict_groups};
pub use lane::{LaneInfo, assign_group_lanes, assign_lanes};
pub use overflow::{HIDE_THRESHOLD, VISIBLE_COUNT, compress_day, overflow_id, parse_overflow_id};
