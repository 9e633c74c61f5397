//! Overflow compression for crowded conflict groups.
//!
//! A group with more than [`HIDE_THRESHOLD`] members keeps its first
//! [`VISIBLE_COUNT`] events (start-time order) and replaces the rest with a
//! single placeholder:
//!
//! ```text
//! id    = "overflow-{day}-{id of the group's earliest event}"
//! span  = [earliest start in group, latest end in group]
//! title = "+{hidden} more"
//! class = OVERFLOW_CLASS
//! ```
//!
//! The id is stable across passes as long as the group's earliest event is
//! unchanged, so renderers can diff on it and [`parse_overflow_id`] can
//! recover the day and anchor event (scroll-to-cluster, zoom on click).
//!
//! Compression only applies to the normal week view; a zoomed day shows every
//! event.

use std::borrow::Cow;

use ws_core::DayOfWeek;
use ws_event::{OVERFLOW_CLASS, ScheduleEvent};

use crate::group::{ConflictGroup, find_conflict_groups};

/// Groups strictly larger than this are compressed.
pub const HIDE_THRESHOLD: usize = 3;

/// Original events kept visible in a compressed group.
pub const VISIBLE_COUNT: usize = 2;

const ID_PREFIX: &str = "overflow-";

/// Placeholder id for a compressed group on `day` anchored at `earliest_id`.
pub fn overflow_id(day: DayOfWeek, earliest_id: &str) -> String {
    format!("{ID_PREFIX}{day}-{earliest_id}")
}

/// Inverse of [`overflow_id`]: `(day, earliest event id)`.
///
/// Returns `None` for ids that are not placeholder ids.
pub fn parse_overflow_id(id: &str) -> Option<(DayOfWeek, &str)> {
    let rest = id.strip_prefix(ID_PREFIX)?;
    let (day, anchor) = rest.split_once('-')?;
    if anchor.is_empty() {
        return None;
    }
    Some((day.parse().ok()?, anchor))
}

/// Build the "+N more" placeholder standing in for `group`.
pub fn overflow_placeholder(group: &ConflictGroup<'_>) -> ScheduleEvent {
    let earliest = group.earliest();
    let hidden = group.len().saturating_sub(VISIBLE_COUNT);
    ScheduleEvent {
        id:          overflow_id(earliest.day, &earliest.id),
        day:         earliest.day,
        start_time:  group.start(),
        end_time:    group.end(),
        title:       format!("+{hidden} more"),
        description: None,
        color:       None,
        class_name:  Some(OVERFLOW_CLASS.to_owned()),
        style:       None,
    }
}

/// Compress one day's events.
///
/// Output is in group order; within a group, visible originals come first
/// (start-time order) followed by the placeholder, if any.  Originals are
/// borrowed, placeholders owned.
pub fn compress_day<'a>(day_events: &[&'a ScheduleEvent]) -> Vec<Cow<'a, ScheduleEvent>> {
    let mut out = Vec::with_capacity(day_events.len());

    for group in find_conflict_groups(day_events) {
        if group.len() > HIDE_THRESHOLD {
            let placeholder = overflow_placeholder(&group);
            tracing::trace!(
                id = %placeholder.id,
                size = group.len(),
                hidden = group.len() - VISIBLE_COUNT,
                "compressed conflict group"
            );
            out.extend(group.events()[..VISIBLE_COUNT].iter().map(|e| Cow::Borrowed(*e)));
            out.push(Cow::Owned(placeholder));
        } else {
            out.extend(group.events().iter().map(|e| Cow::Borrowed(*e)));
        }
    }
    out
}
