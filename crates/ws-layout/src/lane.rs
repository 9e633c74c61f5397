//! Lane assignment within conflict groups.
//!
//! Each conflict group is swept in start-time order.  An event takes the
//! lowest lane whose last occupant ended at or before the event's start;
//! if none is free a new lane opens.  Every member of a group then gets the
//! same `total_lanes` (lanes opened by that group), so the renderer can split
//! the day cell into equal-width columns for the whole cluster.
//!
//! ```text
//! 09:00 ┌───A───┐
//! 09:30 │       │ ┌──B──┐        A → lane 0
//! 10:00 └───────┘ │     │        B → lane 1
//! 10:15 ┌───C───┐ │     │        C → lane 0 (A ended at 10:00)
//! 10:30 │       │ └─────┘        total_lanes = 2 for A, B, C
//! 11:00 └───────┘
//! ```

use ws_core::TimeOnly;
use ws_event::ScheduleEvent;

use crate::group::{ConflictGroup, find_conflict_groups};

/// Lane placement of one event.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LaneInfo {
    /// 0-based lane index.
    pub lane:        usize,
    /// Lanes used by the event's conflict group.
    pub total_lanes: usize,
}

impl LaneInfo {
    /// The placement of an event that overlaps nothing.
    pub const SINGLE: LaneInfo = LaneInfo { lane: 0, total_lanes: 1 };
}

impl Default for LaneInfo {
    fn default() -> Self {
        Self::SINGLE
    }
}

/// Lanes for one group, parallel to `group.events()`.
pub fn assign_group_lanes(group: &ConflictGroup<'_>) -> Vec<LaneInfo> {
    let mut lane_ends: Vec<TimeOnly> = Vec::new();
    let mut lanes: Vec<usize> = Vec::with_capacity(group.len());

    for event in group.events() {
        let lane = match lane_ends.iter().position(|end| *end <= event.start_time) {
            Some(free) => {
                lane_ends[free] = event.end_time;
                free
            }
            None => {
                lane_ends.push(event.end_time);
                lane_ends.len() - 1
            }
        };
        lanes.push(lane);
    }

    let total_lanes = lane_ends.len();
    lanes
        .into_iter()
        .map(|lane| LaneInfo { lane, total_lanes })
        .collect()
}

/// Assign lanes to all events of one day, parallel to `day_events`.
///
/// Conflict groups are recomputed from `day_events`, so this works equally on
/// a raw day and on a compressed day that includes overflow placeholders.
/// Results are positional, so events sharing an id still get their own lanes.
pub fn assign_lanes(day_events: &[&ScheduleEvent]) -> Vec<LaneInfo> {
    let mut lanes = vec![LaneInfo::SINGLE; day_events.len()];

    for group in find_conflict_groups(day_events) {
        for (&position, info) in group.positions().iter().zip(assign_group_lanes(&group)) {
            lanes[position] = info;
        }
    }
    lanes
}
