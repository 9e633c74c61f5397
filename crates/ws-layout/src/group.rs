//! Conflict detection: partition one day's events into overlap clusters.
//!
//! # Algorithm
//!
//! ```text
//! sort events by start time (stable: ties keep input order)
//! for each event:
//!     join the first existing group with a member it overlaps
//!     otherwise open a new group
//! ```
//!
//! First-fit is only equivalent to transitive closure because of the sort:
//! once a later-starting event opens a new group, every earlier group has
//! already ended, so no future event can bridge two groups.  Callers must go
//! through [`find_conflict_groups`], which always sorts first.
//!
//! Cost is O(n²) in the number of events on one day, which is fine for the
//! handful of events a calendar day carries.

use ws_core::TimeOnly;
use ws_event::ScheduleEvent;

/// Events on one day whose intervals overlap transitively.
///
/// Members are held in start-time order (ties in input order).
#[derive(Clone, Debug)]
pub struct ConflictGroup<'a> {
    events:    Vec<&'a ScheduleEvent>,
    /// Index of each member in the slice the group was built from.
    positions: Vec<usize>,
    start:     TimeOnly,
    end:       TimeOnly,
}

impl<'a> ConflictGroup<'a> {
    fn new(position: usize, first: &'a ScheduleEvent) -> Self {
        Self {
            events:    vec![first],
            positions: vec![position],
            start:     first.start_time,
            end:       first.end_time,
        }
    }

    fn push(&mut self, position: usize, event: &'a ScheduleEvent) {
        self.start = self.start.min(event.start_time);
        self.end = self.end.max(event.end_time);
        self.events.push(event);
        self.positions.push(position);
    }

    /// `true` if `event` overlaps any current member.
    fn conflicts_with(&self, event: &ScheduleEvent) -> bool {
        self.events.iter().any(|member| member.overlaps(event))
    }

    pub fn events(&self) -> &[&'a ScheduleEvent] {
        &self.events
    }

    /// Input-slice indices of the members, parallel to [`events`](Self::events).
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Earliest start among members.
    pub fn start(&self) -> TimeOnly {
        self.start
    }

    /// Latest end among members.
    pub fn end(&self) -> TimeOnly {
        self.end
    }

    /// The first member in start-time order.
    pub fn earliest(&self) -> &'a ScheduleEvent {
        self.events[0]
    }
}

/// Stable sort by start time.
pub fn sort_by_start<'a>(events: &[&'a ScheduleEvent]) -> Vec<&'a ScheduleEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.start_time);
    sorted
}

/// Group `events` (all on the same day, any order) into conflict groups.
///
/// Groups come back ordered by their first member's start time.
pub fn find_conflict_groups<'a>(events: &[&'a ScheduleEvent]) -> Vec<ConflictGroup<'a>> {
    debug_assert!(
        events.windows(2).all(|w| w[0].day == w[1].day),
        "conflict groups are computed per day"
    );

    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by_key(|&i| events[i].start_time);

    let mut groups: Vec<ConflictGroup<'a>> = Vec::new();
    for position in order {
        let event = events[position];
        match groups.iter_mut().find(|g| g.conflicts_with(event)) {
            Some(group) => group.push(position, event),
            None => groups.push(ConflictGroup::new(position, event)),
        }
    }
    groups
}
