//! Event validation.
//!
//! A batch is accepted or rejected as a whole: [`validate_events`] reports
//! every problem in every event, with `events[<index>].<field>` paths, and the
//! layout engine refuses to run on a batch that produced any error.

use std::collections::hash_map::Entry;

use ws_core::{FieldError, ValidationErrors};

use crate::ScheduleEvent;

/// Event id → index of its first occurrence in a batch.
#[cfg(feature = "fx-hash")]
type IdIndex<'a> = rustc_hash::FxHashMap<&'a str, usize>;

#[cfg(not(feature = "fx-hash"))]
type IdIndex<'a> = std::collections::HashMap<&'a str, usize>;

/// Check one event in isolation.
pub fn validate_event(event: &ScheduleEvent) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if event.id.trim().is_empty() {
        errors.push(FieldError::new("id", "id must not be empty"));
    }
    if event.title.trim().is_empty() {
        errors.push(FieldError::new("title", "title must not be empty"));
    }
    if event.end_time <= event.start_time {
        errors.push(FieldError::new(
            "endTime",
            format!(
                "end time {} must be after start time {}",
                event.end_time, event.start_time
            ),
        ));
    }

    errors.into_result()
}

/// Check a whole batch, including id uniqueness across the batch.
pub fn validate_events(events: &[ScheduleEvent]) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut first_seen = IdIndex::default();
    first_seen.reserve(events.len());

    for (index, event) in events.iter().enumerate() {
        let prefix = format!("events[{index}]");
        if let Err(e) = validate_event(event) {
            for err in e.0 {
                errors.push(err.within(&prefix));
            }
        }
        if event.id.trim().is_empty() {
            continue;
        }
        match first_seen.entry(event.id.as_str()) {
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
            Entry::Occupied(slot) => {
                let first = *slot.get();
                errors.push(
                    FieldError::new(
                        "id",
                        format!("duplicate id {:?} (first used by events[{first}])", event.id),
                    )
                    .within(&prefix),
                );
            }
        }
    }

    if !errors.is_empty() {
        tracing::warn!(
            events = events.len(),
            errors = errors.len(),
            "event batch rejected by validation"
        );
    }
    errors.into_result()
}
