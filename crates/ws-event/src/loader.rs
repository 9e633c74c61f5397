//! CSV event loader.
//!
//! # CSV format
//!
//! One row per event.  Optional columns may be left empty.
//!
//! ```csv
//! id,day,start,end,title,description,color,class_name,style
//! standup,mon,09:00,09:15,Standup,,#4caf50,,
//! review,Monday,14:00,15:30,Design review,Quarterly roadmap,,important,
//! ```
//!
//! **`day`** accepts full or three-letter English names, any case.
//! **`start`/`end`** are 24-hour `H:MM` or `HH:MM`.
//!
//! Rows are returned in file order.  The loader parses but does not validate;
//! run [`validate_events`][crate::validate_events] (or hand the batch to the
//! layout engine, which does) before use.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ws_core::{DayOfWeek, TimeOnly};

use crate::{EventError, ScheduleEvent};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EventRecord {
    id:          String,
    day:         String,
    start:       String,
    end:         String,
    title:       String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    color:       Option<String>,
    #[serde(default)]
    class_name:  Option<String>,
    #[serde(default)]
    style:       Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load events from a CSV file.
pub fn load_events_csv(path: &Path) -> Result<Vec<ScheduleEvent>, EventError> {
    let file = std::fs::File::open(path).map_err(EventError::Io)?;
    load_events_reader(file)
}

/// Like [`load_events_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded data.
pub fn load_events_reader<R: Read>(reader: R) -> Result<Vec<ScheduleEvent>, EventError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut events = Vec::new();

    for (i, result) in csv_reader.deserialize::<EventRecord>().enumerate() {
        // Row 1 is the header.
        let row = i + 2;
        let record = result.map_err(|e| EventError::Parse(format!("row {row}: {e}")))?;
        events.push(to_event(record).map_err(|e| EventError::Parse(format!("row {row}: {e}")))?);
    }

    tracing::debug!(count = events.len(), "loaded events from CSV");
    Ok(events)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn to_event(r: EventRecord) -> Result<ScheduleEvent, EventError> {
    let day: DayOfWeek = r.day.parse()?;
    let start: TimeOnly = r.start.parse()?;
    let end: TimeOnly = r.end.parse()?;

    Ok(ScheduleEvent {
        id:          r.id,
        day,
        start_time:  start,
        end_time:    end,
        title:       r.title,
        description: non_empty(r.description),
        color:       non_empty(r.color),
        class_name:  non_empty(r.class_name),
        style:       non_empty(r.style),
    })
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}
