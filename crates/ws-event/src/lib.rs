//! `ws-event` — schedule events, batch validation, and CSV loading.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`event`]    | `ScheduleEvent`, `OVERFLOW_CLASS`                     |
//! | [`validate`] | `validate_event`, `validate_events` (all-or-nothing)  |
//! | [`loader`]   | `load_events_csv`, `load_events_reader`               |
//! | [`error`]    | `EventError`, `EventResult<T>`                        |

pub mod error;
pub mod event;
pub mod loader;
pub mod validate;


pub use error::{EventError, EventResult};
pub use event::{OVERFLOW_CLASS, ScheduleEvent};
pub use loader::{load_events_csv, load_events_reader};
pub use validate::{validate_event, validate_events};
