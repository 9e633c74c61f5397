//! `ws-output` — layout output writers for the weekly schedule engine.
//!
//! Renderers normally consume [`ScheduleLayout`][ws_layout::ScheduleLayout]
//! in memory.  This crate flattens its events to [`LayoutRow`]s and writes
//! them out for tooling, snapshots, and debugging.
//!
//! | Backend | Files created         |
//! |---------|-----------------------|
//! | CSV     | `layout_events.csv`   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ws_output::{CsvLayoutWriter, LayoutWriter};
//!
//! let mut writer = CsvLayoutWriter::new(Path::new("./output"))?;
//! writer.write_events(&layout.events)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvLayoutWriter;
pub use error::{OutputError, OutputResult};
pub use row::LayoutRow;
pub use writer::LayoutWriter;
