//! CSV output backend.
//!
//! Creates `layout_events.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use ws_layout::LayoutEvent;

use crate::writer::LayoutWriter;
use crate::{LayoutRow, OutputResult};

/// Column order of `layout_events.csv`.
pub const HEADER: [&str; 16] = [
    "id", "day", "start", "end", "title",
    "row_start", "row_end", "column_start", "column_end",
    "lane", "total_lanes",
    "top_percent", "height_percent", "left_percent", "width_percent",
    "is_overflow",
];

/// Writes laid-out events to a CSV file, one row per event.
pub struct CsvLayoutWriter {
    events:   Writer<File>,
    finished: bool,
}

impl CsvLayoutWriter {
    /// Open (or create) `layout_events.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("layout_events.csv"))?;
        events.write_record(HEADER)?;
        Ok(Self { events, finished: false })
    }
}

impl LayoutWriter for CsvLayoutWriter {
    fn write_events(&mut self, events: &[LayoutEvent]) -> OutputResult<()> {
        for row in events.iter().map(LayoutRow::from) {
            self.events.write_record(&[
                row.id,
                row.day,
                row.start,
                row.end,
                row.title,
                row.row_start.to_string(),
                row.row_end.to_string(),
                row.column_start.to_string(),
                row.column_end.to_string(),
                row.lane.map_or_else(String::new, |l| l.to_string()),
                row.total_lanes.map_or_else(String::new, |l| l.to_string()),
                format!("{:.4}", row.top_percent),
                format!("{:.4}", row.height_percent),
                format!("{:.4}", row.left_percent),
                format!("{:.4}", row.width_percent),
                (row.is_overflow as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        Ok(())
    }
}
