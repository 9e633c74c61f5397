//! Plain data row written by output backends.

use ws_layout::LayoutEvent;

/// One positioned event, flattened to scalar columns.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRow {
    pub id:             String,
    pub day:            String,
    pub start:          String,
    pub end:            String,
    pub title:          String,
    pub row_start:      u32,
    pub row_end:        u32,
    pub column_start:   u32,
    pub column_end:     u32,
    /// `None` only for events laid out without lane information.
    pub lane:           Option<usize>,
    pub total_lanes:    Option<usize>,
    pub top_percent:    f64,
    pub height_percent: f64,
    pub left_percent:   f64,
    pub width_percent:  f64,
    pub is_overflow:    bool,
}

impl From<&LayoutEvent> for LayoutRow {
    fn from(e: &LayoutEvent) -> Self {
        Self {
            id:             e.event.id.clone(),
            day:            e.event.day.to_string(),
            start:          e.event.start_time.to_string(),
            end:            e.event.end_time.to_string(),
            title:          e.event.title.clone(),
            row_start:      e.grid.row_start,
            row_end:        e.grid.row_end,
            column_start:   e.grid.column_start,
            column_end:     e.grid.column_end,
            lane:           e.lane.map(|l| l.lane),
            total_lanes:    e.lane.map(|l| l.total_lanes),
            top_percent:    e.fraction.top_percent,
            height_percent: e.fraction.height_percent,
            left_percent:   e.fraction.left_percent,
            width_percent:  e.fraction.width_percent,
            is_overflow:    e.is_overflow(),
        }
    }
}
