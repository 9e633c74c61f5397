//! Unit tests for ws-output.

#[cfg(test)]
mod csv_tests {
    use std::collections::HashMap;

    use tempfile::TempDir;
    use ws_core::{DayOfWeek, ScheduleConfig, TimeOnly};
    use ws_event::ScheduleEvent;
    use ws_layout::{LayoutEngine, ScheduleLayout};

    use crate::csv::{CsvLayoutWriter, HEADER};
    use crate::writer::LayoutWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn ev(id: &str, start: (u32, u32), end: (u32, u32)) -> ScheduleEvent {
        ScheduleEvent::new(
            id,
            DayOfWeek::Monday,
            TimeOnly::new(start.0, start.1).unwrap(),
            TimeOnly::new(end.0, end.1).unwrap(),
            id.to_uppercase(),
        )
    }

    fn crowded_layout() -> ScheduleLayout {
        let events = vec![
            ev("a", (9, 0), (10, 0)),
            ev("b", (9, 15), (10, 15)),
            ev("c", (9, 30), (10, 30)),
            ev("d", (9, 45), (11, 0)),
        ];
        LayoutEngine::new(ScheduleConfig::default())
            .unwrap()
            .layout(&events, None)
            .unwrap()
    }

    /// Rows of `layout_events.csv`, keyed by event id.
    fn read_rows(dir: &TempDir) -> HashMap<String, csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join("layout_events.csv")).unwrap();
        rdr.records()
            .map(|r| r.unwrap())
            .map(|r| (r[0].to_owned(), r))
            .collect()
    }

    #[test]
    fn csv_file_created() {
        let dir = tmp();
        let _w = CsvLayoutWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("layout_events.csv").exists());
    }

    #[test]
    fn csv_header_correct() {
        let dir = tmp();
        let mut w = CsvLayoutWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("layout_events.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, HEADER);
        assert_eq!(headers[0], "id");
        assert_eq!(headers[15], "is_overflow");
    }

    #[test]
    fn csv_one_row_per_event() {
        let dir = tmp();
        let layout = crowded_layout();
        let mut w = CsvLayoutWriter::new(dir.path()).unwrap();
        w.write_events(&layout.events).unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir);
        assert_eq!(rows.len(), layout.events.len());
        assert_eq!(rows.len(), 3); // a, b, and the placeholder
    }

    #[test]
    fn csv_row_values() {
        let dir = tmp();
        let layout = crowded_layout();
        let mut w = CsvLayoutWriter::new(dir.path()).unwrap();
        w.write_events(&layout.events).unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir);
        let a = &rows["a"];
        assert_eq!(&a[1], "monday");
        assert_eq!(&a[2], "09:00");
        assert_eq!(&a[3], "10:00");
        assert_eq!(&a[4], "A");
        assert_eq!(&a[5], "1");        // row_start
        assert_eq!(&a[6], "2");        // row_end
        assert_eq!(&a[7], "1");        // column_start
        assert_eq!(&a[8], "2");        // column_end
        assert_eq!(&a[9], "0");        // lane
        assert_eq!(&a[10], "3");       // total_lanes
        assert_eq!(&a[12], "100.0000"); // height_percent
        assert_eq!(&a[14], "33.3333"); // width_percent
        assert_eq!(&a[15], "0");
    }

    #[test]
    fn csv_marks_overflow_rows() {
        let dir = tmp();
        let layout = crowded_layout();
        let mut w = CsvLayoutWriter::new(dir.path()).unwrap();
        w.write_events(&layout.events).unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir);
        let placeholder = &rows["overflow-monday-a"];
        assert_eq!(&placeholder[4], "+2 more");
        assert_eq!(&placeholder[15], "1");
        assert_eq!(&rows["b"][15], "0");
    }

    #[test]
    fn csv_multiple_batches_append() {
        let dir = tmp();
        let layout = crowded_layout();
        let mut w = CsvLayoutWriter::new(dir.path()).unwrap();
        w.write_events(&layout.events[..1]).unwrap();
        w.write_events(&layout.events[1..]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("layout_events.csv")).unwrap();
        assert_eq!(rdr.records().count(), 3);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvLayoutWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call must not panic or error
    }
}

#[cfg(test)]
mod row_tests {
    use ws_core::{DayOfWeek, ScheduleConfig, TimeOnly};
    use ws_event::ScheduleEvent;
    use ws_layout::layout_events;

    use crate::LayoutRow;

    #[test]
    fn row_copies_placement() {
        let event = ScheduleEvent::new(
            "standup",
            DayOfWeek::Wednesday,
            TimeOnly::new(9, 0).unwrap(),
            TimeOnly::new(10, 30).unwrap(),
            "Standup",
        );
        let layout = layout_events(&[event], &ScheduleConfig::default(), None).unwrap();
        let row = LayoutRow::from(&layout.events[0]);

        assert_eq!(row.id, "standup");
        assert_eq!(row.day, "wednesday");
        assert_eq!((row.row_start, row.row_end), (1, 3));
        assert_eq!((row.column_start, row.column_end), (3, 4));
        assert_eq!(row.lane, Some(0));
        assert_eq!(row.total_lanes, Some(1));
        assert!((row.height_percent - 150.0).abs() < 1e-9);
        assert!(!row.is_overflow);
    }
}
