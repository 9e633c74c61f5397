//! week — end-to-end example for the weekly schedule layout engine.
//!
//! Loads a small team calendar from an embedded CSV, lays out the work week,
//! zooms into the crowded Monday through its overflow placeholder, and
//! writes both passes to `output/week/`.
//!
//! Set `RUST_LOG=ws_layout=trace` to see every compressed conflict group.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use ws_core::{ConfigPatch, DayNameTranslations, DayOfWeek, Orientation, ScheduleConfig, TimeSlotInterval};
use ws_event::load_events_reader;
use ws_layout::{DefaultFormatter, LayoutEngine, ScheduleLayout};
use ws_output::{CsvLayoutWriter, LayoutWriter};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/week";

// ── Schedule CSV ──────────────────────────────────────────────────────────────

// Monday morning has five overlapping events, enough to trigger compression.
// `late-review` ends after the 17:00 window and is clipped.
const SCHEDULE_CSV: &str = "\
id,day,start,end,title,description,color,class_name,style\n\
standup-mon,monday,09:00,09:15,Standup,,#4caf50,,\n\
planning,monday,09:00,10:30,Sprint planning,Scope the next two weeks,#2196f3,,\n\
design-sync,monday,09:30,10:00,Design sync,,,,\n\
hiring,monday,09:45,10:45,Interview,Backend candidate,#ff9800,,\n\
vendor,monday,10:00,11:00,Vendor call,,,,\n\
lunch-mon,monday,12:00,13:00,Team lunch,,,,\n\
standup-tue,tuesday,09:00,09:15,Standup,,#4caf50,,\n\
focus,tuesday,13:00,16:00,Focus block,No meetings please,,,\n\
one-on-one,wednesday,11:00,11:30,1:1,,,,\n\
retro,wednesday,11:15,12:00,Retro,,,,\n\
deploy,thursday,15:00,15:15,Deploy window,,#f44336,,\n\
late-review,friday,16:00,18:00,Release review,Sign-off for the week,,,\n\
brunch,saturday,11:00,12:00,Brunch,,,,\n\
";

// ── Printing ──────────────────────────────────────────────────────────────────

fn print_layout(title: &str, layout: &ScheduleLayout) {
    println!("── {title} ──");
    println!(
        "grid {} rows × {} columns, {} labels ({} … {})",
        layout.dimensions.rows,
        layout.dimensions.columns,
        layout.time_labels.len(),
        layout.time_labels.first().map_or("-", |l| l.label.as_str()),
        layout.time_labels.last().map_or("-", |l| l.label.as_str()),
    );
    let headers: Vec<String> = layout
        .day_headers
        .iter()
        .map(|h| if h.is_zoomed { format!("[{}]", h.name) } else { h.name.clone() })
        .collect();
    println!("headers: {}", headers.join(" | "));
    println!();

    println!(
        "{:<22} {:<10} {:<13} {:<9} {:<6} {:<18} {}",
        "Event", "Day", "Time", "Rows", "Lane", "Content", "Time text"
    );
    println!("{}", "-".repeat(96));
    let contents = layout.format_all(&DefaultFormatter);
    for (event, content) in layout.events.iter().zip(&contents) {
        let lane = event
            .lane
            .map_or_else(|| "-".to_owned(), |l| format!("{}/{}", l.lane, l.total_lanes));
        println!(
            "{:<22} {:<10} {:<13} {:<9} {:<6} {:<18} {}",
            event.id(),
            event.event.day.as_str(),
            format!("{}-{}", event.event.start_time, event.event.end_time),
            format!("{}..{}", event.grid.row_start, event.grid.row_end),
            lane,
            content.title,
            content.time.as_deref().unwrap_or(""),
        );
    }
    println!();
}

fn write_csv(dir: &Path, layout: &ScheduleLayout) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let mut writer = CsvLayoutWriter::new(dir)?;
    writer.write_events(&layout.events)?;
    writer.finish()?;
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("=== week — weekly schedule layout ===");
    println!();

    // 1. Load events from the embedded CSV.
    let events = load_events_reader(Cursor::new(SCHEDULE_CSV))?;
    tracing::info!(count = events.len(), "loaded events");

    // 2. Engine with a 30-minute grid over the default work week.
    let config = ScheduleConfig {
        time_slot_interval: TimeSlotInterval::ThirtyMinutes,
        ..ScheduleConfig::default()
    };
    let mut engine = LayoutEngine::new(config)?;

    // 3. Week view.
    let t0 = Instant::now();
    let week = engine.layout(&events, None)?;
    tracing::info!(
        events = week.events.len(),
        elapsed_us = t0.elapsed().as_micros() as u64,
        "week layout"
    );
    print_layout("Week", &week);

    // 4. Click the first overflow placeholder to zoom into its day.
    let placeholder = week
        .events
        .iter()
        .find(|e| e.is_overflow())
        .context("expected a crowded day to produce an overflow placeholder")?;
    let day = week
        .zoom_target(placeholder.id())
        .context("placeholder id does not name a day")?;
    tracing::info!(placeholder = placeholder.id(), %day, "zooming");

    let zoomed = engine.layout(&events, Some(day))?;
    print_layout(&format!("Zoomed: {}", day.name()), &zoomed);

    // 5. Horizontal timeline with translated headers.
    engine.update_config(ConfigPatch {
        orientation: Some(Orientation::Horizontal),
        day_name_translations: Some(
            DayNameTranslations::new()
                .with(DayOfWeek::Monday, "Lundi")
                .with(DayOfWeek::Tuesday, "Mardi")
                .with(DayOfWeek::Wednesday, "Mercredi")
                .with(DayOfWeek::Thursday, "Jeudi")
                .with(DayOfWeek::Friday, "Vendredi"),
        ),
        ..ConfigPatch::default()
    })?;
    let timeline = engine.layout(&events, None)?;
    print_layout("Timeline", &timeline);

    // 6. Output.
    write_csv(&Path::new(OUTPUT_DIR).join("week"), &week)?;
    write_csv(&Path::new(OUTPUT_DIR).join("zoomed"), &zoomed)?;
    let json_path = Path::new(OUTPUT_DIR).join("zoomed.json");
    std::fs::write(&json_path, serde_json::to_string_pretty(&zoomed)?)?;

    println!("Wrote {OUTPUT_DIR}/week/layout_events.csv ({} rows)", week.events.len());
    println!("Wrote {OUTPUT_DIR}/zoomed/layout_events.csv ({} rows)", zoomed.events.len());
    println!("Wrote {}", json_path.display());

    Ok(())
}
