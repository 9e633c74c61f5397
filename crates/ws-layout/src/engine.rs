//! The layout pass: events + config + zoom state → positioned events.
//!
//! ```text
//! validate batch (all-or-nothing)
//! ├─ filter: visible days (zoom ⇒ just that day) and time window
//! ├─ per day (parallel with the `parallel` feature):
//! │    normal: compress crowded groups → lanes over compressed set
//! │    zoomed: lanes over every event
//! │    geometry for each event
//! └─ concatenate in visible-day order; add axis labels and headers
//! ```
//!
//! A pass holds no state between calls.  Running it twice on the same input
//! gives identical output, and independent passes may run concurrently.

use std::borrow::Cow;

use ws_core::{ConfigPatch, DayOfWeek, Orientation, ScheduleConfig};
use ws_event::{ScheduleEvent, validate_events};

use crate::axis::{
    DayHeader, GridDimensions, TimeSlotLabel, day_headers, grid_dimensions, time_slot_labels,
};
use crate::content::{ContentContext, EventFormatter};
use crate::geometry::{FractionalPlacement, GridPlacement, GridSpec, SlotSpan};
use crate::group::sort_by_start;
use crate::overflow::{compress_day, parse_overflow_id};
use crate::{LaneInfo, LayoutError, LayoutResult, assign_lanes};

// ── Output ────────────────────────────────────────────────────────────────────

/// An event with its computed placement.  The event's own fields are copied
/// through unchanged.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayoutEvent {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub event:    ScheduleEvent,
    pub grid:     GridPlacement,
    pub slots:    SlotSpan,
    pub fraction: FractionalPlacement,
    pub lane:     Option<LaneInfo>,
}

impl LayoutEvent {
    pub fn id(&self) -> &str {
        &self.event.id
    }

    pub fn is_overflow(&self) -> bool {
        self.event.is_overflow_indicator()
    }

    /// Run `formatter` on this event.
    pub fn format<F: EventFormatter>(&self, formatter: &F, orientation: Orientation) -> F::Output {
        formatter.format(&ContentContext { event: &self.event, lane: self.lane, orientation })
    }
}

/// Result of one layout pass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScheduleLayout {
    /// Positioned events, by visible day then start time.
    pub events:      Vec<LayoutEvent>,
    pub time_labels: Vec<TimeSlotLabel>,
    pub day_headers: Vec<DayHeader>,
    pub dimensions:  GridDimensions,
    pub orientation: Orientation,
    pub zoomed_day:  Option<DayOfWeek>,
}

impl ScheduleLayout {
    pub fn find(&self, id: &str) -> Option<&LayoutEvent> {
        self.events.iter().find(|e| e.id() == id)
    }

    pub fn events_on(&self, day: DayOfWeek) -> impl Iterator<Item = &LayoutEvent> {
        self.events.iter().filter(move |e| e.event.day == day)
    }

    /// The day to zoom into when the event `id` is clicked.
    ///
    /// `Some` only for overflow placeholders present in this layout.
    pub fn zoom_target(&self, id: &str) -> Option<DayOfWeek> {
        let event = self.find(id)?;
        if !event.is_overflow() {
            return None;
        }
        parse_overflow_id(id).map(|(day, _)| day)
    }

    /// Format every event with `formatter`, in layout order.
    pub fn format_all<F: EventFormatter>(&self, formatter: &F) -> Vec<F::Output> {
        self.events
            .iter()
            .map(|e| e.format(formatter, self.orientation))
            .collect()
    }
}

// ── LayoutEngine ──────────────────────────────────────────────────────────────

/// Holds a validated [`ScheduleConfig`] and runs layout passes against it.
#[derive(Clone, Debug)]
pub struct LayoutEngine {
    config: ScheduleConfig,
}

impl LayoutEngine {
    /// Validate `config` and build an engine.
    pub fn new(config: ScheduleConfig) -> LayoutResult<Self> {
        config.validate().map_err(LayoutError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Merge `patch` into the current config.  On validation failure the
    /// engine keeps its previous config.
    pub fn update_config(&mut self, patch: ConfigPatch) -> LayoutResult<()> {
        let merged = self.config.merged(patch);
        merged.validate().map_err(LayoutError::InvalidConfig)?;
        self.config = merged;
        Ok(())
    }

    /// Lay out `events`.
    ///
    /// With `zoom = Some(day)` only that day is shown and overflow
    /// compression is skipped; `day` must be one of the visible days.
    pub fn layout(
        &self,
        events: &[ScheduleEvent],
        zoom:   Option<DayOfWeek>,
    ) -> LayoutResult<ScheduleLayout> {
        validate_events(events).map_err(LayoutError::InvalidEvents)?;

        let view: Cow<'_, ScheduleConfig> = match zoom {
            Some(day) if !self.config.is_visible(day) => {
                return Err(LayoutError::ZoomDayNotVisible(day));
            }
            Some(day) => Cow::Owned(self.config.zoomed_to(day)),
            None => Cow::Borrowed(&self.config),
        };

        let spec = GridSpec::from_config(&view);
        let window = view.window_minutes();
        let by_day: Vec<Vec<&ScheduleEvent>> = view
            .visible_days
            .iter()
            .map(|&day| {
                events
                    .iter()
                    .filter(|e| e.day == day && in_window(e, window))
                    .collect()
            })
            .collect();
        let compress = zoom.is_none();

        #[cfg(not(feature = "parallel"))]
        let per_day: Vec<Vec<LayoutEvent>> = by_day
            .iter()
            .map(|day_events| layout_day(day_events, &spec, compress))
            .collect::<LayoutResult<_>>()?;

        #[cfg(feature = "parallel")]
        let per_day: Vec<Vec<LayoutEvent>> = {
            use rayon::prelude::*;

            by_day
                .par_iter()
                .map(|day_events| layout_day(day_events, &spec, compress))
                .collect::<LayoutResult<_>>()?
        };

        let laid_out: Vec<LayoutEvent> = per_day.into_iter().flatten().collect();

        tracing::debug!(
            input = events.len(),
            visible = by_day.iter().map(Vec::len).sum::<usize>(),
            output = laid_out.len(),
            zoomed = ?zoom,
            orientation = %view.orientation,
            "layout pass complete"
        );

        Ok(ScheduleLayout {
            events:      laid_out,
            time_labels: time_slot_labels(view.start_hour, view.end_hour, view.time_slot_interval),
            day_headers: day_headers(&view, zoom),
            dimensions:  grid_dimensions(&view),
            orientation: view.orientation,
            zoomed_day:  zoom,
        })
    }
}

/// One-shot pass: validate `config`, then lay out `events`.
pub fn layout_events(
    events: &[ScheduleEvent],
    config: &ScheduleConfig,
    zoom:   Option<DayOfWeek>,
) -> LayoutResult<ScheduleLayout> {
    LayoutEngine::new(config.clone())?.layout(events, zoom)
}

// ── Per-day stages ────────────────────────────────────────────────────────────

/// `true` if any part of the event falls inside `[start, end)` minutes.
/// Zero-length events count as one minute long.
fn in_window(event: &ScheduleEvent, (start, end): (u16, u16)) -> bool {
    let s = event.start_time.to_minutes();
    let e = event.end_time.to_minutes().max(s + 1);
    s < end && e > start
}

fn layout_day(
    day_events: &[&ScheduleEvent],
    spec:       &GridSpec<'_>,
    compress:   bool,
) -> LayoutResult<Vec<LayoutEvent>> {
    debug_assert!(
        day_events.iter().all(|e| spec.visible_days.contains(&e.day)),
        "events for a hidden day reached the geometry stage"
    );

    let shown: Vec<Cow<'_, ScheduleEvent>> = if compress {
        compress_day(day_events)
    } else {
        sort_by_start(day_events).into_iter().map(Cow::Borrowed).collect()
    };

    let refs: Vec<&ScheduleEvent> = shown.iter().map(|e| e.as_ref()).collect();
    let lanes = assign_lanes(&refs);

    shown
        .into_iter()
        .zip(lanes)
        .map(|(event, lane)| {
            let lane = Some(lane);
            let placement = spec.place(&event, lane)?;
            Ok(LayoutEvent {
                event:    event.into_owned(),
                grid:     placement.grid,
                slots:    placement.slots,
                fraction: placement.fraction,
                lane,
            })
        })
        .collect()
}
