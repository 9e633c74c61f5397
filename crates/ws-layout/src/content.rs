//! `EventFormatter`: pluggable strategy for what goes inside an event box.
//!
//! The layout engine decides *where* an event goes; the formatter decides
//! *what* it shows.  Renderers that want custom markup implement
//! [`EventFormatter`] and receive the event, its lane placement, and the grid
//! orientation.  [`DefaultFormatter`] produces plain [`EventContent`] data
//! that follows the built-in template rules:
//!
//! | Case                     | Time shown          | Description             |
//! |--------------------------|---------------------|-------------------------|
//! | overflow placeholder     | no                  | no                      |
//! | vertical, 1 lane         | `start - end`       | if duration > 60 min    |
//! | vertical, 2 lanes        | start only if < 60 min | if duration > 60 min |
//! | vertical, 3+ lanes       | no (title wraps)    | if duration > 60 min    |
//! | horizontal, ≤ 2 lanes    | `start - end`       | no                      |
//! | horizontal, 3+ lanes     | no                  | no                      |

use ws_core::Orientation;
use ws_event::ScheduleEvent;

use crate::LaneInfo;

/// Events at or below this length count as short.
pub const SHORT_EVENT_MINUTES: i32 = 60;

/// Input handed to an [`EventFormatter`].
#[derive(Copy, Clone, Debug)]
pub struct ContentContext<'a> {
    pub event:       &'a ScheduleEvent,
    pub lane:        Option<LaneInfo>,
    pub orientation: Orientation,
}

impl ContentContext<'_> {
    /// Lanes sharing the event's cell (1 when no lane info).
    pub fn total_lanes(&self) -> usize {
        self.lane.map_or(1, |l| l.total_lanes)
    }
}

/// Strategy turning an event into renderer content.
///
/// # Contract
///
/// - Must be a pure function of the context.
/// - Must not block or perform I/O.
pub trait EventFormatter {
    type Output;

    fn format(&self, ctx: &ContentContext<'_>) -> Self::Output;
}

/// Plain-data rendering of an event box.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EventContent {
    pub title:       String,
    pub time:        Option<String>,
    pub description: Option<String>,
    pub density:     Density,
    /// Title may wrap instead of being truncated.
    pub wrap_title:  bool,
    /// Overflow placeholder: clicking zooms to the day, no tooltip.
    pub zoomable:    bool,
    /// Accessible label for interactive placeholders.
    pub aria_label:  Option<String>,
}

/// How tightly the box is packed, driven by lane count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Density {
    Normal,
    /// Two lanes: reduced padding.
    Compact,
    /// Three or more lanes: no padding.
    Dense,
}

impl Density {
    pub fn for_lanes(total_lanes: usize) -> Self {
        match total_lanes {
            0..=1 => Density::Normal,
            2     => Density::Compact,
            _     => Density::Dense,
        }
    }
}

/// The built-in formatter.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultFormatter;

impl EventFormatter for DefaultFormatter {
    type Output = EventContent;

    fn format(&self, ctx: &ContentContext<'_>) -> EventContent {
        let event = ctx.event;
        let lanes = ctx.total_lanes();
        let density = Density::for_lanes(lanes);

        if event.is_overflow_indicator() {
            return EventContent {
                title:       event.title.clone(),
                time:        None,
                description: None,
                density,
                wrap_title:  false,
                zoomable:    true,
                aria_label:  Some("Zoom to view all overlapping events".to_owned()),
            };
        }

        let duration = event.duration_minutes();
        let full_range = format!("{} - {}", event.start_time, event.end_time);

        let (time, description, wrap_title) = match ctx.orientation {
            Orientation::Vertical => {
                let description = event
                    .description
                    .clone()
                    .filter(|_| duration > SHORT_EVENT_MINUTES);
                match density {
                    Density::Normal => (Some(full_range), description, false),
                    Density::Compact if duration < SHORT_EVENT_MINUTES => {
                        (Some(event.start_time.to_string()), description, false)
                    }
                    Density::Compact => (Some(full_range), description, false),
                    Density::Dense => (None, description, true),
                }
            }
            Orientation::Horizontal => {
                let time = (lanes <= 2).then_some(full_range);
                (time, None, false)
            }
        };

        EventContent {
            title: event.title.clone(),
            time,
            description,
            density,
            wrap_title,
            zoomable: false,
            aria_label: None,
        }
    }
}
