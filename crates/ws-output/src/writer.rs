//! The `LayoutWriter` trait implemented by all backend writers.

use ws_layout::LayoutEvent;

use crate::OutputResult;

/// Sink for positioned events.
pub trait LayoutWriter {
    /// Write a batch of laid-out events.
    fn write_events(&mut self, events: &[LayoutEvent]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
