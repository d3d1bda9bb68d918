//! Bridge from [`EventSink`] to `tracing`.

use crate::event::{Event, Severity};
use crate::sink::EventSink;

/// Emits each event as a `tracing` record at the matching level.
///
/// The event's `Display` output becomes the message; `event_type` is attached
/// as a structured field so JSON logs can be filtered by it.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingSink;

impl<E: Event> EventSink<E> for TracingSink {
    fn record(&self, event: E) {
        let event_type = event.event_type();
        match event.severity() {
            Severity::Info => tracing::info!(event_type, "{event}"),
            Severity::Warn => tracing::warn!(event_type, "{event}"),
            Severity::Error => tracing::error!(event_type, "{event}"),
        }
    }
}
