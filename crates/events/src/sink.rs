//! Event sink capability.
//!
//! Components that would otherwise write to a process-wide logger instead
//! receive an [`EventSink`] and report what happened through it. Production
//! code plugs in [`TracingSink`](crate::TracingSink); tests plug in
//! [`InMemorySink`](crate::InMemorySink) and assert on the recorded events
//! without touching global logging configuration.
//!
//! Recording is best-effort and infallible from the caller's point of view: a
//! sink that cannot deliver an event drops it.

use std::sync::Arc;

use crate::event::Event;

/// Receiver of observable events.
///
/// The trait requires `Send + Sync` so a sink can be shared behind an `Arc`.
pub trait EventSink<E: Event>: Send + Sync {
    fn record(&self, event: E);
}

impl<E, S> EventSink<E> for Arc<S>
where
    E: Event,
    S: EventSink<E> + ?Sized,
{
    fn record(&self, event: E) {
        (**self).record(event)
    }
}

/// Sink that drops everything.
#[derive(Debug, Default, Copy, Clone)]
pub struct NullSink;

impl<E: Event> EventSink<E> for NullSink {
    fn record(&self, _event: E) {}
}

/// Forwards every event to each inner sink, in order.
pub struct FanOutSink<E: Event> {
    sinks: Vec<Arc<dyn EventSink<E>>>,
}

impl<E: Event> FanOutSink<E> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with(mut self, sink: impl EventSink<E> + 'static) -> Self {
        self.sinks.push(Arc::new(sink));
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl<E: Event> Default for FanOutSink<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> core::fmt::Debug for FanOutSink<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FanOutSink").field("sinks", &self.sinks.len()).finish()
    }
}

impl<E: Event> EventSink<E> for FanOutSink<E> {
    fn record(&self, event: E) {
        for sink in &self.sinks {
            sink.record(event.clone());
        }
    }
}
