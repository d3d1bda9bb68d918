//! In-memory event sink for tests/dev.

use std::sync::{Mutex, PoisonError};

use crate::event::{Event, Severity};
use crate::sink::EventSink;

/// Records events in arrival order.
///
/// - No IO
/// - A poisoned lock is recovered rather than dropping events
#[derive(Debug)]
pub struct InMemorySink<E> {
    events: Mutex<Vec<E>>,
}

impl<E> InMemorySink<E> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E> Default for InMemorySink<E> {
    fn default() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl<E: Event> InMemorySink<E> {
    /// Copy of everything recorded so far.
    pub fn events(&self) -> Vec<E> {
        self.lock().clone()
    }

    pub fn event_types(&self) -> Vec<&'static str> {
        self.lock().iter().map(Event::event_type).collect()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.lock().iter().filter(|e| e.severity() == severity).count()
    }

    pub fn last(&self) -> Option<E> {
        self.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<E>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Event> EventSink<E> for InMemorySink<E> {
    fn record(&self, event: E) {
        self.lock().push(event);
    }
}
