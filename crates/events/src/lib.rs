//! Observable events and the sinks that receive them.

pub mod event;
pub mod in_memory_sink;
pub mod sink;
pub mod tracing_sink;

pub use event::{Event, Severity};
pub use in_memory_sink::InMemorySink;
pub use sink::{EventSink, FanOutSink, NullSink};
pub use tracing_sink::TracingSink;
