use chrono::{DateTime, Utc};

/// Log classification of an event.
///
/// - `Info`: a mutation or persistence step succeeded
/// - `Warn`: a benign anomaly (absent item, missing file, skipped entry)
/// - `Error`: an operation was rejected or failed
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// A domain-agnostic observable event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **classified** by [`Severity`]
/// - **human readable** through `Display` (the log line)
pub trait Event: Clone + core::fmt::Debug + core::fmt::Display + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "inventory.item.added").
    fn event_type(&self) -> &'static str;

    fn severity(&self) -> Severity;

    /// When the event occurred (wall-clock time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
