//! Inventory store: stock levels keyed by item name, JSON persistence and
//! plain-text reporting.
//!
//! Synchronous and single-owner. Diagnostics go through an injected
//! [`EventSink`](stockroom_events::EventSink) rather than a global logger.

pub mod error;
pub mod event;
pub mod persistence;
pub mod report;
pub mod store;

pub use error::{StockError, StockResult};
pub use event::{Operation, StockEvent, StockEventKind};
pub use persistence::{DEFAULT_INVENTORY_FILE, LoadReport};
pub use report::REPORT_HEADER;
pub use store::{DEFAULT_LOW_THRESHOLD, InventoryStore, RemoveOutcome};
