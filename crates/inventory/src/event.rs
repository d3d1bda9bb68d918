//! Events recorded by the inventory store.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use stockroom_core::ItemName;
use stockroom_events::{Event, Severity};

/// Which store operation an event or rejection belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    Add,
    Remove,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Add => f.write_str("add"),
            Operation::Remove => f.write_str("remove"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StockEventKind {
    /// `previous` and `total` are the stored quantities before and after;
    /// 0 means there is no entry.
    ItemAdded {
        item: ItemName,
        qty: i64,
        previous: i64,
        total: i64,
    },
    ItemRemoved { item: ItemName, qty: i64, remaining: i64 },
    /// A removal met or exceeded the stock, so the entry was deleted.
    ItemDrained { item: ItemName, requested: i64, available: i64 },
    RemoveSkipped { item: String },
    InputRejected { operation: Operation, reason: String },
    InventoryLoaded { path: PathBuf, items: usize, skipped: usize },
    LoadFileMissing { path: PathBuf },
    LoadEntrySkipped { path: PathBuf, key: String, reason: String },
    LoadFailed { path: PathBuf, reason: String },
    InventorySaved { path: PathBuf, items: usize },
    SaveFailed { path: PathBuf, reason: String },
    ReportFailed { reason: String },
}

/// Event: something observable happened to (or was refused by) a store.
#[derive(Debug, Clone, PartialEq)]
pub struct StockEvent {
    pub kind: StockEventKind,
    pub occurred_at: DateTime<Utc>,
}

impl StockEvent {
    pub fn now(kind: StockEventKind) -> Self {
        Self {
            kind,
            occurred_at: Utc::now(),
        }
    }
}

impl Event for StockEvent {
    fn event_type(&self) -> &'static str {
        match &self.kind {
            StockEventKind::ItemAdded { .. } => "inventory.item.added",
            StockEventKind::ItemRemoved { .. } => "inventory.item.removed",
            StockEventKind::ItemDrained { .. } => "inventory.item.drained",
            StockEventKind::RemoveSkipped { .. } => "inventory.item.remove_skipped",
            StockEventKind::InputRejected { .. } => "inventory.input.rejected",
            StockEventKind::InventoryLoaded { .. } => "inventory.file.loaded",
            StockEventKind::LoadFileMissing { .. } => "inventory.file.missing",
            StockEventKind::LoadEntrySkipped { .. } => "inventory.file.entry_skipped",
            StockEventKind::LoadFailed { .. } => "inventory.file.load_failed",
            StockEventKind::InventorySaved { .. } => "inventory.file.saved",
            StockEventKind::SaveFailed { .. } => "inventory.file.save_failed",
            StockEventKind::ReportFailed { .. } => "inventory.report.failed",
        }
    }

    fn severity(&self) -> Severity {
        match &self.kind {
            StockEventKind::ItemAdded { .. }
            | StockEventKind::ItemRemoved { .. }
            | StockEventKind::ItemDrained { .. }
            | StockEventKind::InventoryLoaded { .. }
            | StockEventKind::InventorySaved { .. } => Severity::Info,
            StockEventKind::RemoveSkipped { .. }
            | StockEventKind::LoadFileMissing { .. }
            | StockEventKind::LoadEntrySkipped { .. } => Severity::Warn,
            StockEventKind::InputRejected { .. }
            | StockEventKind::LoadFailed { .. }
            | StockEventKind::SaveFailed { .. }
            | StockEventKind::ReportFailed { .. } => Severity::Error,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

impl core::fmt::Display for StockEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            StockEventKind::ItemAdded {
                item,
                qty,
                previous,
                total,
            } if *total <= 0 => {
                if *previous <= 0 {
                    write!(f, "Added {qty} of {item}; nothing in stock, no entry created")
                } else {
                    write!(f, "Added {qty} of {item}; stock exhausted, entry removed")
                }
            }
            StockEventKind::ItemAdded {
                item, qty, total, ..
            } => {
                write!(f, "Added {qty} of {item}; now {total}")
            }
            StockEventKind::ItemRemoved {
                item,
                qty,
                remaining,
            } => write!(f, "Removed {qty} of {item}; remaining {remaining}"),
            StockEventKind::ItemDrained {
                item,
                requested,
                available,
            } => write!(
                f,
                "Removing all of {item} (requested {requested}, available {available})"
            ),
            StockEventKind::RemoveSkipped { item } => {
                write!(f, "Attempted to remove {item:?} which is not in stock")
            }
            StockEventKind::InputRejected { operation, reason } => {
                write!(f, "Ignoring {operation}: {reason}")
            }
            StockEventKind::InventoryLoaded {
                path,
                items,
                skipped,
            } => write!(
                f,
                "Loaded {items} item(s) from {} ({skipped} skipped)",
                path.display()
            ),
            StockEventKind::LoadFileMissing { path } => write!(
                f,
                "File {} not found; inventory left unchanged",
                path.display()
            ),
            StockEventKind::LoadEntrySkipped { path, key, reason } => write!(
                f,
                "Invalid entry {key:?} in {}: {reason}. Skipping",
                path.display()
            ),
            StockEventKind::LoadFailed { path, reason } => {
                write!(f, "Failed to load {}: {reason}", path.display())
            }
            StockEventKind::InventorySaved { path, items } => {
                write!(f, "Saved {items} item(s) to {}", path.display())
            }
            StockEventKind::SaveFailed { path, reason } => {
                write!(f, "Failed to save inventory to {}: {reason}", path.display())
            }
            StockEventKind::ReportFailed { reason } => {
                write!(f, "Failed to write report: {reason}")
            }
        }
    }
}
