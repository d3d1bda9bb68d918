//! In-memory inventory store.

use std::collections::BTreeMap;
use std::sync::Arc;

use stockroom_core::{DomainError, ItemName, ToQuantity};
use stockroom_events::{EventSink, TracingSink};

use crate::error::{StockError, StockResult};
use crate::event::{Operation, StockEvent, StockEventKind};

/// Threshold used by [`InventoryStore::check_low_default`].
pub const DEFAULT_LOW_THRESHOLD: i64 = 5;

/// Result of a successful [`InventoryStore::remove`] call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Stock was decremented and the item is still present.
    Partial { remaining: i64 },
    /// The removal met or exceeded the stock; the item is gone.
    Drained { removed: i64 },
    /// The item was not in stock. Nothing changed.
    NotInStock,
}

/// Mapping from item name to quantity.
///
/// Invariant: every stored quantity is strictly positive. Any change that
/// would leave an item at zero or below deletes the entry instead.
///
/// Entries are kept ordered by name, so enumeration, [`check_low`] results
/// and saved files all come out in ascending name order.
///
/// Every operation records a [`StockEvent`] on the injected sink and returns
/// a typed result. Nothing here panics on bad input; callers that only want
/// best-effort behavior can ignore the returned `Err`.
///
/// Not synchronized: share across threads behind a `Mutex` if needed.
///
/// [`check_low`]: InventoryStore::check_low
pub struct InventoryStore {
    pub(crate) stock: BTreeMap<ItemName, i64>,
    pub(crate) sink: Arc<dyn EventSink<StockEvent>>,
}

impl InventoryStore {
    /// Empty store reporting through `tracing`.
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }

    /// Empty store reporting to `sink`.
    pub fn with_sink(sink: impl EventSink<StockEvent> + 'static) -> Self {
        Self {
            stock: BTreeMap::new(),
            sink: Arc::new(sink),
        }
    }

    /// Add `qty` units of `item`, creating the entry if needed.
    ///
    /// Negative quantities are accepted as decrements; if the total drops to
    /// zero or below, the entry is removed. Returns the stored quantity
    /// afterwards (0 when the entry is gone).
    pub fn add<Q: ToQuantity>(&mut self, item: &str, qty: Q) -> StockResult<i64> {
        let (name, qty) = self.validate(Operation::Add, item, &qty)?;

        let current = self.get_quantity(name.as_str());
        let Some(total) = current.checked_add(qty) else {
            return Err(self.reject(
                Operation::Add,
                DomainError::invariant(format!(
                    "adding {qty} to {current} of {name} overflows the stock count"
                )),
            ));
        };

        let stored = if total > 0 {
            self.stock.insert(name.clone(), total);
            total
        } else {
            self.stock.remove(name.as_str());
            0
        };

        self.emit(StockEventKind::ItemAdded {
            item: name,
            qty,
            previous: current,
            total: stored,
        });
        Ok(stored)
    }

    /// Remove `qty` units of `item`.
    ///
    /// Removing at least as much as is in stock deletes the entry. Removing an
    /// item that is not in stock is a benign no-op. A negative quantity
    /// removes "less than nothing" and so raises the stock of an item that is
    /// present.
    pub fn remove<Q: ToQuantity>(&mut self, item: &str, qty: Q) -> StockResult<RemoveOutcome> {
        let (name, qty) = self.validate(Operation::Remove, item, &qty)?;

        let Some(current) = self.stock.get(name.as_str()).copied() else {
            self.emit(StockEventKind::RemoveSkipped {
                item: name.into_inner(),
            });
            return Ok(RemoveOutcome::NotInStock);
        };

        if qty >= current {
            self.stock.remove(name.as_str());
            self.emit(StockEventKind::ItemDrained {
                item: name,
                requested: qty,
                available: current,
            });
            return Ok(RemoveOutcome::Drained { removed: current });
        }

        let Some(remaining) = current.checked_sub(qty) else {
            return Err(self.reject(
                Operation::Remove,
                DomainError::invariant(format!(
                    "removing {qty} from {current} of {name} overflows the stock count"
                )),
            ));
        };
        self.stock.insert(name.clone(), remaining);
        self.emit(StockEventKind::ItemRemoved {
            item: name,
            qty,
            remaining,
        });
        Ok(RemoveOutcome::Partial { remaining })
    }

    /// Stored quantity of `item`, or 0 when absent.
    pub fn get_quantity(&self, item: &str) -> i64 {
        self.stock.get(item).copied().unwrap_or(0)
    }

    /// Names of items whose quantity is strictly below `threshold`, in
    /// ascending name order.
    pub fn check_low(&self, threshold: i64) -> Vec<String> {
        self.stock
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.as_str().to_string())
            .collect()
    }

    pub fn check_low_default(&self) -> Vec<String> {
        self.check_low(DEFAULT_LOW_THRESHOLD)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// `(name, quantity)` pairs in ascending name order.
    pub fn items(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.stock.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    /// Owned copy of the current mapping.
    pub fn snapshot(&self) -> BTreeMap<String, i64> {
        self.items().map(|(name, qty)| (name.to_string(), qty)).collect()
    }

    pub(crate) fn emit(&self, kind: StockEventKind) {
        self.sink.record(StockEvent::now(kind));
    }

    fn validate(
        &self,
        operation: Operation,
        item: &str,
        qty: &dyn ToQuantity,
    ) -> StockResult<(ItemName, i64)> {
        let name = ItemName::parse(item).map_err(|e| self.reject(operation, e))?;
        let qty = qty.to_quantity().map_err(|e| self.reject(operation, e))?;
        Ok((name, qty))
    }

    fn reject(&self, operation: Operation, err: DomainError) -> StockError {
        self.emit(StockEventKind::InputRejected {
            operation,
            reason: err.to_string(),
        });
        StockError::Domain(err)
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for InventoryStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InventoryStore")
            .field("stock", &self.stock)
            .finish_non_exhaustive()
    }
}
