//! JSON file persistence.
//!
//! File format: a UTF-8 JSON object mapping item name to integer quantity,
//! pretty-printed with two-space indentation, keys in ascending order:
//!
//! ```text
//! {
//!   "apple": 17,
//!   "banana": 2
//! }
//! ```

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde_json::Value;
use stockroom_core::{ItemName, ToQuantity};

use crate::error::{StockError, StockResult};
use crate::event::StockEventKind;
use crate::store::InventoryStore;

/// Default location used by [`InventoryStore::load_default`] and
/// [`InventoryStore::save_default`].
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// Summary of a successful load.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

impl InventoryStore {
    /// Replace the whole store with the contents of `path`.
    ///
    /// The store is only touched when the file parses as a JSON object.
    /// Individual entries with a blank name, a non-integer quantity, or a
    /// quantity of zero or less are skipped; the rest are loaded.
    pub fn load(&mut self, path: impl AsRef<Path>) -> StockResult<LoadReport> {
        let path = path.as_ref();

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                self.emit(StockEventKind::LoadFileMissing {
                    path: path.to_path_buf(),
                });
                return Err(StockError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(err) => {
                return Err(self.load_failed(
                    path,
                    StockError::Io {
                        path: path.to_path_buf(),
                        source: err,
                    },
                ));
            }
        };

        let value: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(err) => {
                return Err(self.load_failed(
                    path,
                    StockError::Json {
                        path: path.to_path_buf(),
                        source: err,
                    },
                ));
            }
        };

        let entries = match value {
            Value::Object(entries) => entries,
            other => {
                return Err(self.load_failed(
                    path,
                    StockError::NotAnObject {
                        path: path.to_path_buf(),
                        found: json_kind(&other),
                    },
                ));
            }
        };

        let mut cleaned = BTreeMap::new();
        let mut skipped = 0;
        for (key, raw) in entries {
            match clean_entry(&key, &raw) {
                Ok((name, qty)) => {
                    cleaned.insert(name, qty);
                }
                Err(reason) => {
                    skipped += 1;
                    self.emit(StockEventKind::LoadEntrySkipped {
                        path: path.to_path_buf(),
                        key,
                        reason,
                    });
                }
            }
        }

        let report = LoadReport {
            loaded: cleaned.len(),
            skipped,
        };
        self.stock = cleaned;
        self.emit(StockEventKind::InventoryLoaded {
            path: path.to_path_buf(),
            items: report.loaded,
            skipped,
        });
        Ok(report)
    }

    /// Write the store to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> StockResult<()> {
        let path = path.as_ref();

        match self.write_json(path) {
            Ok(()) => {
                self.emit(StockEventKind::InventorySaved {
                    path: path.to_path_buf(),
                    items: self.stock.len(),
                });
                Ok(())
            }
            Err(err) => {
                self.emit(StockEventKind::SaveFailed {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                });
                Err(StockError::Io {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn load_default(&mut self) -> StockResult<LoadReport> {
        self.load(DEFAULT_INVENTORY_FILE)
    }

    pub fn save_default(&self) -> StockResult<()> {
        self.save(DEFAULT_INVENTORY_FILE)
    }

    fn write_json(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &self.stock)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }

    fn load_failed(&self, path: &Path, err: StockError) -> StockError {
        self.emit(StockEventKind::LoadFailed {
            path: path.to_path_buf(),
            reason: err.to_string(),
        });
        err
    }
}

fn clean_entry(key: &str, raw: &Value) -> Result<(ItemName, i64), String> {
    let name = ItemName::parse(key).map_err(|e| e.to_string())?;
    let qty = raw.to_quantity().map_err(|e| e.to_string())?;
    if qty <= 0 {
        return Err(format!("quantity {qty} is not positive"));
    }
    Ok((name, qty))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use stockroom_events::{Event, InMemorySink, Severity};

    use super::*;
    use crate::event::StockEvent;

    fn capturing_store() -> (InventoryStore, Arc<InMemorySink<StockEvent>>) {
        let sink = Arc::new(InMemorySink::new());
        (InventoryStore::with_sink(sink.clone()), sink)
    }

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn save_writes_sorted_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let (mut store, sink) = capturing_store();
        store.add("banana", 2).unwrap();
        store.add("apple", 17).unwrap();

        store.save(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n  \"apple\": 17,\n  \"banana\": 2\n}\n");
        assert_eq!(sink.last().unwrap().kind, StockEventKind::InventorySaved {
            path: path.clone(),
            items: 2,
        });
    }

    #[test]
    fn save_empty_store_writes_empty_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let (store, _) = capturing_store();

        store.save(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn save_to_missing_directory_fails_without_panicking() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("inventory.json");
        let (mut store, sink) = capturing_store();
        store.add("apple", 1).unwrap();

        let err = store.save(&path).unwrap_err();

        assert!(matches!(err, StockError::Io { .. }));
        assert_eq!(sink.count(Severity::Error), 1);
        assert_eq!(store.get_quantity("apple"), 1);
    }

    #[test]
    fn load_replaces_existing_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "inv.json", r#"{"apple": 17, "banana": 2}"#);
        let (mut store, _) = capturing_store();
        store.add("cherry", 9).unwrap();

        let report = store.load(&path).unwrap();

        assert_eq!(report, LoadReport { loaded: 2, skipped: 0 });
        assert_eq!(
            store.snapshot(),
            BTreeMap::from([("apple".to_string(), 17), ("banana".to_string(), 2)])
        );
    }

    #[test]
    fn load_missing_file_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, sink) = capturing_store();
        store.add("a", 1).unwrap();

        let err = store.load(dir.path().join("absent.json")).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(store.get_quantity("a"), 1);
        assert_eq!(sink.last().unwrap().event_type(), "inventory.file.missing");
        assert_eq!(sink.count(Severity::Warn), 1);
    }

    #[test]
    fn load_malformed_json_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "bad.json", "{\"a\": 5,,");
        let (mut store, sink) = capturing_store();
        store.add("a", 1).unwrap();

        let err = store.load(&path).unwrap_err();

        assert!(matches!(err, StockError::Json { .. }));
        assert_eq!(store.snapshot(), BTreeMap::from([("a".to_string(), 1)]));
        assert_eq!(sink.count(Severity::Error), 1);
    }

    #[test]
    fn load_non_object_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "list.json", "[1, 2, 3]");
        let (mut store, _) = capturing_store();
        store.add("a", 1).unwrap();

        let err = store.load(&path).unwrap_err();

        match err {
            StockError::NotAnObject { found, .. } => assert_eq!(found, "an array"),
            other => panic!("expected NotAnObject, got {other:?}"),
        }
        assert_eq!(store.get_quantity("a"), 1);
    }

    #[test]
    fn load_skips_bad_entries_individually() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "mixed.json",
            r#"{"apple": "12", "pear": 3.9, "bad": "lots", "none": null, "": 4, "zero": 0, "debt": -2}"#,
        );
        let (mut store, sink) = capturing_store();

        let report = store.load(&path).unwrap();

        assert_eq!(report, LoadReport { loaded: 2, skipped: 5 });
        assert_eq!(
            store.snapshot(),
            BTreeMap::from([("apple".to_string(), 12), ("pear".to_string(), 3)])
        );
        assert_eq!(sink.count(Severity::Warn), 5);
        assert_eq!(sink.last().unwrap().event_type(), "inventory.file.loaded");
    }
}
