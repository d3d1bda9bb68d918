//! Subcommand execution.
//!
//! Each command opens the inventory file, applies one store operation and,
//! for mutations, writes the file back. Output meant for the user goes to
//! `out`; diagnostics go through the store's event sink.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use stockroom_inventory::{InventoryStore, RemoveOutcome};

use crate::args::Command;
use crate::config::Config;

pub fn execute(
    command: &Command,
    config: &Config,
    store: &mut InventoryStore,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let file = config.file.as_path();

    match command {
        Command::Add { item, qty } => {
            load_existing(store, file)?;
            let total = store
                .add(item, qty.as_str())
                .with_context(|| format!("failed to add {qty} of {item:?}"))?;
            save(store, file)?;
            writeln!(out, "{item} -> {total}")?;
        }
        Command::Remove { item, qty } => {
            load_existing(store, file)?;
            let outcome = store
                .remove(item, qty.as_str())
                .with_context(|| format!("failed to remove {qty} of {item:?}"))?;
            if outcome != RemoveOutcome::NotInStock {
                save(store, file)?;
            }
            match outcome {
                RemoveOutcome::Partial { remaining } => writeln!(out, "{item} -> {remaining}")?,
                RemoveOutcome::Drained { .. } => writeln!(out, "{item} -> 0 (removed)")?,
                RemoveOutcome::NotInStock => writeln!(out, "{item} is not in stock")?,
            }
        }
        Command::Get { item } => {
            load_existing(store, file)?;
            writeln!(out, "{}", store.get_quantity(item))?;
        }
        Command::Low { threshold } => {
            load_existing(store, file)?;
            for item in store.check_low(threshold.unwrap_or(config.low_threshold)) {
                writeln!(out, "{item}")?;
            }
        }
        Command::Report => {
            load_existing(store, file)?;
            store.write_report(out).context("failed to write report")?;
        }
        Command::Demo => demo(store, file, out)?,
    }

    Ok(())
}

/// Load `file` into `store`. A file that does not exist yet means an empty
/// inventory, not a failure.
fn load_existing(store: &mut InventoryStore, file: &Path) -> anyhow::Result<()> {
    match store.load(file) {
        Ok(_) => Ok(()),
        Err(err) if err.is_not_found() => Ok(()),
        Err(err) => {
            Err(err).with_context(|| format!("failed to load inventory from {}", file.display()))
        }
    }
}

fn save(store: &InventoryStore, file: &Path) -> anyhow::Result<()> {
    store
        .save(file)
        .with_context(|| format!("failed to save inventory to {}", file.display()))
}

/// Walk through every store operation once, starting from an empty store.
/// The removal of "orange" is expected to be a no-op.
fn demo(store: &mut InventoryStore, file: &Path, out: &mut dyn Write) -> anyhow::Result<()> {
    store.add("apple", 10)?;
    store.add("banana", 2)?;
    store.add("apple", 10)?;
    store.remove("apple", 3)?;
    store.remove("orange", 1)?;

    writeln!(out, "Apple stock: {}", store.get_quantity("apple"))?;
    writeln!(out, "Low items: {}", store.check_low_default().join(", "))?;

    save(store, file)?;
    load_existing(store, file)?;
    store.write_report(out).context("failed to write report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Arc;

    use stockroom_events::{InMemorySink, Severity};
    use stockroom_inventory::StockEvent;

    use super::*;

    struct Harness {
        _dir: tempfile::TempDir,
        config: Config,
        sink: Arc<InMemorySink<StockEvent>>,
    }

    impl Harness {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let config = Config {
                file: dir.path().join("inventory.json"),
                low_threshold: 5,
            };
            Self {
                _dir: dir,
                config,
                sink: Arc::new(InMemorySink::new()),
            }
        }

        /// Runs one command against a fresh store, like a separate process would.
        fn run(&self, command: Command) -> anyhow::Result<String> {
            let mut store = InventoryStore::with_sink(self.sink.clone());
            let mut out = Vec::new();
            execute(&command, &self.config, &mut store, &mut out)?;
            Ok(String::from_utf8(out).unwrap())
        }

        fn file(&self) -> &PathBuf {
            &self.config.file
        }
    }

    fn add(item: &str, qty: &str) -> Command {
        Command::Add {
            item: item.to_string(),
            qty: qty.to_string(),
        }
    }

    fn remove(item: &str, qty: &str) -> Command {
        Command::Remove {
            item: item.to_string(),
            qty: qty.to_string(),
        }
    }

    #[test]
    fn add_persists_across_invocations() {
        let h = Harness::new();

        assert_eq!(h.run(add("apple", "10")).unwrap(), "apple -> 10\n");
        assert_eq!(h.run(add("apple", "5")).unwrap(), "apple -> 15\n");
        assert_eq!(
            h.run(Command::Get {
                item: "apple".to_string()
            })
            .unwrap(),
            "15\n"
        );
    }

    #[test]
    fn rejected_quantity_fails_and_leaves_file_alone() {
        let h = Harness::new();
        h.run(add("apple", "3")).unwrap();
        let before = fs::read_to_string(h.file()).unwrap();

        let err = h.run(add("apple", "not-a-number")).unwrap_err();

        assert!(err.to_string().contains("failed to add"));
        assert_eq!(fs::read_to_string(h.file()).unwrap(), before);
        assert_eq!(h.sink.count(Severity::Error), 1);
    }

    #[test]
    fn remove_reports_each_outcome() {
        let h = Harness::new();
        h.run(add("apple", "10")).unwrap();

        assert_eq!(h.run(remove("apple", "4")).unwrap(), "apple -> 6\n");
        assert_eq!(h.run(remove("apple", "60")).unwrap(), "apple -> 0 (removed)\n");
        assert_eq!(h.run(remove("apple", "1")).unwrap(), "apple is not in stock\n");
        assert_eq!(fs::read_to_string(h.file()).unwrap(), "{}\n");
    }

    #[test]
    fn low_uses_config_threshold_unless_overridden() {
        let h = Harness::new();
        h.run(add("apple", "10")).unwrap();
        h.run(add("banana", "2")).unwrap();

        assert_eq!(h.run(Command::Low { threshold: None }).unwrap(), "banana\n");
        assert_eq!(
            h.run(Command::Low {
                threshold: Some(20)
            })
            .unwrap(),
            "apple\nbanana\n"
        );
    }

    #[test]
    fn report_on_missing_file_is_empty() {
        let h = Harness::new();
        assert_eq!(h.run(Command::Report).unwrap(), "Items Report\n");
        assert_eq!(h.sink.count(Severity::Warn), 1);
    }

    #[test]
    fn corrupt_file_fails_the_command() {
        let h = Harness::new();
        fs::write(h.file(), "{ nope").unwrap();

        let err = h.run(add("apple", "1")).unwrap_err();

        assert!(err.to_string().contains("failed to load inventory"));
        assert_eq!(fs::read_to_string(h.file()).unwrap(), "{ nope");
    }

    #[test]
    fn demo_prints_summary_and_report() {
        let h = Harness::new();

        let output = h.run(Command::Demo).unwrap();

        assert_eq!(
            output,
            "Apple stock: 17\nLow items: banana\nItems Report\napple -> 17\nbanana -> 2\n"
        );
        assert_eq!(
            fs::read_to_string(h.file()).unwrap(),
            "{\n  \"apple\": 17,\n  \"banana\": 2\n}\n"
        );
    }
}
