//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stockroom_observability::LogFormat;

/// Track stock levels in a JSON inventory file
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Inventory file (default: $STOCKROOM_FILE, then inventory.json)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Log line format: text or json
    #[arg(long, global = true, default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add units of an item (a negative quantity decrements)
    Add {
        item: String,
        #[arg(allow_hyphen_values = true)]
        qty: String,
    },
    /// Remove units of an item; removing all or more deletes it
    Remove {
        item: String,
        #[arg(allow_hyphen_values = true)]
        qty: String,
    },
    /// Print the quantity held for an item
    Get { item: String },
    /// List items below a stock threshold
    Low {
        /// Strict upper bound (default: $STOCKROOM_LOW_THRESHOLD, then 5)
        #[arg(short, long, allow_hyphen_values = true)]
        threshold: Option<i64>,
    },
    /// Print every item and its quantity
    Report,
    /// Run a short demonstration against the inventory file
    Demo,
}
