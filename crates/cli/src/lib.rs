//! `stockroom` command-line wrapper.
//!
//! Parses arguments, resolves configuration and runs one store operation per
//! invocation against the inventory file.

pub mod args;
pub mod commands;
pub mod config;

pub use args::{Args, Command};
pub use commands::execute;
pub use config::Config;
