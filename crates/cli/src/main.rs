//! `stockroom` binary entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use stockroom_cli::{Args, Config, execute};
use stockroom_inventory::InventoryStore;

fn main() -> ExitCode {
    let args = Args::parse();
    stockroom_observability::init_with(args.log_format);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("command failed: {err:?}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::resolve(args.file)?;
    tracing::debug!(file = %config.file.display(), "using inventory file");

    let mut store = InventoryStore::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&args.command, &config, &mut store, &mut out)?;
    out.flush()?;
    Ok(())
}
