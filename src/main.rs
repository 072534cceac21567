//! Dfsweep: age-based retention cleanup for hierarchical file stores.
//!
//! Given a root path and a minimum age in days, dfsweep walks the tree
//! underneath, deletes entries strictly older than the threshold, and
//! collapses directories that become empty as a side effect of the pruning,
//! all within a single pass. Each top-level child of the root is walked as
//! an independent subtree on a bounded worker pool.
//!
//! This is the binary entry point. It parses arguments, installs the log
//! subscriber, runs the dispatcher, and maps the outcome to an exit code.

mod cli;
pub mod client;
pub mod config;
pub mod counters;
pub mod dispatcher;
pub mod error;
pub mod exit_codes;
pub mod policy;
pub mod walker;

#[cfg(test)]
mod test_support;

use cli::Cli;
use client::LocalFileStore;
use config::SweepConfig;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders its own diagnostics, including --help/--version.
            let _ = err.print();
            let code = if err.use_stderr() {
                exit_codes::USAGE_ERROR
            } else {
                exit_codes::SUCCESS
            };
            return ExitCode::from(code as u8);
        }
    };

    init_logging(cli.verbose);

    // The walk only runs when both required values are present; anything
    // else is a silent no-op, matching the behavior operators rely on when
    // probing the binary with partial command lines.
    let (Some(path), Some(older_than)) = (&cli.path, cli.olderthan) else {
        return ExitCode::from(exit_codes::SUCCESS as u8);
    };

    let config = SweepConfig {
        older_than_days: older_than,
        threads: cli.threads,
        dry_run: cli.dryrun,
        verbose: cli.verbose,
    };
    let store = LocalFileStore::new();

    match dispatcher::run(&store, path, &config) {
        Ok(outcome) => {
            info!(
                scanned = outcome.scanned,
                deleted = outcome.deleted,
                "sweep finished"
            );
            if outcome.is_partial_failure() {
                warn!(
                    failed_subtrees = outcome.failures.len(),
                    "sweep completed with failures"
                );
                eprintln!(
                    "Error: {} subtree walk(s) failed; see log for details",
                    outcome.failures.len()
                );
                ExitCode::from(exit_codes::SWEEP_FAILURE as u8)
            } else {
                ExitCode::from(exit_codes::SUCCESS as u8)
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Installs the fmt subscriber. `--verbose` raises the default level to
/// `debug` for per-entry diagnostics; `RUST_LOG` overrides either default.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "dfsweep=debug" } else { "dfsweep=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
