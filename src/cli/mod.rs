//! CLI argument parsing for dfsweep.
//!
//! Uses clap derive macros for declarative argument definitions. Unknown
//! parameters and malformed values are rejected by clap before any
//! filesystem access happens; `main` maps those to exit code 2.
//!
//! `--path` and `--olderthan` are optional at the parser level on purpose:
//! when either is missing the process exits successfully without walking
//! anything.

use clap::Parser;
use std::path::PathBuf;

/// Dfsweep: age-based retention cleanup for hierarchical file stores.
///
/// Walks the tree under `--path`, deleting entries strictly older than
/// `--olderthan` days and collapsing directories that become empty during
/// the run. Each top-level child of the root is walked as an independent
/// subtree on a bounded worker pool.
#[derive(Parser, Debug)]
#[command(name = "dfsweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root of the retention walk.
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Retention threshold in whole calendar days; entries strictly older
    /// become delete candidates.
    #[arg(long = "olderthan", value_name = "DAYS", allow_hyphen_values = true)]
    pub olderthan: Option<i64>,

    /// Worker pool size for parallel subtree walks.
    #[arg(long, value_name = "N", default_value_t = crate::config::DEFAULT_THREADS)]
    pub threads: usize,

    /// Report delete candidates without deleting anything.
    #[arg(long = "dryrun")]
    pub dryrun: bool,

    /// Emit per-entry diagnostics in addition to progress logging.
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses process arguments without exiting, so `main` owns the exit
    /// code mapping for usage errors.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
