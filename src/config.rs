//! Immutable run configuration.
//!
//! The original service carried thread count, dry-run, and verbose as
//! mutable state poked in via setters before each run; here they are a
//! value built once from the CLI and passed into the dispatcher.

/// Default worker pool size, matching the CLI default.
pub const DEFAULT_THREADS: usize = 8;

/// Configuration for one sweep run.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Retention threshold in whole calendar days; entries strictly older
    /// become delete candidates.
    pub older_than_days: i64,
    /// Worker pool size.
    pub threads: usize,
    /// Report candidates without issuing deletes.
    pub dry_run: bool,
    /// Per-entry diagnostics on top of progress logging.
    pub verbose: bool,
}

impl SweepConfig {
    /// Configuration with the given threshold and all other fields at
    /// their CLI defaults.
    pub fn new(older_than_days: i64) -> Self {
        Self {
            older_than_days,
            threads: DEFAULT_THREADS,
            dry_run: false,
            verbose: false,
        }
    }
}
