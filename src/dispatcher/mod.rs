//! Dispatcher: fans the configured root's children out onto a bounded
//! worker pool.
//!
//! Every immediate child of the root becomes one walk task queued on a
//! channel; a fixed set of worker threads drains the queue, each task
//! running to completion on exactly one worker. The join is unconditional:
//! a run finishes only when every task has finished or failed, and a
//! failed task never cancels its siblings.

use crate::client::{ClientError, Entry, FileStoreClient};
use crate::config::SweepConfig;
use crate::counters::RunCounters;
use crate::error::Result;
use crate::walker::SubtreeWalker;
use chrono::Local;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;
use tracing::{info, warn};

/// One queued unit of pool work: a top-level child subtree.
struct WalkTask {
    root: Entry,
}

/// A task that ended in an unrecoverable client error.
#[derive(Debug)]
pub struct TaskFailure {
    pub root: PathBuf,
    pub error: ClientError,
}

/// Final state of one sweep run.
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub scanned: u64,
    pub deleted: u64,
    pub failures: Vec<TaskFailure>,
}

impl RunOutcome {
    /// True when at least one subtree task failed; the rest of the run
    /// still completed.
    pub fn is_partial_failure(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Runs one sweep: lists the root's children, walks each child subtree on
/// the pool, and blocks until every task has finished.
///
/// A missing or empty root completes as a no-op. "Today" is resolved once
/// here so every task ages entries against the same date.
pub fn run(client: &dyn FileStoreClient, root: &Path, config: &SweepConfig) -> Result<RunOutcome> {
    let children = match client.list_entries(root) {
        Ok(children) => children,
        Err(ClientError::NotFound(_)) => {
            info!(root = %root.display(), "root not found; nothing to sweep");
            return Ok(RunOutcome::default());
        }
        Err(err) => return Err(err.into()),
    };
    if children.is_empty() {
        info!(root = %root.display(), "root is empty; nothing to sweep");
        return Ok(RunOutcome::default());
    }

    let today = Local::now().date_naive();
    let counters = RunCounters::new();
    let failures = Mutex::new(Vec::new());
    // Workers beyond one per task would only park on a closed channel.
    let workers = config.threads.clamp(1, children.len());

    info!(
        root = %root.display(),
        subtrees = children.len(),
        workers,
        older_than_days = config.older_than_days,
        dry_run = config.dry_run,
        "sweep starting"
    );

    let (tx, rx) = crossbeam_channel::unbounded();
    for child in children {
        // The receiver outlives the sends; queueing cannot fail here.
        let _ = tx.send(WalkTask { root: child });
    }
    drop(tx);

    thread::scope(|scope| {
        for _ in 0..workers {
            let rx = rx.clone();
            let counters = &counters;
            let failures = &failures;
            scope.spawn(move || {
                while let Ok(task) = rx.recv() {
                    let walker = SubtreeWalker::new(client, counters, config, today);
                    let root = task.root.path.clone();
                    if let Err(error) = walker.run(task.root) {
                        warn!(root = %root.display(), %error, "subtree walk failed");
                        failures
                            .lock()
                            .unwrap_or_else(|poison| poison.into_inner())
                            .push(TaskFailure { root, error });
                    }
                }
            });
        }
    });

    Ok(RunOutcome {
        scanned: counters.scanned(),
        deleted: counters.deleted(),
        failures: failures
            .into_inner()
            .unwrap_or_else(|poison| poison.into_inner()),
    })
}
