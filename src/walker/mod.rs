//! Subtree walker: the iterative retention walk over one independently
//! owned subtree.
//!
//! Each walker owns a private LIFO stack of pending items, so traversal
//! needs no call-stack recursion and worker stack depth stays bounded
//! regardless of tree depth. A directory deferred for descent is pushed
//! twice: a revisit marker first, then the visit itself. The LIFO
//! discipline guarantees the marker surfaces only after the directory's
//! entire pushed descent has drained, at which point the directory gets one
//! more look and is deleted in the same pass if the pruning emptied it.

use crate::client::{ClientError, ClientResult, DirectorySummary, Entry, FileStoreClient};
use crate::config::SweepConfig;
use crate::counters::{RunCounters, progress_due};
use crate::policy::{self, Verdict};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One pending unit of traversal work.
#[derive(Debug)]
enum PendingItem {
    /// List the directory and run the policy over its entries.
    Visit(PathBuf),
    /// Post-descent re-check of a directory deferred via
    /// [`Verdict::Recurse`]. Carries the modification time captured when
    /// the directory was first listed.
    Revisit {
        path: PathBuf,
        modified: NaiveDateTime,
    },
}

/// Walks one subtree, applying the retention policy entry by entry and
/// updating the shared run counters.
pub struct SubtreeWalker<'a> {
    client: &'a dyn FileStoreClient,
    counters: &'a RunCounters,
    config: &'a SweepConfig,
    today: NaiveDate,
    stack: Vec<PendingItem>,
}

impl<'a> SubtreeWalker<'a> {
    pub fn new(
        client: &'a dyn FileStoreClient,
        counters: &'a RunCounters,
        config: &'a SweepConfig,
        today: NaiveDate,
    ) -> Self {
        Self {
            client,
            counters,
            config,
            today,
            stack: Vec::new(),
        }
    }

    /// Runs the walk to completion, starting from the task's root entry.
    ///
    /// The root entry is itself subject to the policy, so a top-level
    /// child of the configured root can be pruned like anything beneath
    /// it. Returns the first unrecoverable client error; NotFound races
    /// during the walk are handled locally and never surface here.
    pub fn run(mut self, root: Entry) -> ClientResult<()> {
        if self.config.verbose {
            debug!(root = %root.path.display(), "starting subtree walk");
        }
        self.process_entry(&root)?;
        while let Some(item) = self.stack.pop() {
            match item {
                PendingItem::Visit(path) => self.visit(&path)?,
                PendingItem::Revisit { path, modified } => self.revisit(path, modified)?,
            }
        }
        if self.config.verbose {
            debug!(root = %root.path.display(), "finished subtree walk");
        }
        Ok(())
    }

    fn visit(&mut self, path: &Path) -> ClientResult<()> {
        let entries = match self.client.list_entries(path) {
            Ok(entries) => entries,
            // Removed out from under us; the branch is already gone.
            Err(ClientError::NotFound(_)) => return Ok(()),
            Err(err) => return Err(err),
        };
        for entry in &entries {
            self.process_entry(entry)?;
        }
        Ok(())
    }

    fn process_entry(&mut self, entry: &Entry) -> ClientResult<()> {
        let summary = if entry.is_directory {
            self.summary_or_gone(&entry.path)?
        } else {
            DirectorySummary::default()
        };

        match policy::decide(entry, summary, self.config.older_than_days, self.today) {
            Verdict::Recurse => {
                self.stack.push(PendingItem::Revisit {
                    path: entry.path.clone(),
                    modified: entry.modified,
                });
                self.stack.push(PendingItem::Visit(entry.path.clone()));
            }
            Verdict::Delete => self.delete(entry, summary)?,
            Verdict::Retain => {
                if self.config.verbose {
                    debug!(
                        path = %entry.path.display(),
                        objects = summary.object_count(),
                        "retaining"
                    );
                }
            }
        }

        let scanned = self.counters.record_scanned();
        self.report_progress(scanned);
        Ok(())
    }

    /// Post-descent re-check: delete the directory if this run's pruning
    /// emptied it. A directory still holding more than one object is left
    /// for a later run rather than re-descended.
    fn revisit(&mut self, path: PathBuf, modified: NaiveDateTime) -> ClientResult<()> {
        let summary = self.summary_or_gone(&path)?;
        let entry = Entry {
            path,
            is_directory: true,
            modified,
        };
        match policy::decide(&entry, summary, self.config.older_than_days, self.today) {
            Verdict::Delete => self.delete(&entry, summary)?,
            Verdict::Recurse | Verdict::Retain => {
                if self.config.verbose {
                    debug!(
                        path = %entry.path.display(),
                        objects = summary.object_count(),
                        "still populated after pruning"
                    );
                }
            }
        }
        Ok(())
    }

    /// Content summary with the concurrent-removal race folded in: a path
    /// that vanished counts zero objects, which turns the entry into a
    /// delete candidate whose delete will itself tolerate NotFound.
    fn summary_or_gone(&self, path: &Path) -> ClientResult<DirectorySummary> {
        match self.client.content_summary(path) {
            Ok(summary) => Ok(summary),
            Err(ClientError::NotFound(_)) => {
                info!(path = %path.display(), "path vanished during walk");
                Ok(DirectorySummary::default())
            }
            Err(err) => Err(err),
        }
    }

    fn delete(&self, entry: &Entry, summary: DirectorySummary) -> ClientResult<()> {
        let age = policy::age_in_days(entry.modified, self.today);
        let kind = if entry.is_directory {
            format!("d:{}", summary.object_count())
        } else {
            "f".to_string()
        };

        if self.config.dry_run {
            info!(
                path = %entry.path.display(),
                kind = %kind,
                age_days = age,
                "delete candidate (dry run)"
            );
            return Ok(());
        }

        info!(
            path = %entry.path.display(),
            kind = %kind,
            age_days = age,
            modified = %entry.modified,
            "deleting"
        );
        match self.client.delete(&entry.path, false) {
            Ok(()) => {
                self.counters.record_deleted();
                Ok(())
            }
            // Someone else got there first; nothing left to do.
            Err(ClientError::NotFound(_)) => Ok(()),
            Err(err) => Err(err),
        }
    }

    fn report_progress(&self, scanned: u64) {
        let deleted = self.counters.deleted();
        if progress_due(self.stack.len(), scanned, deleted) {
            info!(pending = self.stack.len(), scanned, deleted, "sweep progress");
        }
    }
}
