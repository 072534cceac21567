//! Data types produced by file store listings and summaries.

use chrono::NaiveDateTime;
use std::path::PathBuf;

/// One filesystem entry as returned by a directory listing.
///
/// Immutable snapshot: it may be stale by the time it is acted on if the
/// tree mutates concurrently, which is why NotFound is a recoverable
/// answer to summary and delete calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub is_directory: bool,
    /// Modification time already resolved to the local timezone.
    pub modified: NaiveDateTime,
}

/// Aggregate object counts for a directory's subtree.
///
/// `directory_count` includes the summarized directory itself, so an empty
/// directory reports an object count of 1 and a vanished one reports 0.
/// That convention is what lets the walk issue non-recursive deletes for
/// any entry with an object count of at most 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectorySummary {
    pub file_count: u64,
    pub directory_count: u64,
}

impl DirectorySummary {
    /// Total objects in the subtree, the quantity the retention policy
    /// compares against.
    pub fn object_count(&self) -> u64 {
        self.file_count + self.directory_count
    }
}
