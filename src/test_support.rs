//! Shared test fixtures: an in-memory file store with recorded calls.

use crate::client::{ClientError, ClientResult, DirectorySummary, Entry, FileStoreClient};
use chrono::{Days, Local, NaiveDateTime};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Modification time `days` calendar days before today, at mid-day so test
/// ages are insensitive to when within the day a test runs.
pub(crate) fn days_ago(days: u64) -> NaiveDateTime {
    let date = Local::now().date_naive() - Days::new(days);
    date.and_hms_opt(12, 0, 0).unwrap()
}

#[derive(Debug, Clone)]
struct Node {
    is_directory: bool,
    modified: NaiveDateTime,
}

#[derive(Debug, Default)]
struct StoreState {
    nodes: BTreeMap<PathBuf, Node>,
    delete_calls: Vec<(PathBuf, bool)>,
    deleted: Vec<PathBuf>,
}

/// In-memory `FileStoreClient` that records every delete call.
///
/// Paths are plain absolute strings; parent/child relationships come from
/// path prefixes, and summaries follow the include-self convention of the
/// real store.
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    state: Mutex<StoreState>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_dir(&self, path: &str, modified: NaiveDateTime) {
        self.insert(path, true, modified);
    }

    pub(crate) fn add_file(&self, path: &str, modified: NaiveDateTime) {
        self.insert(path, false, modified);
    }

    fn insert(&self, path: &str, is_directory: bool, modified: NaiveDateTime) {
        self.state.lock().unwrap().nodes.insert(
            PathBuf::from(path),
            Node {
                is_directory,
                modified,
            },
        );
    }

    /// Snapshot of one node as a listing entry, for seeding walkers.
    pub(crate) fn entry(&self, path: &str) -> Entry {
        let state = self.state.lock().unwrap();
        let node = state.nodes.get(Path::new(path)).expect("fixture path");
        Entry {
            path: PathBuf::from(path),
            is_directory: node.is_directory,
            modified: node.modified,
        }
    }

    pub(crate) fn contains(&self, path: &str) -> bool {
        self.state.lock().unwrap().nodes.contains_key(Path::new(path))
    }

    /// Paths removed so far, in removal order.
    pub(crate) fn deleted_paths(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().deleted.clone()
    }

    /// Every delete call issued, successful or not.
    pub(crate) fn delete_calls(&self) -> Vec<(PathBuf, bool)> {
        self.state.lock().unwrap().delete_calls.clone()
    }
}

impl FileStoreClient for MemoryStore {
    fn list_entries(&self, path: &Path) -> ClientResult<Vec<Entry>> {
        let state = self.state.lock().unwrap();
        if !state.nodes.contains_key(path) {
            return Err(ClientError::NotFound(path.to_path_buf()));
        }
        Ok(state
            .nodes
            .iter()
            .filter(|(p, _)| p.parent() == Some(path))
            .map(|(p, node)| Entry {
                path: p.clone(),
                is_directory: node.is_directory,
                modified: node.modified,
            })
            .collect())
    }

    fn content_summary(&self, path: &Path) -> ClientResult<DirectorySummary> {
        let state = self.state.lock().unwrap();
        let node = state
            .nodes
            .get(path)
            .ok_or_else(|| ClientError::NotFound(path.to_path_buf()))?;
        if !node.is_directory {
            return Ok(DirectorySummary {
                file_count: 1,
                directory_count: 0,
            });
        }
        let mut summary = DirectorySummary::default();
        for (p, n) in &state.nodes {
            if p.starts_with(path) {
                if n.is_directory {
                    summary.directory_count += 1;
                } else {
                    summary.file_count += 1;
                }
            }
        }
        Ok(summary)
    }

    fn delete(&self, path: &Path, recursive: bool) -> ClientResult<()> {
        let mut state = self.state.lock().unwrap();
        state.delete_calls.push((path.to_path_buf(), recursive));

        if !state.nodes.contains_key(path) {
            return Err(ClientError::NotFound(path.to_path_buf()));
        }
        let is_directory = state.nodes[path].is_directory;
        if is_directory && !recursive {
            let populated = state
                .nodes
                .keys()
                .any(|p| p != path && p.starts_with(path));
            if populated {
                return Err(ClientError::DirectoryNotEmpty(path.to_path_buf()));
            }
        }

        let doomed: Vec<PathBuf> = state
            .nodes
            .keys()
            .filter(|p| p.starts_with(path))
            .cloned()
            .collect();
        for p in doomed {
            state.nodes.remove(&p);
            state.deleted.push(p);
        }
        Ok(())
    }
}
