//! Local-filesystem adapter for the file store boundary.
//!
//! Stands in at the CLI boundary for a cluster filesystem client: listings,
//! summaries, and deletes are served by `std::fs`. Summaries follow the
//! include-self convention of [`DirectorySummary`] and are computed with an
//! explicit stack, matching the walker's bounded-depth stance.

use super::{ClientError, ClientResult, DirectorySummary, Entry, FileStoreClient};
use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// [`FileStoreClient`] backed by the local filesystem.
#[derive(Debug, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }
}

fn map_io(path: &Path, err: io::Error) -> ClientError {
    match err.kind() {
        io::ErrorKind::NotFound => ClientError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => ClientError::PermissionDenied(path.to_path_buf()),
        io::ErrorKind::DirectoryNotEmpty => ClientError::DirectoryNotEmpty(path.to_path_buf()),
        _ => ClientError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    }
}

fn entry_for(path: PathBuf, metadata: &fs::Metadata) -> ClientResult<Entry> {
    let modified = metadata.modified().map_err(|e| map_io(&path, e))?;
    let modified = DateTime::<Local>::from(modified).naive_local();
    Ok(Entry {
        is_directory: metadata.is_dir(),
        path,
        modified,
    })
}

impl FileStoreClient for LocalFileStore {
    fn list_entries(&self, path: &Path) -> ClientResult<Vec<Entry>> {
        let mut entries = Vec::new();
        for dirent in fs::read_dir(path).map_err(|e| map_io(path, e))? {
            let dirent = dirent.map_err(|e| map_io(path, e))?;
            let metadata = dirent.metadata().map_err(|e| map_io(&dirent.path(), e))?;
            entries.push(entry_for(dirent.path(), &metadata)?);
        }
        // Stable listing order keeps diagnostics deterministic.
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn content_summary(&self, path: &Path) -> ClientResult<DirectorySummary> {
        let metadata = fs::symlink_metadata(path).map_err(|e| map_io(path, e))?;
        if !metadata.is_dir() {
            return Ok(DirectorySummary {
                file_count: 1,
                directory_count: 0,
            });
        }

        let mut summary = DirectorySummary::default();
        let mut pending = vec![path.to_path_buf()];
        while let Some(dir) = pending.pop() {
            summary.directory_count += 1;
            for dirent in fs::read_dir(&dir).map_err(|e| map_io(&dir, e))? {
                let dirent = dirent.map_err(|e| map_io(&dir, e))?;
                let file_type = dirent.file_type().map_err(|e| map_io(&dirent.path(), e))?;
                if file_type.is_dir() {
                    pending.push(dirent.path());
                } else {
                    summary.file_count += 1;
                }
            }
        }
        Ok(summary)
    }

    fn delete(&self, path: &Path, recursive: bool) -> ClientResult<()> {
        let metadata = fs::symlink_metadata(path).map_err(|e| map_io(path, e))?;
        let result = if !metadata.is_dir() {
            fs::remove_file(path)
        } else if recursive {
            fs::remove_dir_all(path)
        } else {
            fs::remove_dir(path)
        };
        result.map_err(|e| map_io(path, e))
    }
}
