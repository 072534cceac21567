//! File store client boundary.
//!
//! The retention core talks to the underlying store exclusively through the
//! [`FileStoreClient`] trait: one listing call per directory, on-demand
//! content summaries, and non-recursive deletes. Protocol concerns (wire
//! format, retries, authentication, timeouts) belong to implementations,
//! not to this interface.

pub mod local;
mod types;

pub use local::LocalFileStore;
pub use types::{DirectorySummary, Entry};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by file store calls.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The path does not exist, or was removed concurrently.
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A non-recursive delete was issued against a non-empty directory.
    #[error("directory not empty: {}", .0.display())]
    DirectoryNotEmpty(PathBuf),

    /// The store refused the operation.
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Any other store-side failure.
    #[error("file store error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for file store calls.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Client interface consumed by the retention walk.
///
/// Implementations must be safe for concurrent use: a single handle is
/// shared by every worker in the pool.
pub trait FileStoreClient: Send + Sync {
    /// Lists the immediate entries of `path`. One remote round trip.
    fn list_entries(&self, path: &Path) -> ClientResult<Vec<Entry>>;

    /// Returns aggregate object counts for the subtree rooted at `path`,
    /// including `path` itself.
    ///
    /// Computed fresh on every call; the result may already be stale when
    /// it is acted on if the tree mutates concurrently.
    fn content_summary(&self, path: &Path) -> ClientResult<DirectorySummary>;

    /// Deletes `path`.
    ///
    /// The retention core always passes `recursive = false` because deletes
    /// are only issued against entries already known to hold at most one
    /// object (a file, or a directory counting only itself).
    fn delete(&self, path: &Path, recursive: bool) -> ClientResult<()>;
}
