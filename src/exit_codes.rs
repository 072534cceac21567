//! Exit code constants for the dfsweep CLI.
//!
//! - 0: success, including the silent no-op when `--path` or `--olderthan`
//!   is absent
//! - 1: one or more subtree walks failed, or the root listing failed
//! - 2: usage error (unknown parameter or malformed value), raised before
//!   any filesystem access

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// The sweep ran but at least one subtree walk failed terminally.
pub const SWEEP_FAILURE: i32 = 1;

/// Bad command line: unknown parameter or malformed value.
pub const USAGE_ERROR: i32 = 2;
