//! Error types for dfsweep.
//!
//! Client-boundary errors live in `crate::client`; this module wraps them
//! into the top-level error type and maps that to process exit codes.

use crate::client::ClientError;
use crate::exit_codes;
use thiserror::Error;

/// Top-level error for a sweep run.
///
/// Recoverable conditions (NotFound races during the walk) never surface
/// here; anything that does is terminal for the run or for one of its
/// subtree tasks.
#[derive(Error, Debug)]
pub enum SweepError {
    /// A file store call failed outside every recoverable path.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl SweepError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SweepError::Client(_) => exit_codes::SWEEP_FAILURE,
        }
    }
}

/// Result type alias for sweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;
