//! Error types for the roster scheduling engine

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or solving a roster instance.
///
/// Ordinary solve outcomes — infeasible, time-limited-feasible, numerical
/// reconstruction gaps — are *not* represented here; they are data, returned
/// as an [`crate::report::EngineOutput`] inside `Ok`. This enum is reserved
/// for cases where no meaningful `EngineOutput` can be produced at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Ingested data failed a structural integrity check (nonexistent ids,
    /// malformed fixed meetings, negative required counts, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A collection that must align 1:1 with another does not.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        got: usize,
    },

    /// The FFI solver backend was not linked in (`ffi`/`link` feature off).
    #[error("FFI feature required for {0}")]
    FfiRequired(String),

    /// The solver backend returned a status this crate does not know how to
    /// interpret, or crashed across the FFI boundary.
    #[error("internal solver error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, got: usize) -> Self {
        Self::DimensionMismatch { expected, got }
    }

    /// Create an FFI-required error
    pub fn ffi_required(msg: impl Into<String>) -> Self {
        Self::FfiRequired(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
