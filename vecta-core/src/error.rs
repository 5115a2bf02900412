//! Error types for Vecta.
//!
//! Dispatch itself never fails: out-of-range ids go to the fallback and
//! unbound fallbacks drop the event. Errors only exist for callers that opt
//! into checked registration.
//!
//! - [`VectaError`] - Top-level error type for all Vecta operations
//! - [`RegisterError`] - Errors from checked registration

use thiserror::Error;

/// Top-level error type for all Vecta operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectaError {
    /// A checked registration was rejected.
    #[error(transparent)]
    Register(#[from] RegisterError),
}

/// Errors returned by checked registration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    /// The id lies outside the table's range.
    #[error("callback id {id} is outside the dispatch range {start}..{end}")]
    OutOfRange {
        /// The rejected id.
        id: usize,
        /// Lowest valid id.
        start: usize,
        /// One past the highest valid id.
        end: usize,
    },
}
