//! # vecta-core
//!
//! Core types for the Vecta indexed callback dispatch tables.
//!
//! This crate has minimal dependencies and no heap usage, so it can be pulled
//! into `no_std` targets that only need to describe handlers and id ranges.
//!
//! # Building Blocks
//!
//! ## Callable ([`Delegate`], [`Callback`])
//!
//! A [`Delegate`] is the value stored in a dispatch table. It is `Copy`,
//! allocation-free, and either unbound or bound to a free function or to an
//! object implementing [`Callback`].
//!
//! ## Identifier Space ([`IdRange`])
//!
//! The dense `[OFFSET, OFFSET + RANGE)` interval a table covers, with the
//! build-time assertions every const-id entry point relies on.
//!
//! ## Dispatch Seam ([`Dispatch`])
//!
//! The trait both table variants implement, so code can stay generic over
//! whether the table is borrowed or owned.
//!
//! # Error Types
//!
//! - [`VectaError`] - Top-level error type
//! - [`RegisterError`] - Rejected checked registrations

#![no_std]
#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod delegate;
mod dispatch;
mod error;
mod range;

// Re-exports
pub use delegate::{Callback, Delegate};
pub use dispatch::{Dispatch, Route};
pub use error::{RegisterError, VectaError};
pub use range::IdRange;
