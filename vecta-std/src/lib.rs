//! # vecta-std
//!
//! Dispatch table implementations for the Vecta callback dispatch framework.
//!
//! This crate provides:
//! - **Static tables**: [`StaticService`] over a caller-owned table, and the
//!   [`delegate_table!`] macro to build one
//! - **Owned tables**: [`OwnedService`] with runtime registration and a
//!   two-tier unhandled fallback
//! - **Standard callbacks**: Logging, Tracing
//! - **Testing utilities**: Recording and counting callbacks
//!
//! [`StaticService`]: static_dispatch::StaticService
//! [`OwnedService`]: owned::OwnedService

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use vecta_core;

// Modules
pub mod callbacks;
pub mod owned;
pub mod static_dispatch;
pub mod testing;
