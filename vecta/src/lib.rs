//! # vecta - Indexed Callback Dispatch Tables
//!
//! `vecta` invokes the callback registered for a small, dense integer id in
//! constant time, without allocating. Typical ids are interrupt vector
//! numbers or message type codes.
//!
//! Two table variants are provided:
//!
//! - [`StaticService`]: a stateless view over a caller-owned
//!   `[Delegate; RANGE + 1]` table whose last entry handles out-of-range ids.
//! - [`OwnedService`]: owns `RANGE` slots, supports runtime registration, and
//!   routes unregistered and out-of-range ids to one unhandled delegate.
//!
//! Each has a build-time checked entry point (`call_const::<ID>()`) and a
//! runtime checked one (`call(id)`).
//!
//! ## Quick Start
//!
//! ```rust
//! use vecta::{OwnedService, testing::RecordingCallback};
//!
//! let timer = RecordingCallback::new();
//! let unhandled = RecordingCallback::new();
//!
//! let mut irqs = OwnedService::<8, 16>::new();
//! irqs.register_const::<16>(&timer);
//! irqs.register_unhandled(&unhandled);
//!
//! irqs.call(16);
//! irqs.call(17); // never registered
//! irqs.call(99); // out of range
//!
//! assert_eq!(timer.ids(), vec![16]);
//! assert_eq!(unhandled.ids(), vec![17, 99]);
//! ```
//!
//! ## Dropped ids
//!
//! With no unhandled delegate (owned tables) or an unbound fallback entry
//! (static tables), ids without a handler vanish silently. Register a
//! [`LoggingCallback`](callbacks::LoggingCallback) as the fallback to see
//! them when the `tracing` feature is on.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use vecta_core::{Callback, Delegate, Dispatch, IdRange, RegisterError, Route, VectaError};

// Table variants
pub use vecta_std::{delegate_table, owned::OwnedService, static_dispatch::StaticService};

/// Standard callback implementations.
pub mod callbacks {
    pub use vecta_std::callbacks::{LoggingCallback, TracingCallback};
}

/// Testing utilities.
pub mod testing {
    pub use vecta_std::testing::{CountingCallback, RecordingCallback};
}

/// Prelude module - common imports for Vecta.
///
/// # Usage
///
/// ```rust
/// use vecta::prelude::*;
///
/// fn ack(_id: usize) {}
///
/// let mut service = OwnedService::<4>::new();
/// service.register(1, Delegate::from_fn(ack));
///
/// let table: &dyn Dispatch = &service;
/// assert_eq!(table.resolve(1), Route::Slot(0));
/// assert_eq!(table.resolve(2), Route::Dropped);
/// ```
pub mod prelude {
    pub use crate::{
        Callback, Delegate, Dispatch, IdRange, OwnedService, Route, StaticService, delegate_table,
    };
}
