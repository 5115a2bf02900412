//! Testing utilities for Vecta.
//!
//! This module provides callbacks that make dispatch tables easy to observe
//! in tests.
//!
//! # Features
//!
//! - [`RecordingCallback`]: A callback that records every id it receives
//! - [`CountingCallback`]: A callback that counts invocations

use std::sync::{
    Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};
use vecta_core::Callback;

// ============================================================================
// Recording Callback
// ============================================================================

/// A callback that records all ids it receives, in order.
///
/// Useful for verifying that ids are routed to the right slot.
///
/// # Example
///
/// ```rust
/// use vecta_std::{owned::OwnedService, testing::RecordingCallback};
///
/// let recorder = RecordingCallback::new();
/// let mut service = OwnedService::<4>::new();
/// service.register(2, &recorder);
///
/// service.call(2);
/// service.call(3);
///
/// assert_eq!(recorder.ids(), vec![2]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingCallback {
    ids: Mutex<Vec<usize>>,
}

impl RecordingCallback {
    /// Create a new empty recorder.
    pub fn new() -> Self {
        Self {
            ids: Mutex::new(Vec::new()),
        }
    }

    /// Get a copy of the recorded ids.
    pub fn ids(&self) -> Vec<usize> {
        self.ids.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Get the number of recorded ids.
    pub fn count(&self) -> usize {
        self.ids.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// The most recently recorded id.
    pub fn last(&self) -> Option<usize> {
        self.ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .copied()
    }

    /// Clear all recorded ids.
    pub fn clear(&self) {
        self.ids.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Callback for RecordingCallback {
    fn on_id(&self, id: usize) {
        self.ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(id);
    }
}

// ============================================================================
// Counting Callback
// ============================================================================

/// A callback that counts invocations.
///
/// `const`-constructible, so it can sit in a `static` next to a static table.
#[derive(Debug, Default)]
pub struct CountingCallback {
    count: AtomicUsize,
}

impl CountingCallback {
    /// Create a new counting callback.
    pub const fn new() -> Self {
        Self {
            count: AtomicUsize::new(0),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Callback for CountingCallback {
    fn on_id(&self, _id: usize) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
