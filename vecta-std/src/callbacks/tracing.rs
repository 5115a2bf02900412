//! Tracing instrumentation for callbacks.

use vecta_core::Callback;

/// A callback wrapper that instruments execution with a `tracing` span.
///
/// The span is entered for the duration of the inner callback and carries
/// the dispatched id and a static name. Without the `tracing` feature the
/// wrapper forwards directly.
pub struct TracingCallback<C> {
    inner: C,
    name: &'static str,
}

impl<C> TracingCallback<C> {
    /// Create a new `TracingCallback` around a callback.
    pub const fn new(inner: C, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The name recorded on the span.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get a reference to the wrapped callback.
    pub const fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Clone> Clone for TracingCallback<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<C: Copy> Copy for TracingCallback<C> {}

impl<C: Callback> Callback for TracingCallback<C> {
    #[cfg(feature = "tracing")]
    fn on_id(&self, id: usize) {
        let span = ::tracing::trace_span!("dispatch", callback = %self.name, id);
        let _entered = span.enter();
        self.inner.on_id(id);
    }

    #[cfg(not(feature = "tracing"))]
    fn on_id(&self, id: usize) {
        self.inner.on_id(id);
    }
}
