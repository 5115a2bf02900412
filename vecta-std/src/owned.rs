//! Owned dispatch table with runtime registration.
//!
//! [`OwnedService`] owns exactly `RANGE` slots. Every slot starts out as the
//! unhandled trampoline, which forwards to the service's unhandled delegate.
//! Registration overwrites slots; nothing ever resets one.
//!
//! # Two-tier fallback
//!
//! | id state                   | delivered to                         |
//! |----------------------------|--------------------------------------|
//! | in range, registered       | the registered delegate              |
//! | in range, never registered | unhandled delegate via trampoline    |
//! | out of range               | unhandled delegate, table untouched  |
//!
//! With no unhandled delegate bound, the last two rows drop the event with
//! no observable effect.

use core::ops::Range;
use vecta_core::{Callback, Delegate, Dispatch, IdRange, RegisterError, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot<'a> {
    /// Forwards to the service's unhandled delegate.
    Unhandled,
    Handler(Delegate<'a>),
}

/// An indexed delegate service that owns its table.
///
/// # Concurrency
///
/// Registration takes `&mut self` and dispatch takes `&self`, so a dispatch
/// can never observe a slot mid-overwrite. When the service is shared with
/// an interrupt or event context (for example through a `static` behind a
/// lock), finish registering before enabling the source that drives
/// [`call`](Self::call).
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use vecta_std::owned::OwnedService;
///
/// let handled = AtomicUsize::new(0);
/// let unhandled = AtomicUsize::new(0);
/// let on_handled = |id: usize| handled.store(id, Ordering::SeqCst);
/// let on_unhandled = |id: usize| unhandled.store(id, Ordering::SeqCst);
///
/// // Ids 10, 11 and 12.
/// let mut service = OwnedService::<3, 10>::new();
/// service.register_const::<11>(&on_handled);
/// service.register_unhandled(&on_unhandled);
///
/// service.call(11);
/// assert_eq!(handled.load(Ordering::SeqCst), 11);
///
/// service.call(13);
/// assert_eq!(unhandled.load(Ordering::SeqCst), 13);
/// ```
///
/// Const ids are checked at build time:
///
/// ```rust,compile_fail
/// use vecta_std::owned::OwnedService;
///
/// fn handler(_id: usize) {}
///
/// let mut service = OwnedService::<3, 10>::new();
/// service.register_const::<9>(handler as fn(usize));
/// ```
///
/// ```rust,compile_fail
/// use vecta_std::owned::OwnedService;
///
/// let service = OwnedService::<3, 10>::new();
/// service.call_const::<13>();
/// ```
///
/// as is the range itself:
///
/// ```rust,compile_fail
/// use vecta_std::owned::OwnedService;
///
/// let service = OwnedService::<2, { usize::MAX }>::new();
/// service.call(0);
/// ```
#[derive(Debug, Clone)]
pub struct OwnedService<'a, const RANGE: usize, const OFFSET: usize = 0> {
    lookup: [Slot<'a>; RANGE],
    unhandled: Delegate<'a>,
}

impl<'a, const RANGE: usize, const OFFSET: usize> OwnedService<'a, RANGE, OFFSET> {
    /// Create a service with every slot forwarding to the unhandled delegate.
    pub const fn new() -> Self {
        IdRange::<RANGE, OFFSET>::validate();
        Self {
            lookup: [Slot::Unhandled; RANGE],
            unhandled: Delegate::unbound(),
        }
    }

    /// Register a delegate for a compile-time id, replacing any previous one.
    pub fn register_const<const ID: usize>(&mut self, delegate: impl Into<Delegate<'a>>) {
        let slot = IdRange::<RANGE, OFFSET>::slot_of::<ID>();
        self.lookup[slot] = Slot::Handler(delegate.into());
    }

    /// Register a delegate for `id`, replacing any previous one.
    ///
    /// Out-of-range ids are ignored. Use [`try_register`](Self::try_register)
    /// to observe the rejection.
    pub fn register(&mut self, id: usize, delegate: impl Into<Delegate<'a>>) {
        let _ = self.try_register(id, delegate);
    }

    /// Register a delegate for `id`, failing if `id` is out of range.
    pub fn try_register(
        &mut self,
        id: usize,
        delegate: impl Into<Delegate<'a>>,
    ) -> Result<(), RegisterError> {
        let slot = IdRange::<RANGE, OFFSET>::index_of(id).ok_or(RegisterError::OutOfRange {
            id,
            start: IdRange::<RANGE, OFFSET>::START,
            end: IdRange::<RANGE, OFFSET>::END,
        })?;
        self.lookup[slot] = Slot::Handler(delegate.into());
        Ok(())
    }

    /// Register the delegate for ids with no specific handler.
    pub fn register_unhandled(&mut self, delegate: impl Into<Delegate<'a>>) {
        self.unhandled = delegate.into();
    }

    /// Invoke the slot for a compile-time id.
    #[inline]
    pub fn call_const<const ID: usize>(&self) {
        let slot = IdRange::<RANGE, OFFSET>::slot_of::<ID>();
        self.invoke(self.lookup[slot], ID);
    }

    /// Invoke the slot for `id`, or the unhandled delegate if out of range.
    #[inline]
    pub fn call(&self, id: usize) {
        match IdRange::<RANGE, OFFSET>::index_of(id) {
            Some(slot) => self.invoke(self.lookup[slot], id),
            None => self.unhandled(id),
        }
    }

    /// Whether `id` has a registered delegate.
    pub fn is_registered(&self, id: usize) -> bool {
        IdRange::<RANGE, OFFSET>::index_of(id)
            .is_some_and(|slot| matches!(self.lookup[slot], Slot::Handler(_)))
    }

    /// Whether an unhandled delegate is bound.
    pub const fn has_unhandled(&self) -> bool {
        self.unhandled.is_bound()
    }

    /// Report where `id` would be delivered.
    pub fn resolve(&self, id: usize) -> Route {
        match IdRange::<RANGE, OFFSET>::index_of(id).map(|slot| (slot, self.lookup[slot])) {
            Some((slot, Slot::Handler(_))) => Route::Slot(slot),
            _ if self.unhandled.is_bound() => Route::Unhandled,
            _ => Route::Dropped,
        }
    }

    #[inline]
    fn invoke(&self, slot: Slot<'a>, id: usize) {
        match slot {
            Slot::Handler(delegate) => delegate.call(id),
            Slot::Unhandled => self.unhandled(id),
        }
    }

    /// The trampoline target: forward to the unhandled delegate, or drop.
    #[inline]
    fn unhandled(&self, id: usize) {
        self.unhandled.call(id);
    }
}

impl<const RANGE: usize, const OFFSET: usize> Default for OwnedService<'_, RANGE, OFFSET> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const RANGE: usize, const OFFSET: usize> Dispatch for OwnedService<'_, RANGE, OFFSET> {
    fn call(&self, id: usize) {
        OwnedService::call(self, id)
    }

    fn resolve(&self, id: usize) -> Route {
        OwnedService::resolve(self, id)
    }

    fn bounds(&self) -> Range<usize> {
        IdRange::<RANGE, OFFSET>::bounds()
    }
}

impl<const RANGE: usize, const OFFSET: usize> Callback for OwnedService<'_, RANGE, OFFSET> {
    fn on_id(&self, id: usize) {
        self.call(id)
    }
}
