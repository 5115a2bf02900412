//! Dispatch core traits.

use core::ops::Range;

/// Where a runtime id would be delivered.
///
/// Returned by the non-invoking `resolve` methods so callers can inspect a
/// table without triggering side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The id maps to this table slot.
    Slot(usize),
    /// The id is out of range and goes to the table's fallback entry.
    Fallback,
    /// The id has no specific handler and goes to the unhandled delegate.
    Unhandled,
    /// The id has no handler and no unhandled delegate; it is dropped.
    Dropped,
}

impl Route {
    /// Whether a call with this route reaches any target.
    pub const fn is_delivered(&self) -> bool {
        !matches!(self, Route::Dropped)
    }
}

/// An indexed callback dispatch table.
///
/// Implemented by both table variants so code can be generic over whether the
/// table is borrowed or owned. The trait is object safe.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an indexed dispatch table",
    label = "missing `Dispatch` implementation",
    note = "Use `StaticService` or `OwnedService`, or implement `Dispatch`."
)]
pub trait Dispatch {
    /// Invoke the target for `id` on the caller's stack.
    fn call(&self, id: usize);

    /// Report where `id` would be delivered without invoking anything.
    fn resolve(&self, id: usize) -> Route;

    /// The table's identifier range.
    fn bounds(&self) -> Range<usize>;
}
