//! # Callable Layer (Delegate)
//!
//! A [`Delegate`] is the unit stored in every dispatch table slot. It is a
//! small `Copy` value that is either unbound or bound to a target:
//!
//! - a free function (`fn(usize)`), or
//! - an object implementing [`Callback`], borrowed for `'a`.
//!
//! Binding an object borrows it, so a table of delegates can never outlive
//! the handlers it points at. Nothing here allocates.
//!
//! # Invoking an unbound delegate
//!
//! [`Delegate::call`] on an unbound delegate does nothing. Use
//! [`Delegate::call_if`] when the caller needs to know whether a target ran.

use core::fmt;

/// An object that can be the target of a [`Delegate`].
///
/// This is the "instance plus method" half of a delegate: implement it on a
/// driver or state struct and bind a reference with [`Delegate::from_ref`].
/// Every `Fn(usize) + Sync` closure implements it already.
///
/// Targets must be `Sync` so tables of delegates can live in `static` items
/// shared with interrupt or event contexts. Use atomics or other `Sync`
/// interior mutability for handler state.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be the target of a `Delegate`",
    label = "missing `Callback` implementation",
    note = "Implement `Callback` or pass a `Fn(usize) + Sync` closure."
)]
pub trait Callback: Sync {
    /// Handle the dispatched identifier.
    fn on_id(&self, id: usize);
}

// Blanket impl for closures
impl<F> Callback for F
where
    F: Fn(usize) + Sync,
{
    #[inline]
    fn on_id(&self, id: usize) {
        (self)(id)
    }
}

#[derive(Clone, Copy)]
enum Target<'a> {
    Unbound,
    Function(fn(usize)),
    Object(&'a dyn Callback),
}

/// A bindable callable taking a single identifier.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use vecta_core::{Callback, Delegate};
///
/// struct Uart {
///     last: AtomicUsize,
/// }
///
/// impl Callback for Uart {
///     fn on_id(&self, id: usize) {
///         self.last.store(id, Ordering::Relaxed);
///     }
/// }
///
/// let uart = Uart { last: AtomicUsize::new(0) };
/// let delegate = Delegate::from_ref(&uart);
///
/// assert!(delegate.is_bound());
/// delegate.call(7);
/// assert_eq!(uart.last.load(Ordering::Relaxed), 7);
///
/// // Unbound delegates swallow the call.
/// assert!(!Delegate::unbound().call_if(7));
/// ```
#[derive(Clone, Copy)]
pub struct Delegate<'a> {
    target: Target<'a>,
}

impl<'a> Delegate<'a> {
    /// Create a delegate with no target.
    pub const fn unbound() -> Self {
        Self {
            target: Target::Unbound,
        }
    }

    /// Bind a free function.
    pub const fn from_fn(function: fn(usize)) -> Self {
        Self {
            target: Target::Function(function),
        }
    }

    /// Bind an object implementing [`Callback`].
    pub const fn from_ref<C: Callback>(object: &'a C) -> Self {
        Self {
            target: Target::Object(object),
        }
    }

    /// Bind an already type-erased callback.
    pub const fn from_dyn(object: &'a dyn Callback) -> Self {
        Self {
            target: Target::Object(object),
        }
    }

    /// Whether the delegate has a target.
    #[inline]
    pub const fn is_bound(&self) -> bool {
        !matches!(self.target, Target::Unbound)
    }

    /// Invoke the target with `id`. No-op when unbound.
    #[inline]
    pub fn call(&self, id: usize) {
        match self.target {
            Target::Unbound => {}
            Target::Function(function) => function(id),
            Target::Object(object) => object.on_id(id),
        }
    }

    /// Invoke the target if bound, returning whether anything ran.
    #[inline]
    pub fn call_if(&self, id: usize) -> bool {
        if self.is_bound() {
            self.call(id);
            true
        } else {
            false
        }
    }
}

impl Default for Delegate<'_> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<'a> From<fn(usize)> for Delegate<'a> {
    fn from(function: fn(usize)) -> Self {
        Self::from_fn(function)
    }
}

impl<'a, C: Callback> From<&'a C> for Delegate<'a> {
    fn from(object: &'a C) -> Self {
        Self::from_ref(object)
    }
}

/// Delegates are equal when they are bound to the same target.
impl PartialEq for Delegate<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.target, other.target) {
            (Target::Unbound, Target::Unbound) => true,
            (Target::Function(a), Target::Function(b)) => core::ptr::fn_addr_eq(a, b),
            (Target::Object(a), Target::Object(b)) => core::ptr::addr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Delegate<'_> {}

impl fmt::Debug for Delegate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Target::Unbound => f.write_str("Delegate::Unbound"),
            Target::Function(function) => f
                .debug_tuple("Delegate::Function")
                .field(&(function as *const ()))
                .finish(),
            Target::Object(object) => f
                .debug_tuple("Delegate::Object")
                .field(&(object as *const dyn Callback as *const ()))
                .finish(),
        }
    }
}
