//! Static dispatch over a caller-owned table.
//!
//! The service is a stateless view: it borrows a `[Delegate; RANGE + 1]`
//! array for `'a` and never mutates it. The last entry is the fallback for
//! out-of-range ids.

use core::ops::Range;
use vecta_core::{Callback, Delegate, Dispatch, IdRange, Route};

/// An indexed delegate service over an externally owned table.
///
/// Ids `OFFSET..OFFSET + RANGE` map to entries `0..RANGE`; entry `RANGE` is
/// invoked for every other id. The owner must bind the fallback entry: an
/// unbound fallback silently swallows out-of-range ids.
///
/// # Example
///
/// ```rust
/// use vecta_core::Delegate;
/// use vecta_std::{delegate_table, static_dispatch::StaticService};
///
/// fn timer(_id: usize) {}
/// fn uart(_id: usize) {}
/// fn spurious(_id: usize) {}
///
/// static VECTORS: [Delegate<'static>; 3] = delegate_table![timer, uart; fallback => spurious];
/// static SERVICE: StaticService<'static, 2, 32> = StaticService::new(&VECTORS);
///
/// SERVICE.call_const::<32>();
/// SERVICE.call(33);
/// SERVICE.call(99); // spurious(99)
/// ```
///
/// The table length is checked at build time:
///
/// ```rust,compile_fail
/// use vecta_core::Delegate;
/// use vecta_std::static_dispatch::StaticService;
///
/// static SHORT: [Delegate<'static>; 2] = [Delegate::unbound(); 2];
/// static SERVICE: StaticService<'static, 2> = StaticService::new(&SHORT);
/// ```
///
/// and so are const ids:
///
/// ```rust,compile_fail
/// use vecta_core::Delegate;
/// use vecta_std::static_dispatch::StaticService;
///
/// let table = [Delegate::unbound(); 3];
/// let service: StaticService<'_, 2> = StaticService::new(&table);
/// service.call_const::<2>();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StaticService<'a, const RANGE: usize, const OFFSET: usize = 0> {
    entries: &'a [Delegate<'a>; RANGE],
    fallback: &'a Delegate<'a>,
}

impl<'a, const RANGE: usize, const OFFSET: usize> StaticService<'a, RANGE, OFFSET> {
    /// Create a service over `table`, which must hold `RANGE + 1` delegates.
    pub const fn new<const N: usize>(table: &'a [Delegate<'a>; N]) -> Self {
        IdRange::<RANGE, OFFSET>::validate();
        const {
            assert!(
                N == RANGE + 1,
                "static dispatch table must hold RANGE + 1 delegates"
            );
        }

        // Both splits are infallible once N == RANGE + 1.
        let Some((fallback, rest)) = table.split_last() else {
            unreachable!()
        };
        let Some(entries) = rest.first_chunk::<RANGE>() else {
            unreachable!()
        };

        Self { entries, fallback }
    }

    /// Invoke the delegate for a compile-time id.
    #[inline]
    pub fn call_const<const ID: usize>(&self) {
        let slot = IdRange::<RANGE, OFFSET>::slot_of::<ID>();
        self.entries[slot].call(ID);
    }

    /// Invoke the delegate for `id`, or the fallback entry if out of range.
    #[inline]
    pub fn call(&self, id: usize) {
        match IdRange::<RANGE, OFFSET>::index_of(id) {
            Some(slot) => self.entries[slot].call(id),
            None => self.fallback.call(id),
        }
    }

    /// Report where `id` would be delivered.
    pub fn resolve(&self, id: usize) -> Route {
        match IdRange::<RANGE, OFFSET>::index_of(id) {
            Some(slot) => Route::Slot(slot),
            None => Route::Fallback,
        }
    }

    /// The per-id entries, excluding the fallback.
    pub const fn table(&self) -> &'a [Delegate<'a>; RANGE] {
        self.entries
    }

    /// The out-of-range fallback entry.
    pub const fn fallback(&self) -> &'a Delegate<'a> {
        self.fallback
    }
}

impl<const RANGE: usize, const OFFSET: usize> Dispatch for StaticService<'_, RANGE, OFFSET> {
    fn call(&self, id: usize) {
        StaticService::call(self, id)
    }

    fn resolve(&self, id: usize) -> Route {
        StaticService::resolve(self, id)
    }

    fn bounds(&self) -> Range<usize> {
        IdRange::<RANGE, OFFSET>::bounds()
    }
}

// A service can itself be the target of an outer table.
impl<const RANGE: usize, const OFFSET: usize> Callback for StaticService<'_, RANGE, OFFSET> {
    fn on_id(&self, id: usize) {
        self.call(id)
    }
}

// ============================================================================
// Macro
// ============================================================================

/// Build a `[Delegate; N + 1]` table from free functions, with the fallback
/// entry last.
///
/// Usable in `static` and `const` initializers.
///
/// # Example
/// ```rust
/// use vecta_core::Delegate;
/// use vecta_std::delegate_table;
///
/// fn reset(_id: usize) {}
/// fn nmi(_id: usize) {}
/// fn default_handler(_id: usize) {}
///
/// const TABLE: [Delegate<'static>; 3] = delegate_table![reset, nmi; fallback => default_handler];
/// assert!(TABLE.iter().all(Delegate::is_bound));
/// ```
#[macro_export]
macro_rules! delegate_table {
    ($($handler:expr),+ $(,)? ; fallback => $fallback:expr $(,)?) => {
        [
            $($crate::vecta_core::Delegate::from_fn($handler),)+
            $crate::vecta_core::Delegate::from_fn($fallback),
        ]
    };
}
