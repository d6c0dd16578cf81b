/*!
 * Mutex-Guarded Value Cell
 * One value behind one exclusive lock; every access serializes
 */

use parking_lot::Mutex;

/// A value of type `T` guarded by a single mutual-exclusion lock.
///
/// Every entry point, read or write, takes the same exclusive lock, so
/// all operations serialize against each other and against themselves
/// across threads. No operation returns an error: `parking_lot` locks do
/// not poison, and the only validated input is the optional callback,
/// which is treated as a successful no-op when absent.
///
/// # Example
///
/// ```
/// use lock_cell::MutexCell;
///
/// let cell = MutexCell::new(10);
/// cell.with_lock(Some(|v: &mut i32| *v += 5));
/// assert_eq!(cell.get(), 15);
/// ```
pub struct MutexCell<T> {
    value: Mutex<T>,
}

impl<T> MutexCell<T> {
    /// Create a cell owning `initial`
    pub fn new(initial: T) -> Self {
        Self {
            value: Mutex::new(initial),
        }
    }

    /// Return a clone of the current value
    ///
    /// Holds the lock only for the duration of the clone, so the snapshot
    /// is consistent (never torn) but may be stale by the time it returns.
    #[inline]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.lock().clone()
    }

    /// Replace the stored value wholesale
    #[inline]
    pub fn set(&self, value: T) {
        *self.value.lock() = value;
    }

    /// Run `f` with exclusive mutable access to the stored value
    ///
    /// `None` is a silent no-op. The lock is held for the duration of `f`
    /// and released on every exit path: the RAII guard drops during unwind
    /// if `f` panics, so the lock is never leaked. Whatever `f` wrote
    /// before panicking stays; there is no rollback.
    pub fn with_lock<F>(&self, f: Option<F>)
    where
        F: FnOnce(&mut T),
    {
        let Some(f) = f else {
            log::trace!("MutexCell::with_lock called without callback, skipping");
            return;
        };
        let mut guard = self.value.lock();
        f(&mut *guard);
    }
}

impl<T: Default> Default for MutexCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for MutexCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutexCell")
            .field("value", &*self.value.lock())
            .finish()
    }
}
