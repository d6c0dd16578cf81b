/*!
 * RwLock-Guarded Value Cell
 * One value behind a reader/writer lock; reads share, writes exclude
 */

use parking_lot::RwLock;

/// A value of type `T` guarded by a reader/writer lock.
///
/// `get` and `with_read_lock` take the shared lock and may run
/// concurrently with each other; `set` and `with_lock` take the exclusive
/// lock and serialize against everyone. Fairness is whatever
/// `parking_lot::RwLock` provides.
///
/// # Read Path
///
/// Read entry points hand out clones, never references. `with_read_lock`
/// in particular passes its callback an owned copy of the value, so a
/// reader cannot mutate shared state while other readers are concurrently
/// inside the lock. That copy-out is part of the contract, not an
/// optimization target.
pub struct RwLockCell<T> {
    value: RwLock<T>,
}

impl<T> RwLockCell<T> {
    /// Create a cell owning `initial`
    pub fn new(initial: T) -> Self {
        Self {
            value: RwLock::new(initial),
        }
    }

    /// Return a clone of the current value
    ///
    /// Takes the shared lock, so concurrent `get` calls do not block each
    /// other; blocks only while a writer holds the lock.
    #[inline]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.read().clone()
    }

    /// Replace the stored value wholesale
    ///
    /// Takes the exclusive lock, excluding all readers and writers for
    /// the duration of the swap.
    #[inline]
    pub fn set(&self, value: T) {
        *self.value.write() = value;
    }

    /// Run `f` with an owned copy of the value, under the shared lock
    ///
    /// `None` is a silent no-op. `f` receives a clone: mutations it makes
    /// to its argument are local and never observed by the cell. Useful
    /// for compound reads that would otherwise pay for several `get`
    /// calls. The shared lock is released on every exit path, including a
    /// panic inside `f`.
    pub fn with_read_lock<F>(&self, f: Option<F>)
    where
        T: Clone,
        F: FnOnce(T),
    {
        let Some(f) = f else {
            log::trace!("RwLockCell::with_read_lock called without callback, skipping");
            return;
        };
        let guard = self.value.read();
        f(guard.clone());
    }

    /// Run `f` with exclusive mutable access to the stored value
    ///
    /// `None` is a silent no-op. Takes the exclusive lock for genuine
    /// in-place update; the RAII guard drops during unwind if `f` panics,
    /// so the lock is never leaked. No rollback on panic.
    pub fn with_lock<F>(&self, f: Option<F>)
    where
        F: FnOnce(&mut T),
    {
        let Some(f) = f else {
            log::trace!("RwLockCell::with_lock called without callback, skipping");
            return;
        };
        let mut guard = self.value.write();
        f(&mut *guard);
    }
}

impl<T: Default> Default for RwLockCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for RwLockCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RwLockCell")
            .field("value", &*self.value.read())
            .finish()
    }
}
