/*!
 * Guarded Value Cells
 *
 * Generic containers that pair a single value with a lock so that
 * read/modify/write stays safe under concurrent access:
 * - `MutexCell<T>`: every access takes the same exclusive lock
 * - `RwLockCell<T>`: reads share the lock, writes exclude everyone
 *
 * # Concurrency Model
 *
 * Callers block only while waiting for the lock; there are no timeouts
 * and no cancellation. All locks are RAII-scoped, so a panicking callback
 * releases its lock during unwind instead of leaking it. The locks are
 * not reentrant: a callback must not call back into the cell it is
 * currently locked inside of, or it deadlocks.
 *
 * # Use Cases
 *
 * - **Shared counters/flags**: increment-under-lock without races
 * - **Config snapshots**: many readers, occasional writer
 * - **Compound updates**: read-modify-write as one critical section
 */

mod mutex_cell;
mod rwlock_cell;

pub use mutex_cell::MutexCell;
pub use rwlock_cell::RwLockCell;
