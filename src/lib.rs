/*!
 * Lock-Cell Library
 * Lock-guarded value cells and pure sequence helpers
 */

pub mod seq;
pub mod sync;

// Re-exports
pub use seq::{filter, map, reduce};
pub use sync::{MutexCell, RwLockCell};
