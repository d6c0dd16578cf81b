/*!
 * Sequence Helpers
 *
 * Pure, single-threaded helpers over ordered slices:
 * - `filter`: keep elements matching a predicate, order preserved
 * - `map`: transform every element, length preserved
 * - `reduce`: left fold into an accumulator
 *
 * All three allocate a fresh result and never mutate their input.
 */

mod filter;
mod map;
mod reduce;

pub use filter::filter;
pub use map::map;
pub use reduce::reduce;
