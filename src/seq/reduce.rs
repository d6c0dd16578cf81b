/// Fold `input` left to right into an accumulator.
///
/// Starts from `initial` and applies `combine(&element, acc)` for each
/// element in order, returning the final accumulator. Empty input returns
/// `initial` unchanged. The element comes first in the combine signature.
pub fn reduce<T, U, F>(input: &[T], initial: U, mut combine: F) -> U
where
    F: FnMut(&T, U) -> U,
{
    let mut acc = initial;
    for item in input {
        acc = combine(item, acc);
    }
    acc
}
