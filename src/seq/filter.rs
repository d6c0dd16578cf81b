/// Collect the elements of `input` for which `predicate` holds,
/// preserving their original order.
///
/// Returns a fresh `Vec`; the input slice is never mutated. Empty input
/// yields an empty output.
pub fn filter<T, F>(input: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut result = Vec::new();
    for item in input {
        if predicate(item) {
            result.push(item.clone());
        }
    }
    result
}
