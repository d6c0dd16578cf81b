/// Apply `transform` to every element of `input`, returning the results
/// in order.
///
/// The output always has the same length as the input; element `i` of the
/// result is `transform(&input[i])`. Allocates a fresh `Vec` and never
/// mutates the input.
pub fn map<T, U, F>(input: &[T], mut transform: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let mut result = Vec::with_capacity(input.len());
    for item in input {
        result.push(transform(item));
    }
    result
}
