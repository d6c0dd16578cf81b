/*!
 * Sequence Helper Integration Tests
 * filter/map/reduce contracts over slices
 */

use lock_cell::{filter, map, reduce};
use pretty_assertions::assert_eq;

#[test]
fn test_filter_keeps_even_numbers_in_order() {
    let input = [1, 2, 3, 4, 5, 6];
    assert_eq!(filter(&input, |n| n % 2 == 0), vec![2, 4, 6]);
}

#[test]
fn test_map_squares() {
    let input = [1, 2, 3, 4];
    assert_eq!(map(&input, |n| n * n), vec![1, 4, 9, 16]);
}

#[test]
fn test_reduce_sums() {
    let input = [1, 2, 3, 4];
    assert_eq!(reduce(&input, 0, |n, acc| acc + n), 10);
}

#[test]
fn test_reduce_empty_returns_initial() {
    let empty: [i32; 0] = [];
    assert_eq!(reduce(&empty, 0, |n, acc| acc + n), 0);
}

#[test]
fn test_helpers_compose() {
    // Sum of squares of the even numbers
    let input = [1, 2, 3, 4, 5, 6];
    let evens = filter(&input, |n| n % 2 == 0);
    let squares = map(&evens, |n| n * n);
    let total = reduce(&squares, 0, |n, acc| acc + n);
    assert_eq!(total, 4 + 16 + 36);
}

#[test]
fn test_inputs_survive_unchanged() {
    let input = vec![3, 1, 2];

    let filtered = filter(&input, |n| *n > 1);
    let mapped = map(&input, |n| n + 1);
    let folded = reduce(&input, 0, |n, acc| acc.max(*n));

    assert_eq!(input, vec![3, 1, 2]);
    assert_eq!(filtered, vec![3, 2]);
    assert_eq!(mapped, vec![4, 2, 3]);
    assert_eq!(folded, 3);
}

#[test]
fn test_stateful_closures_are_allowed() {
    let input = ["a", "b", "c", "d"];
    let mut seen = 0;
    let every_other = filter(&input, |_| {
        seen += 1;
        seen % 2 == 1
    });
    assert_eq!(every_other, vec!["a", "c"]);
}
