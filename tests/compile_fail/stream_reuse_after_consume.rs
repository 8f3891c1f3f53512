//! Test that a stream cannot be iterated again after being consumed.

use functional_utils::sequence::stream;

fn main() {
    let numbers = stream::from(vec![1, 2, 3]);
    let doubled: Vec<i32> = stream::map(|n: i32| n * 2, numbers).collect();
    // `numbers` was moved into the map adaptor
    let again: Vec<i32> = numbers.collect();
    let _ = (doubled, again);
}
