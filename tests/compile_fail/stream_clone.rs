//! Test that a stream cannot be cloned.

use functional_utils::sequence::stream;

fn main() {
    let evens = stream::filter(|n: &i32| n % 2 == 0, stream::from(vec![1, 2, 3, 4]));
    // Streams own a single cursor and do not implement Clone
    let _copy = evens.clone();
}
