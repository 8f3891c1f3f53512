//! Combining and splitting sequences positionally.

use super::error::SequenceError;
use crate::control::{Pair, Triplet};

/// Pairs up the elements of two sequences of equal length.
///
/// # Errors
///
/// Returns [`SequenceError::LengthMismatch`] if the sequences differ in
/// length. The mismatch is only detected once the shorter one runs out.
///
/// # Examples
///
/// ```rust
/// use functional_utils::control::Pair;
/// use functional_utils::sequence::zip;
///
/// assert_eq!(zip([1, 2], ['a', 'b']), Ok(vec![Pair::new(1, 'a'), Pair::new(2, 'b')]));
/// assert!(zip([1, 2, 3], [1, 2]).is_err());
/// ```
pub fn zip<A, B, I, J>(first: I, second: J) -> Result<Vec<Pair<A, B>>, SequenceError>
where
    I: IntoIterator<Item = A>,
    J: IntoIterator<Item = B>,
{
    let mut first = first.into_iter();
    let mut second = second.into_iter();
    let mut zipped = Vec::with_capacity(first.size_hint().0.min(second.size_hint().0));
    loop {
        match (first.next(), second.next()) {
            (Some(a), Some(b)) => zipped.push(Pair::new(a, b)),
            (None, None) => return Ok(zipped),
            _ => return Err(SequenceError::length_mismatch("zip")),
        }
    }
}

/// Groups the elements of three sequences of equal length into triplets.
///
/// # Errors
///
/// Returns [`SequenceError::LengthMismatch`] if the sequences differ in
/// length.
pub fn zip3<A, B, C, I, J, K>(
    first: I,
    second: J,
    third: K,
) -> Result<Vec<Triplet<A, B, C>>, SequenceError>
where
    I: IntoIterator<Item = A>,
    J: IntoIterator<Item = B>,
    K: IntoIterator<Item = C>,
{
    let mut first = first.into_iter();
    let mut second = second.into_iter();
    let mut third = third.into_iter();
    let mut zipped = Vec::new();
    loop {
        match (first.next(), second.next(), third.next()) {
            (Some(a), Some(b), Some(c)) => zipped.push(Triplet::new(a, b, c)),
            (None, None, None) => return Ok(zipped),
            _ => return Err(SequenceError::length_mismatch("zip3")),
        }
    }
}

/// Splits a sequence of pairs into the sequence of firsts and the sequence
/// of seconds.
///
/// # Examples
///
/// ```rust
/// use functional_utils::control::Pair;
/// use functional_utils::sequence::unzip;
///
/// let split = unzip([Pair::new(1, 'a'), Pair::new(2, 'b')]);
/// assert_eq!(split, Pair::new(vec![1, 2], vec!['a', 'b']));
/// ```
#[must_use]
pub fn unzip<A, B, I>(sequence: I) -> Pair<Vec<A>, Vec<B>>
where
    I: IntoIterator<Item = Pair<A, B>>,
{
    let (firsts, seconds) = sequence.into_iter().map(Pair::into_tuple).unzip();
    Pair::new(firsts, seconds)
}

/// Splits a sequence of triplets into three sequences.
#[must_use]
pub fn unzip3<A, B, C, I>(sequence: I) -> Triplet<Vec<A>, Vec<B>, Vec<C>>
where
    I: IntoIterator<Item = Triplet<A, B, C>>,
{
    let mut split = Triplet::new(Vec::new(), Vec::new(), Vec::new());
    for Triplet {
        first,
        second,
        third,
    } in sequence
    {
        split.first.push(first);
        split.second.push(second);
        split.third.push(third);
    }
    split
}

/// Returns the elements of `first` followed by those of `second`.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::concat;
///
/// assert_eq!(concat([1, 2], vec![3]), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn concat<T, I, J>(first: I, second: J) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
{
    first.into_iter().chain(second).collect()
}

/// Returns `element` followed by the elements of `sequence`.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::append;
///
/// assert_eq!(append(0, [1, 2]), vec![0, 1, 2]);
/// ```
#[must_use]
pub fn append<T, I>(element: T, sequence: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    concat(std::iter::once(element), sequence)
}
