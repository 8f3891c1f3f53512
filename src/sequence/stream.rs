//! Lazy, single-consumption sequence adaptors.
//!
//! A [`Stream`] is an [`Iterator`] that can also answer [`Stream::has_next`]
//! without losing the element it had to pull to find out. The adaptors in
//! this module ([`map`], [`filter`], [`choose`], [`collect`], [`concat`],
//! [`skip`]) and the generators ([`init`], [`init_unbounded`]) are all
//! streams, so they can be stacked freely.
//!
//! Streams are consumed by value and are never `Clone`: every adaptor owns
//! the single cursor of the stream it wraps, and a stream cannot be iterated
//! twice.
//!
//! Work is done on demand only. `filter` and `choose` keep at most one
//! pending element and pull from their source only as far as is needed to
//! answer the current `has_next`/`next` query:
//!
//! ```rust
//! use functional_utils::sequence::stream::{self, Stream};
//!
//! let mut evens = stream::filter(|n: &i32| n % 2 == 0, stream::from(1..));
//! assert!(evens.has_next());
//! assert_eq!(evens.next(), Some(2));
//! assert_eq!(evens.take(3).collect::<Vec<_>>(), vec![4, 6, 8]);
//! ```

use std::iter::{Fuse, FusedIterator, Peekable};

use super::error::SequenceError;
use crate::control::Maybe;

/// A pull-based sequence that can report whether another element exists.
///
/// `has_next` may pull one element from an underlying source and buffer it;
/// the buffered element is what the following `next` returns. Calling
/// `has_next` repeatedly without `next` never pulls more than once.
pub trait Stream: Iterator {
    /// Returns `true` if a following call to `next` will yield an element.
    fn has_next(&mut self) -> bool;
}

impl<I: Iterator> Stream for Peekable<I> {
    #[inline]
    fn has_next(&mut self) -> bool {
        self.peek().is_some()
    }
}

// =============================================================================
// Source
// =============================================================================

/// Lifts an ordinary iterator into a [`Stream`] with one element of lookahead.
pub struct Source<I: Iterator> {
    iterator: Fuse<I>,
    lookahead: Option<I::Item>,
}

/// Creates a [`Source`] over `iterable`.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::stream::{self, Stream};
///
/// let mut source = stream::from(vec!['a']);
/// assert!(source.has_next());
/// assert!(source.has_next());
/// assert_eq!(source.next(), Some('a'));
/// assert!(!source.has_next());
/// ```
#[must_use]
pub fn from<I: IntoIterator>(iterable: I) -> Source<I::IntoIter> {
    Source {
        iterator: iterable.into_iter().fuse(),
        lookahead: None,
    }
}

impl<I: Iterator> Iterator for Source<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.lookahead.take().or_else(|| self.iterator.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = usize::from(self.lookahead.is_some());
        let (lower, upper) = self.iterator.size_hint();
        (
            lower.saturating_add(buffered),
            upper.and_then(|upper| upper.checked_add(buffered)),
        )
    }
}

impl<I: Iterator> Stream for Source<I> {
    fn has_next(&mut self) -> bool {
        if self.lookahead.is_none() {
            self.lookahead = self.iterator.next();
        }
        self.lookahead.is_some()
    }
}

impl<I: Iterator> FusedIterator for Source<I> {}

// =============================================================================
// Map
// =============================================================================

/// Stream returned by [`map`].
pub struct Map<S, F> {
    source: S,
    function: F,
}

/// Lazily applies `function` to each element of `source`.
///
/// Nothing is buffered: `has_next` delegates to `source` and `next` applies
/// `function` to the element `source` yields.
#[must_use]
pub const fn map<S, B, F>(function: F, source: S) -> Map<S, F>
where
    S: Stream,
    F: FnMut(S::Item) -> B,
{
    Map { source, function }
}

impl<S, B, F> Iterator for Map<S, F>
where
    S: Stream,
    F: FnMut(S::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.source.next().map(&mut self.function)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<S, B, F> Stream for Map<S, F>
where
    S: Stream,
    F: FnMut(S::Item) -> B,
{
    #[inline]
    fn has_next(&mut self) -> bool {
        self.source.has_next()
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Stream returned by [`filter`].
pub struct Filter<S: Iterator, P> {
    source: S,
    predicate: P,
    pending: Option<S::Item>,
}

/// Lazily keeps the elements of `source` accepted by `predicate`.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::stream::{self, Stream};
///
/// let mut empty = stream::filter(|n: &i32| *n > 10, stream::from([1, 2, 3]));
/// assert!(!empty.has_next());
/// assert_eq!(empty.next(), None);
/// ```
#[must_use]
pub const fn filter<S, P>(predicate: P, source: S) -> Filter<S, P>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    Filter {
        source,
        predicate,
        pending: None,
    }
}

impl<S, P> Iterator for Filter<S, P>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.has_next() {
            self.pending.take()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = usize::from(self.pending.is_some());
        let (_, upper) = self.source.size_hint();
        (buffered, upper.and_then(|upper| upper.checked_add(buffered)))
    }
}

impl<S, P> Stream for Filter<S, P>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    fn has_next(&mut self) -> bool {
        if self.pending.is_some() {
            return true;
        }
        for element in self.source.by_ref() {
            if (self.predicate)(&element) {
                self.pending = Some(element);
                return true;
            }
        }
        false
    }
}

// =============================================================================
// Choose
// =============================================================================

/// Stream returned by [`choose`].
pub struct Choose<S, F, B> {
    source: S,
    function: F,
    pending: Option<B>,
}

/// Lazily applies `function` to each element and keeps the `Just` results,
/// unwrapped.
///
/// # Examples
///
/// ```rust
/// use functional_utils::control::Maybe;
/// use functional_utils::sequence::stream;
///
/// let halves = stream::choose(
///     |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() },
///     stream::from(1..=6),
/// );
/// assert_eq!(halves.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[must_use]
pub const fn choose<S, B, F>(function: F, source: S) -> Choose<S, F, B>
where
    S: Stream,
    F: FnMut(S::Item) -> Maybe<B>,
{
    Choose {
        source,
        function,
        pending: None,
    }
}

impl<S, B, F> Iterator for Choose<S, F, B>
where
    S: Stream,
    F: FnMut(S::Item) -> Maybe<B>,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        if self.has_next() {
            self.pending.take()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = usize::from(self.pending.is_some());
        let (_, upper) = self.source.size_hint();
        (buffered, upper.and_then(|upper| upper.checked_add(buffered)))
    }
}

impl<S, B, F> Stream for Choose<S, F, B>
where
    S: Stream,
    F: FnMut(S::Item) -> Maybe<B>,
{
    fn has_next(&mut self) -> bool {
        if self.pending.is_some() {
            return true;
        }
        for element in self.source.by_ref() {
            if let Maybe::Just(chosen) = (self.function)(element) {
                self.pending = Some(chosen);
                return true;
            }
        }
        false
    }
}

// =============================================================================
// Collect
// =============================================================================

/// Stream returned by [`collect`].
pub struct Collect<S, F, U: IntoIterator> {
    source: S,
    function: F,
    inner: Option<U::IntoIter>,
    pending: Option<U::Item>,
}

/// Lazily maps each element to a sequence and flattens the results.
///
/// The next element of `source` is pulled only once the current inner
/// sequence is exhausted; empty inner sequences are skipped.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::stream::{self, Stream};
///
/// let mut repeated = stream::collect(|n: usize| vec![n; n], stream::from([0, 2, 0, 1]));
/// assert!(repeated.has_next());
/// assert_eq!(repeated.collect::<Vec<_>>(), vec![2, 2, 1]);
/// ```
#[must_use]
pub const fn collect<S, U, F>(function: F, source: S) -> Collect<S, F, U>
where
    S: Stream,
    U: IntoIterator,
    F: FnMut(S::Item) -> U,
{
    Collect {
        source,
        function,
        inner: None,
        pending: None,
    }
}

impl<S, U, F> Iterator for Collect<S, F, U>
where
    S: Stream,
    U: IntoIterator,
    F: FnMut(S::Item) -> U,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<U::Item> {
        if self.has_next() {
            self.pending.take()
        } else {
            None
        }
    }
}

impl<S, U, F> Stream for Collect<S, F, U>
where
    S: Stream,
    U: IntoIterator,
    F: FnMut(S::Item) -> U,
{
    fn has_next(&mut self) -> bool {
        if self.pending.is_some() {
            return true;
        }
        loop {
            if let Some(element) = self.inner.as_mut().and_then(Iterator::next) {
                self.pending = Some(element);
                return true;
            }
            match self.source.next() {
                Some(outer) => self.inner = Some((self.function)(outer).into_iter()),
                None => {
                    self.inner = None;
                    return false;
                }
            }
        }
    }
}

// =============================================================================
// Concat
// =============================================================================

/// Stream returned by [`concat`].
pub struct Concat<A, B> {
    first: A,
    second: B,
}

/// Yields every element of `first`, then every element of `second`.
///
/// `second` is not touched until `first` is exhausted.
#[must_use]
pub const fn concat<A, B>(first: A, second: B) -> Concat<A, B>
where
    A: Stream,
    B: Stream<Item = A::Item>,
{
    Concat { first, second }
}

impl<A, B> Iterator for Concat<A, B>
where
    A: Stream,
    B: Stream<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if self.first.has_next() {
            self.first.next()
        } else {
            self.second.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (first_lower, first_upper) = self.first.size_hint();
        let (second_lower, second_upper) = self.second.size_hint();
        let upper = match (first_upper, second_upper) {
            (Some(first), Some(second)) => first.checked_add(second),
            _ => None,
        };
        (first_lower.saturating_add(second_lower), upper)
    }
}

impl<A, B> Stream for Concat<A, B>
where
    A: Stream,
    B: Stream<Item = A::Item>,
{
    fn has_next(&mut self) -> bool {
        self.first.has_next() || self.second.has_next()
    }
}

// =============================================================================
// Skip
// =============================================================================

/// Stream returned by [`skip`].
pub struct Skip<S> {
    source: S,
    remaining: Option<usize>,
}

impl<S: Stream> Skip<S> {
    fn skip_once(&mut self) {
        if let Some(count) = self.remaining.take() {
            for _ in 0..count {
                if self.source.next().is_none() {
                    break;
                }
            }
        }
    }
}

/// Drops the first `count` elements of `source` (or all of them, if there
/// are fewer).
///
/// The skipping happens exactly once, on the first `has_next` or `next`.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::stream;
///
/// assert_eq!(stream::skip(2, stream::from(1..=4)).collect::<Vec<_>>(), vec![3, 4]);
/// assert_eq!(stream::skip(9, stream::from(1..=4)).count(), 0);
/// ```
#[must_use]
pub const fn skip<S: Stream>(count: usize, source: S) -> Skip<S> {
    Skip {
        source,
        remaining: Some(count),
    }
}

impl<S: Stream> Iterator for Skip<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.skip_once();
        self.source.next()
    }
}

impl<S: Stream> Stream for Skip<S> {
    fn has_next(&mut self) -> bool {
        self.skip_once();
        self.source.has_next()
    }
}

// =============================================================================
// Generators
// =============================================================================

/// Stream returned by [`init`].
pub struct Init<F> {
    function: F,
    position: usize,
    count: usize,
}

/// Lazily generates `function(1), function(2), ..., function(count)`.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if `count` is zero.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::stream;
///
/// let squares = stream::init(|i| i * i, 4).unwrap();
/// assert_eq!(squares.collect::<Vec<_>>(), vec![1, 4, 9, 16]);
/// assert!(stream::init(|i| i, 0).is_err());
/// ```
pub fn init<T, F>(function: F, count: usize) -> Result<Init<F>, SequenceError>
where
    F: FnMut(usize) -> T,
{
    if count == 0 {
        return Err(SequenceError::zero_count("stream::init"));
    }
    Ok(Init {
        function,
        position: 0,
        count,
    })
}

impl<T, F: FnMut(usize) -> T> Iterator for Init<F> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.position < self.count {
            self.position += 1;
            Some((self.function)(self.position))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.position;
        (remaining, Some(remaining))
    }
}

impl<T, F: FnMut(usize) -> T> Stream for Init<F> {
    #[inline]
    fn has_next(&mut self) -> bool {
        self.position < self.count
    }
}

impl<T, F: FnMut(usize) -> T> ExactSizeIterator for Init<F> {}

impl<T, F: FnMut(usize) -> T> FusedIterator for Init<F> {}

/// Stream returned by [`init_unbounded`].
pub struct InitUnbounded<F> {
    function: F,
    position: usize,
}

/// Generates `function(1), function(2), ...` without end.
///
/// # Examples
///
/// ```rust
/// use functional_utils::sequence::stream::{self, Stream};
///
/// let mut odds = stream::init_unbounded(|i| 2 * i - 1);
/// assert!(odds.has_next());
/// assert_eq!(odds.take(3).collect::<Vec<_>>(), vec![1, 3, 5]);
/// ```
#[must_use]
pub const fn init_unbounded<T, F>(function: F) -> InitUnbounded<F>
where
    F: FnMut(usize) -> T,
{
    InitUnbounded {
        function,
        position: 0,
    }
}

impl<T, F: FnMut(usize) -> T> Iterator for InitUnbounded<F> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.position += 1;
        Some((self.function)(self.position))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T, F: FnMut(usize) -> T> Stream for InitUnbounded<F> {
    #[inline]
    fn has_next(&mut self) -> bool {
        true
    }
}

static_assertions::assert_not_impl_any!(Source<std::vec::IntoIter<i32>>: Clone);
static_assertions::assert_not_impl_any!(Map<Source<std::ops::Range<i32>>, fn(i32) -> i32>: Clone);
static_assertions::assert_not_impl_any!(Filter<Source<std::ops::Range<i32>>, fn(&i32) -> bool>: Clone);
static_assertions::assert_not_impl_any!(Skip<Source<std::ops::Range<i32>>>: Clone);
static_assertions::assert_not_impl_any!(Init<fn(usize) -> usize>: Clone);
static_assertions::assert_not_impl_any!(InitUnbounded<fn(usize) -> usize>: Clone);
static_assertions::assert_not_impl_any!(Choose<Source<std::ops::Range<i32>>, fn(i32) -> Maybe<i32>, i32>: Clone);
static_assertions::assert_not_impl_any!(Collect<Source<std::ops::Range<i32>>, fn(i32) -> Vec<i32>, Vec<i32>>: Clone);
static_assertions::assert_not_impl_any!(Concat<Source<std::ops::Range<i32>>, Source<std::ops::Range<i32>>>: Clone);
