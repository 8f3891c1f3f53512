//! Deferred computations that capture their failures.
//!
//! An [`Attempt<T>`] wraps a computation that may fail, either by returning an
//! error or by panicking. The computation runs at most once, on the first
//! query ([`Attempt::is_success`], [`Attempt::is_failure`], [`Attempt::read`]
//! or [`Attempt::into_result`]); its outcome is memoized.
//!
//! Failures are stored as a [`Failure`] value rather than propagated, so a
//! chain of [`Attempt::bind`] calls stops at the first failure and hands the
//! same `Failure` through to the end.
//!
//! Panics are caught with [`std::panic::catch_unwind`], which runs after the
//! panic hook. The default hook therefore still prints the message of a
//! captured panic to stderr. Failures that are part of normal control flow
//! belong in [`Attempt::of_result`], which records an `Err` without
//! unwinding.
//!
//! # Examples
//!
//! ```rust
//! use functional_utils::control::Attempt;
//!
//! let parsed = Attempt::of_result(|| "42".parse::<i32>())
//!     .bind(|n| Attempt::of(move || n * 2));
//! assert_eq!(parsed.into_result().ok(), Some(84));
//!
//! let broken = Attempt::of_result(|| "forty-two".parse::<i32>())
//!     .bind(|n| Attempt::of(move || n * 2));
//! assert!(broken.is_failure());
//! ```

use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::{Ref, RefCell};
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

// =============================================================================
// Failure
// =============================================================================

/// The captured failure of an [`Attempt`].
///
/// Holds a message, the originating error when there is one, and a backtrace
/// captured where the failure was recorded. Cloning is cheap: clones share
/// the same underlying record, which [`Failure::is_same`] can detect.
#[derive(Clone)]
pub struct Failure {
    inner: Arc<FailureInner>,
}

struct FailureInner {
    message: String,
    source: Option<Box<dyn Error + Send + Sync>>,
    panicked: bool,
    backtrace: Backtrace,
}

impl Failure {
    fn build(message: String, source: Option<Box<dyn Error + Send + Sync>>, panicked: bool) -> Self {
        Self {
            inner: Arc::new(FailureInner {
                message,
                source,
                panicked,
                backtrace: Backtrace::capture(),
            }),
        }
    }

    /// Creates a failure carrying only a message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_utils::control::Failure;
    ///
    /// let failure = Failure::from_message("disk full");
    /// assert_eq!(failure.message(), "disk full");
    /// ```
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::build(message.into(), None, false)
    }

    /// Creates a failure wrapping `error`, which becomes its
    /// [`source`](Error::source).
    #[must_use]
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::build(error.to_string(), Some(Box::new(error)), false)
    }

    fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panicked with a non-string payload".to_owned());
        Self::build(message, None, true)
    }

    /// Returns the failure message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// Returns the backtrace captured when the failure was recorded.
    ///
    /// It is only populated when backtraces are enabled through
    /// `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE`.
    #[inline]
    #[must_use]
    pub fn backtrace(&self) -> &Backtrace {
        &self.inner.backtrace
    }

    /// Returns `true` if the failure was caused by a panic.
    #[inline]
    #[must_use]
    pub fn is_panic(&self) -> bool {
        self.inner.panicked
    }

    /// Returns `true` if both values share the same underlying failure record.
    #[inline]
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Failure")
            .field("message", &self.inner.message)
            .field("panicked", &self.inner.panicked)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.inner.message)
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner
            .source
            .as_deref()
            .map(|source| source as &(dyn Error + 'static))
    }
}

// =============================================================================
// Attempt
// =============================================================================

/// A value whose type is only known to the step that consumes it.
type Erased = Box<dyn Any>;

type Source = Box<dyn FnOnce() -> Result<Erased, Failure>>;

type Step = Box<dyn FnOnce(Erased) -> Result<Erased, Failure>>;

/// A pending computation followed by the transformations queued by
/// [`Attempt::map`].
///
/// The steps are stored as data and run one after another in a loop, so a
/// long chain of maps uses constant stack space when forced or dropped.
struct Pipeline {
    source: Source,
    steps: Vec<Step>,
}

impl Pipeline {
    const fn new(source: Source) -> Self {
        Self {
            source,
            steps: Vec::new(),
        }
    }

    fn settled<T: 'static>(value: T) -> Self {
        Self::new(Box::new(move || Ok::<Erased, Failure>(Box::new(value))))
    }

    fn run(self) -> Result<Erased, Failure> {
        let mut value = (self.source)()?;
        for step in self.steps {
            value = step(value)?;
        }
        Ok(value)
    }
}

fn downcast<T: 'static>(value: Erased) -> Result<T, Failure> {
    value
        .downcast::<T>()
        .map(|value| *value)
        .map_err(|_| Failure::from_message("attempt pipeline produced a value of an unexpected type"))
}

enum AttemptState<T> {
    Pending(Pipeline),
    Running,
    Succeeded(T),
    Failed(Failure),
}

/// A deferred computation that records success or failure.
///
/// States move from pending to either succeeded or failed exactly once.
/// `Attempt` is neither `Clone` nor `Sync`: the pending computation is an
/// owned `FnOnce` and the memoized state lives in a [`RefCell`].
///
/// # Examples
///
/// ```rust
/// use functional_utils::control::Attempt;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let runs = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&runs);
/// let attempt = Attempt::of(move || {
///     counter.set(counter.get() + 1);
///     7
/// });
/// assert_eq!(runs.get(), 0);
/// assert!(attempt.is_success());
/// assert_eq!(*attempt.read().unwrap(), 7);
/// assert_eq!(runs.get(), 1);
/// ```
pub struct Attempt<T> {
    state: RefCell<AttemptState<T>>,
}

fn capture<T>(computation: impl FnOnce() -> Result<T, Failure>) -> Result<T, Failure> {
    panic::catch_unwind(AssertUnwindSafe(computation))
        .unwrap_or_else(|payload| Err(Failure::from_panic(payload.as_ref())))
}

fn reentrant_failure() -> Failure {
    Failure::from_message("attempt was read while its own computation was running")
}

impl<T> Attempt<T> {
    /// Creates an attempt that has already succeeded with `value`.
    #[inline]
    #[must_use]
    pub const fn succeeded(value: T) -> Self {
        Self {
            state: RefCell::new(AttemptState::Succeeded(value)),
        }
    }

    /// Creates an attempt that has already failed with `failure`.
    #[inline]
    #[must_use]
    pub const fn failed(failure: Failure) -> Self {
        Self {
            state: RefCell::new(AttemptState::Failed(failure)),
        }
    }

    const fn pending(pipeline: Pipeline) -> Self {
        Self {
            state: RefCell::new(AttemptState::Pending(pipeline)),
        }
    }
}

impl<T: 'static> Attempt<T> {
    fn deferred<F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, Failure> + 'static,
    {
        Self::pending(Pipeline::new(Box::new(move || {
            computation().map(|value| Box::new(value) as Erased)
        })))
    }

    /// Defers `supplier`; a panic raised by it is captured as a [`Failure`].
    ///
    /// Capturing does not silence the process-wide panic hook: unless the
    /// hook was replaced with [`std::panic::set_hook`], the panic message is
    /// still printed to stderr when the attempt is forced. Use
    /// [`Attempt::of_result`] for failures that are expected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_utils::control::Attempt;
    ///
    /// let divisor = std::hint::black_box(0);
    /// let attempt = Attempt::of(move || 10 / divisor);
    /// assert!(attempt.is_failure());
    /// ```
    #[must_use]
    pub fn of<F>(supplier: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        Self::deferred(move || Ok(supplier()))
    }

    /// Defers a fallible `supplier`; both `Err` and panics become failures.
    ///
    /// The error is kept as the failure's [`source`](Error::source). An
    /// `Err` is recorded without unwinding, so nothing reaches the panic hook.
    #[must_use]
    pub fn of_result<E, F>(supplier: F) -> Self
    where
        E: Error + Send + Sync + 'static,
        F: FnOnce() -> Result<T, E> + 'static,
    {
        Self::deferred(move || supplier().map_err(Failure::from_error))
    }

    /// Runs the pending computation, if any, and memoizes its outcome.
    fn force(&self) {
        let pipeline = {
            let mut state = self.state.borrow_mut();
            match std::mem::replace(&mut *state, AttemptState::Running) {
                AttemptState::Pending(pipeline) => pipeline,
                settled => {
                    *state = settled;
                    return;
                }
            }
        };
        let outcome = capture(move || pipeline.run()).and_then(downcast::<T>);
        *self.state.borrow_mut() = match outcome {
            Ok(value) => AttemptState::Succeeded(value),
            Err(failure) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    failure = %failure,
                    panicked = failure.is_panic(),
                    "attempt captured a failure"
                );
                AttemptState::Failed(failure)
            }
        };
    }

    /// Forces the computation and returns `true` if it failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Forces the computation and returns `true` if it succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.force();
        matches!(&*self.state.borrow(), AttemptState::Succeeded(_))
    }

    /// Forces the computation and returns its failure, if it failed.
    #[must_use]
    pub fn failure(&self) -> Option<Failure> {
        self.force();
        match &*self.state.borrow() {
            AttemptState::Succeeded(_) => None,
            AttemptState::Failed(failure) => Some(failure.clone()),
            AttemptState::Pending(_) | AttemptState::Running => Some(reentrant_failure()),
        }
    }

    /// Forces the computation and borrows the successful value.
    ///
    /// # Errors
    ///
    /// Returns the captured [`Failure`] if the computation failed.
    pub fn read(&self) -> Result<Ref<'_, T>, Failure> {
        self.force();
        Ref::filter_map(self.state.borrow(), |state| match state {
            AttemptState::Succeeded(value) => Some(value),
            _ => None,
        })
        .map_err(|state| match &*state {
            AttemptState::Failed(failure) => failure.clone(),
            _ => reentrant_failure(),
        })
    }

    /// Forces the computation and returns its outcome by value.
    ///
    /// # Errors
    ///
    /// Returns the captured [`Failure`] if the computation failed.
    pub fn into_result(self) -> Result<T, Failure> {
        self.force();
        match self.state.into_inner() {
            AttemptState::Succeeded(value) => Ok(value),
            AttemptState::Failed(failure) => Err(failure),
            AttemptState::Pending(_) | AttemptState::Running => Err(reentrant_failure()),
        }
    }

    /// Monadic bind.
    ///
    /// A failed attempt short-circuits to an attempt holding the same
    /// [`Failure`] and `function` is never called. Otherwise `function` is
    /// applied to the value immediately; a panic inside it becomes a new
    /// failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_utils::control::Attempt;
    ///
    /// let next = Attempt::of(|| 5).bind(|x| Attempt::of(move || x + 1));
    /// assert_eq!(*next.read().unwrap(), 6);
    /// ```
    #[must_use]
    pub fn bind<U, F>(self, function: F) -> Attempt<U>
    where
        F: FnOnce(T) -> Attempt<U>,
    {
        match self.into_result() {
            Ok(value) => panic::catch_unwind(AssertUnwindSafe(|| function(value)))
                .unwrap_or_else(|payload| Attempt::failed(Failure::from_panic(payload.as_ref()))),
            Err(failure) => Attempt::failed(failure),
        }
    }

    /// Lazily transforms the successful value.
    ///
    /// Nothing runs until the returned attempt is queried. Each call appends
    /// one step to the pending pipeline instead of wrapping the previous
    /// attempt, so arbitrarily long chains are forced without recursion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_utils::control::Attempt;
    ///
    /// let counted = (0..100_000).fold(Attempt::succeeded(0_u64), |attempt, _| attempt.map(|n| n + 1));
    /// assert_eq!(counted.into_result().ok(), Some(100_000));
    /// ```
    #[must_use]
    pub fn map<U, F>(self, function: F) -> Attempt<U>
    where
        U: 'static,
        F: FnOnce(T) -> U + 'static,
    {
        let mut pipeline = match self.state.into_inner() {
            AttemptState::Pending(pipeline) => pipeline,
            AttemptState::Succeeded(value) => Pipeline::settled(value),
            AttemptState::Failed(failure) => return Attempt::failed(failure),
            AttemptState::Running => return Attempt::failed(reentrant_failure()),
        };
        pipeline.steps.push(Box::new(move |value: Erased| {
            downcast::<T>(value).map(|value| Box::new(function(value)) as Erased)
        }));
        Attempt::pending(pipeline)
    }

    /// Lifts a binary function over two attempts.
    ///
    /// If `first` failed its failure is returned and `second` is left
    /// untouched; otherwise if `second` failed its failure is returned. When
    /// both succeeded, the result is a new pending attempt that applies
    /// `function` when it is queried.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_utils::control::{Attempt, Failure};
    ///
    /// let sum = Attempt::lift2(|a: i32, b: i32| a + b, Attempt::of(|| 1), Attempt::of(|| 2));
    /// assert_eq!(sum.into_result().ok(), Some(3));
    ///
    /// let failed: Attempt<i32> = Attempt::failed(Failure::from_message("no"));
    /// let sum = Attempt::lift2(|a: i32, b: i32| a + b, Attempt::of(|| 1), failed);
    /// assert_eq!(sum.into_result().unwrap_err().message(), "no");
    /// ```
    #[must_use]
    pub fn lift2<A, B, F>(function: F, first: Attempt<A>, second: Attempt<B>) -> Self
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A, B) -> T + 'static,
    {
        let first = match first.into_result() {
            Ok(value) => value,
            Err(failure) => return Self::failed(failure),
        };
        let second = match second.into_result() {
            Ok(value) => value,
            Err(failure) => return Self::failed(failure),
        };
        Self::deferred(move || Ok(function(first, second)))
    }
}

impl<T: fmt::Debug> fmt::Debug for Attempt<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(state) = self.state.try_borrow() else {
            return formatter.write_str("Attempt(<borrowed>)");
        };
        match &*state {
            AttemptState::Pending(_) => formatter.write_str("Attempt(<pending>)"),
            AttemptState::Running => formatter.write_str("Attempt(<running>)"),
            AttemptState::Succeeded(value) => {
                formatter.debug_tuple("Attempt::Succeeded").field(value).finish()
            }
            AttemptState::Failed(failure) => {
                formatter.debug_tuple("Attempt::Failed").field(failure).finish()
            }
        }
    }
}

impl<T> From<Result<T, Failure>> for Attempt<T> {
    fn from(result: Result<T, Failure>) -> Self {
        match result {
            Ok(value) => Self::succeeded(value),
            Err(failure) => Self::failed(failure),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Attempt<T> {
    type Inner = T;
    type WithType<B> = Attempt<B>;
}

impl<T: 'static> Functor for Attempt<T> {
    fn fmap<B, F>(self, function: F) -> Attempt<B>
    where
        F: FnOnce(T) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<T: 'static> Applicative for Attempt<T> {
    fn pure<B>(value: B) -> Attempt<B> {
        Attempt::succeeded(value)
    }

    fn map2<B, C, F>(self, other: Attempt<B>, function: F) -> Attempt<C>
    where
        F: FnOnce(T, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Attempt::lift2(function, self, other)
    }
}

impl<T: 'static> Monad for Attempt<T> {
    fn flat_map<B, F>(self, function: F) -> Attempt<B>
    where
        F: FnOnce(T) -> Attempt<B>,
    {
        self.bind(function)
    }
}

static_assertions::assert_not_impl_any!(Attempt<i32>: Clone, Sync);
static_assertions::assert_impl_all!(Failure: Clone, Send, Sync, Error);
