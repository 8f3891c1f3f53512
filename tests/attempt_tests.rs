#![cfg(feature = "control")]
//! Unit tests for Attempt<T> and Failure.
//!
//! Tests cover:
//! - Deferred, memoized evaluation
//! - Capturing panics and error results
//! - bind and lift2 failure propagation
//! - Long map chains
//! - Type class integration

use functional_utils::control::{Attempt, Failure};
use functional_utils::typeclass::{Applicative, Functor, Monad};
use rstest::rstest;
use std::cell::Cell;
use std::error::Error;
use std::num::ParseIntError;
use std::rc::Rc;

fn divide(numerator: i32, denominator: i32) -> Attempt<i32> {
    Attempt::of(move || numerator / denominator)
}

// =============================================================================
// Evaluation
// =============================================================================

#[rstest]
fn nothing_runs_before_the_first_query() {
    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);
    let attempt = Attempt::of(move || flag.set(true));
    assert!(!ran.get());
    assert!(attempt.is_success());
    assert!(ran.get());
}

#[rstest]
fn read_returns_value_for_success() {
    let attempt = Attempt::of(|| String::from("done"));
    assert_eq!(attempt.read().unwrap().as_str(), "done");
    assert_eq!(attempt.read().unwrap().len(), 4);
}

#[rstest]
fn read_returns_failure_for_division_by_zero() {
    let attempt = divide(1, std::hint::black_box(0));
    assert!(attempt.is_failure());
    let failure = attempt.read().unwrap_err();
    assert!(failure.is_panic());
    assert!(failure.message().contains("divide by zero"));
}

#[rstest]
fn failure_is_memoized_and_shared() {
    let attempt = divide(1, std::hint::black_box(0));
    let first = attempt.read().unwrap_err();
    let second = attempt.read().unwrap_err();
    assert!(first.is_same(&second));
}

#[rstest]
fn of_result_turns_err_into_failure_with_source() {
    let attempt = Attempt::of_result(|| "twelve".parse::<i32>());
    let failure = attempt.into_result().unwrap_err();
    assert!(!failure.is_panic());
    assert!(failure.source().is_some_and(|source| source.is::<ParseIntError>()));
}

#[rstest]
fn of_result_ok_is_success() {
    let attempt = Attempt::of_result(|| "12".parse::<i32>());
    assert_eq!(attempt.into_result().ok(), Some(12));
}

#[rstest]
fn succeeded_and_failed_are_already_settled() {
    assert!(Attempt::succeeded(1).is_success());
    let failed: Attempt<i32> = Attempt::failed(Failure::from_message("settled"));
    assert_eq!(failed.failure().map(|failure| failure.to_string()), Some("settled".to_string()));
}

#[rstest]
fn from_result_builds_settled_attempt() {
    let attempt: Attempt<u8> = Err(Failure::from_message("nope")).into();
    assert!(attempt.is_failure());
}

// =============================================================================
// bind
// =============================================================================

#[rstest]
fn bind_feeds_the_value_forward() {
    let next = Attempt::of(|| 5).bind(|x| Attempt::of(move || x + 1));
    assert_eq!(*next.read().unwrap(), 6);
}

#[rstest]
fn bind_after_failure_never_calls_function() {
    let calls = Cell::new(0);
    let chained = divide(1, std::hint::black_box(0))
        .bind(|n| {
            calls.set(calls.get() + 1);
            Attempt::succeeded(n)
        })
        .bind(|n| {
            calls.set(calls.get() + 1);
            Attempt::succeeded(n)
        });
    assert!(chained.is_failure());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn bind_propagates_the_original_failure() {
    let original = Failure::from_message("root cause");
    let chained = Attempt::<i32>::failed(original.clone())
        .bind(|n| Attempt::succeeded(n + 1))
        .bind(|n| Attempt::succeeded(n * 2));
    assert!(chained.into_result().unwrap_err().is_same(&original));
}

#[rstest]
fn panic_inside_bind_becomes_failure() {
    let chained = Attempt::succeeded(vec![1, 2]).bind(|values| {
        let index = std::hint::black_box(5);
        Attempt::succeeded(values[index])
    });
    let failure = chained.read().unwrap_err();
    assert!(failure.is_panic());
    assert!(failure.message().contains("index out of bounds"));
}

// =============================================================================
// lift2
// =============================================================================

#[rstest]
fn lift2_of_successes_is_deferred() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let product = Attempt::lift2(
        move |a: i32, b: i32| {
            counter.set(counter.get() + 1);
            a * b
        },
        divide(12, 3),
        divide(10, 5),
    );
    assert_eq!(calls.get(), 0);
    assert_eq!(product.into_result().unwrap(), 8);
    assert_eq!(calls.get(), 1);
}

#[rstest]
#[case(true, false, "first")]
#[case(false, true, "second")]
#[case(true, true, "first")]
fn lift2_propagates_first_failure_found(
    #[case] first_fails: bool,
    #[case] second_fails: bool,
    #[case] expected: &str,
) {
    let make = |fails: bool, name: &'static str| -> Attempt<i32> {
        if fails { Attempt::failed(Failure::from_message(name)) } else { Attempt::succeeded(1) }
    };
    let combined = Attempt::lift2(
        |a: i32, b: i32| a + b,
        make(first_fails, "first"),
        make(second_fails, "second"),
    );
    assert_eq!(combined.into_result().unwrap_err().message(), expected);
}

#[rstest]
fn lift2_does_not_force_second_after_first_failed() {
    let forced = Rc::new(Cell::new(0));
    let counter = Rc::clone(&forced);
    let second = Attempt::of(move || {
        counter.set(counter.get() + 1);
        2
    });
    let first: Attempt<i32> = Attempt::of_result(|| "one".parse::<i32>());
    let combined = Attempt::lift2(|a: i32, b: i32| a + b, first, second);
    let failure = combined.into_result().unwrap_err();
    assert!(failure.source().unwrap().is::<ParseIntError>());
    assert_eq!(forced.get(), 0);
}

#[rstest]
fn lift2_captures_panic_in_function() {
    let combined = Attempt::lift2(
        |a: i32, b: i32| a / b,
        Attempt::succeeded(1),
        Attempt::succeeded(std::hint::black_box(0)),
    );
    assert!(combined.is_failure());
}

// =============================================================================
// Type Class Integration
// =============================================================================

#[rstest]
fn fmap_is_lazy_and_captures_panics() {
    let mapped = Attempt::succeeded(0).fmap(|n: i32| 10 / n);
    assert!(mapped.failure().is_some_and(|failure| failure.is_panic()));
}

#[rstest]
#[case(100_000)]
#[case(250_000)]
fn long_fmap_chains_evaluate_in_constant_stack(#[case] length: u64) {
    let mut attempt = Attempt::of(|| 0_u64);
    for _ in 0..length {
        attempt = attempt.fmap(|n| n + 1);
    }
    assert_eq!(attempt.into_result().unwrap(), length);
}

#[rstest]
fn long_map_chain_stops_at_captured_error() {
    let chained = (0..100_000)
        .fold(divide(1, std::hint::black_box(0)), |attempt, _| attempt.map(|n| n + 1));
    assert!(chained.failure().is_some_and(|failure| failure.is_panic()));
}

#[rstest]
fn pure_is_success() {
    assert_eq!(<Attempt<()>>::pure("x").into_result().ok(), Some("x"));
}

#[rstest]
fn flat_map_matches_bind() {
    let via_trait = Attempt::succeeded(2).flat_map(|n| Attempt::of(move || n * 21));
    assert_eq!(via_trait.into_result().unwrap(), 42);
}
