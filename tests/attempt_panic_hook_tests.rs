#![cfg(feature = "control")]
//! Interaction between Attempt and the process-wide panic hook.
//!
//! This binary holds a single test because it replaces the global hook.

use functional_utils::control::Attempt;
use rstest::rstest;
use std::panic;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[rstest]
fn only_captured_panics_reach_the_panic_hook() {
    let hook_calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hook_calls);
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    let expected: Attempt<i32> = Attempt::of_result(|| "seven".parse::<i32>());
    let expected_failed = expected.is_failure();
    let calls_after_result = hook_calls.load(Ordering::SeqCst);

    let panicked: Attempt<i32> = Attempt::of(|| panic!("unexpected"));
    let panicked_failure = panicked.failure();
    let calls_after_panic = hook_calls.load(Ordering::SeqCst);

    panic::set_hook(previous);

    assert!(expected_failed);
    assert_eq!(calls_after_result, 0);
    assert!(panicked_failure.is_some_and(|failure| failure.is_panic()));
    assert_eq!(calls_after_panic, 1);
}
