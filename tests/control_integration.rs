#![cfg(feature = "control")]
//! Integration tests for the control structures working together.
//!
//! Tests cover:
//! - Pair and Triplet as plain records
//! - switch / Case ordering and defaults
//! - if_then_else
//! - Maybe and Attempt feeding each other

use functional_utils::control::{Attempt, Case, Maybe, Pair, Triplet, if_then_else, switch};
use rstest::rstest;
use std::cell::RefCell;
use std::collections::BTreeSet;

// =============================================================================
// Pair / Triplet
// =============================================================================

#[rstest]
fn pairs_order_lexicographically() {
    let ordered: BTreeSet<_> = [Pair::new(2, 'a'), Pair::new(1, 'z'), Pair::new(1, 'b')]
        .into_iter()
        .collect();
    assert_eq!(
        ordered.into_iter().collect::<Vec<_>>(),
        vec![Pair::new(1, 'b'), Pair::new(1, 'z'), Pair::new(2, 'a')]
    );
}

#[rstest]
fn triplet_fields_are_public() {
    let Triplet {
        first,
        second,
        third,
    } = Triplet::new("x", 2, 3.5);
    assert_eq!((first, second, third), ("x", 2, 3.5));
}

#[rstest]
fn default_pair_uses_component_defaults() {
    assert_eq!(Pair::<i32, String>::default(), Pair::new(0, String::new()));
}

// =============================================================================
// switch
// =============================================================================

fn grade(score: u32) -> &'static str {
    switch(
        score,
        [
            Case::new(|score: &u32| *score >= 90, |_| "A"),
            Case::new(|score: &u32| *score >= 75, |_| "B"),
            Case::new(|score: &u32| *score >= 50, |_| "C"),
        ],
        |_| "F",
    )
}

#[rstest]
#[case(95, "A")]
#[case(90, "A")]
#[case(80, "B")]
#[case(50, "C")]
#[case(10, "F")]
fn first_matching_case_wins(#[case] score: u32, #[case] expected: &str) {
    assert_eq!(grade(score), expected);
}

#[rstest]
fn predicates_are_evaluated_in_order_until_a_match() {
    let log = RefCell::new(Vec::new());
    let result = switch(
        3,
        (1..=5).map(|bound| {
            let log = &log;
            Case::new(
                move |value: &i32| {
                    log.borrow_mut().push(bound);
                    *value <= bound
                },
                move |value| value * bound,
            )
        }),
        |value| value,
    );
    assert_eq!(result, 9);
    assert_eq!(*log.borrow(), vec![1, 2, 3]);
}

#[rstest]
fn default_receives_the_input() {
    let cases: Vec<Case<'_, String, usize>> = vec![Case::new(|text: &String| text.is_empty(), |_| 0)];
    assert_eq!(switch(String::from("four"), cases, |text| text.len() * 10), 40);
}

#[rstest]
fn if_then_else_picks_one_branch() {
    let sign = |n: i32| if_then_else(n, |n: &i32| *n < 0, |n| -n, |n| n);
    assert_eq!(sign(-4), 4);
    assert_eq!(sign(4), 4);
}

// =============================================================================
// Maybe and Attempt together
// =============================================================================

#[rstest]
fn attempt_outcome_becomes_maybe() {
    let parse = |text: &'static str| Attempt::of_result(move || text.parse::<i32>());
    let to_maybe = |attempt: Attempt<i32>| Maybe::from(attempt.into_result().ok());

    assert_eq!(to_maybe(parse("7")), Maybe::some(7));
    assert_eq!(to_maybe(parse("seven")), Maybe::none());
}

#[rstest]
fn maybe_value_error_is_captured_by_attempt() {
    let attempt = Attempt::of_result(|| Maybe::<i32>::none().into_value());
    let failure = attempt.into_result().unwrap_err();
    assert_eq!(failure.message(), "attempted to read the value of an empty Maybe");
}
