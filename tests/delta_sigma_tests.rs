// Copyright 2025 Cowboy AI, LLC.

//! Operator contracts and the concrete reference scenarios.

use pretty_assertions::assert_eq;
use test_case::test_case;

use cim_peano::{
    add, delta, delta_forced, from_int, is_even, is_zero, multiply, sigma, succ, value, zero,
    Branch, Either, Nat, Sum,
};

#[test]
fn delta_of_zero_is_the_base_tag_wrapping_zero() {
    let classified = delta(from_int(0));
    assert_eq!(classified, Either::Left(from_int(0)));
    assert_eq!(Branch::of(&classified), Branch::Base);
}

#[test]
fn delta_of_a_successor_is_the_inductive_tag_wrapping_it() {
    let classified = delta(from_int(1));
    assert_eq!(classified, Either::Right(from_int(1)));
    assert_eq!(Branch::of(&classified), Branch::Inductive);
}

#[test_case(0; "zero")]
#[test_case(1; "one")]
#[test_case(5; "five")]
fn forced_delta_is_inductive_regardless_of_shape(k: i64) {
    let classified = delta_forced(from_int(k));
    assert_eq!(Branch::of(&classified), Branch::Inductive);
    assert_eq!(classified.right(), Some(&from_int(k)));
}

#[test]
fn delta_never_mutates_its_operand() {
    let n = from_int(4);
    let classified: Sum<&Nat> = delta(&n);
    assert_eq!(classified.right(), Some(&&n));
    assert_eq!(n, from_int(4));
}

#[test]
fn sigma_applies_its_operation_once_in_argument_order() {
    let mut applications: Vec<(u64, u64)> = Vec::new();
    let combined = sigma((2u64, 5u64), |a, b| {
        applications.push((a, b));
        a + b
    });
    assert_eq!(combined, 7);
    assert_eq!(applications, vec![(2, 5)]);
}

#[test]
fn sigma_instantiated_with_succ_is_the_additive_step() {
    let stepped = sigma((from_int(3), zero()), |partial, _| succ(partial));
    assert_eq!(stepped, from_int(4));
}

#[test]
fn two_plus_three_is_structurally_five() {
    let result = add(&from_int(2), &from_int(3));
    assert_eq!(result, succ(succ(succ(succ(succ(zero()))))));
    assert_eq!(value(&result), 5);
}

#[test_case(0, 0, 0)]
#[test_case(0, 7, 7)]
#[test_case(7, 0, 7)]
#[test_case(2, 3, 5)]
#[test_case(13, 29, 42)]
fn addition_scenarios(a: i64, b: i64, expected: u64) {
    assert_eq!(value(&add(&from_int(a), &from_int(b))), expected);
}

#[test_case(2, 3, 6)]
#[test_case(3, 2, 6)]
#[test_case(0, 9, 0)]
#[test_case(9, 0, 0)]
#[test_case(1, 11, 11)]
#[test_case(6, 7, 42)]
fn multiplication_scenarios(a: i64, b: i64, expected: u64) {
    assert_eq!(value(&multiply(&from_int(a), &from_int(b))), expected);
}

#[test_case(0, true)]
#[test_case(1, false)]
#[test_case(4, false)]
fn is_zero_scenarios(k: i64, expected: bool) {
    assert_eq!(is_zero(&from_int(k)), expected);
}

#[test_case(0, true)]
#[test_case(1, false)]
#[test_case(2, true)]
#[test_case(3, false)]
#[test_case(4, true)]
fn is_even_scenarios(k: i64, expected: bool) {
    assert_eq!(is_even(&from_int(k)), expected);
}

#[test]
fn nested_classification_walks_the_chain() {
    // Δ applied to a successor's predecessor classifies the next layer,
    // the structural-analysis pattern of the reference demonstration.
    let two = from_int(2);
    let outer = delta(&two);
    let inner = outer
        .right()
        .and_then(|n| n.pred())
        .map(delta)
        .expect("two is a successor");
    assert_eq!(Branch::of(&inner), Branch::Inductive);
    let innermost = inner
        .right()
        .and_then(|n| n.pred())
        .map(delta)
        .expect("one is a successor");
    assert_eq!(Branch::of(&innermost), Branch::Base);
}
