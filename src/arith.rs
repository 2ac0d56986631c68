// Copyright 2025 Cowboy AI, LLC.

//! Arithmetic and predicates over `Nat`, decomposed into Δ and Σ acts.
//!
//! Each operation follows the Peano induction schema: Δ-classify the
//! stepped operand, return on the base branch, peel one successor and
//! Σ-combine on the inductive branch. The induction is driven by an
//! explicit accumulator loop rather than the call stack, so the
//! arithmetic layer never grows recursion depth with operand magnitude;
//! the accumulator passes through exactly the intermediate values the
//! naive recursion would produce while unwinding.
//!
//! All functions borrow their operands, return owned results, and cannot
//! fail for well-formed `Nat` inputs.

use crate::nat::{succ, Nat, ZERO};
use crate::operators::{delta, sigma};
use crate::sum::Either;

/// Addition: `a + Z = a`, `a + S(b) = S(a + b)`.
///
/// Per step, Δ classifies the remaining suffix of `b`; the inductive
/// branch peels one successor and applies the successor combination (the
/// Σ-act of this operation). The accumulator takes the values
/// `a+1, a+2, ..., a+b` in order.
///
/// # Examples
///
/// ```rust
/// use cim_peano::{add, from_int, value};
///
/// assert_eq!(value(&add(&from_int(2), &from_int(3))), 5);
/// ```
pub fn add(a: &Nat, b: &Nat) -> Nat {
    let mut acc = a.clone();
    let mut rest = b;
    loop {
        match delta(rest) {
            Either::Left(_) => return acc,
            Either::Right(step) => {
                // Unreachable fallback: a non-successor on the inductive
                // branch steps to Z, per the reference semantics.
                rest = step.pred().unwrap_or(&ZERO);
                acc = succ(acc);
            }
        }
    }
}

/// Multiplication: `a * Z = Z`, `a * S(b) = a + (a * b)`. Iterated
/// addition, with Σ instantiated with the arithmetic operation itself.
pub fn multiply(a: &Nat, b: &Nat) -> Nat {
    let mut acc = Nat::Zero;
    let mut rest = b;
    loop {
        match delta(rest) {
            Either::Left(_) => return acc,
            Either::Right(step) => {
                rest = step.pred().unwrap_or(&ZERO);
                acc = sigma((a.clone(), acc), |x, y| add(&x, &y));
            }
        }
    }
}

/// The predicate `n = 0`: a pure Δ-act, no recursion.
pub fn is_zero(n: &Nat) -> bool {
    delta(n).is_left()
}

/// Parity, by direct case-split on the constructors (not via Δ): zero is
/// even, one is odd, and `S(S(m))` has the parity of `m`.
pub fn is_even(n: &Nat) -> bool {
    let mut rest = n;
    loop {
        match rest {
            Nat::Zero => return true,
            Nat::Succ(pred) => match pred.as_ref() {
                Nat::Zero => return false,
                Nat::Succ(m) => rest = m,
            },
        }
    }
}

impl std::ops::Add for Nat {
    type Output = Nat;

    fn add(self, rhs: Nat) -> Nat {
        add(&self, &rhs)
    }
}

impl std::ops::Add for &Nat {
    type Output = Nat;

    fn add(self, rhs: &Nat) -> Nat {
        add(self, rhs)
    }
}

impl std::ops::Mul for Nat {
    type Output = Nat;

    fn mul(self, rhs: Nat) -> Nat {
        multiply(&self, &rhs)
    }
}

impl std::ops::Mul for &Nat {
    type Output = Nat;

    fn mul(self, rhs: &Nat) -> Nat {
        multiply(self, rhs)
    }
}
