// Copyright 2025 Cowboy AI, LLC.

//! The two operators everything else is built from.
//!
//! - **Δ (difference)**: classify a value into the base or inductive
//!   branch of a coproduct. The sole source of branching in the kernel.
//! - **Σ (connection)**: combine a same-typed pair through a supplied
//!   binary operation. The sole source of composition in the kernel.
//!
//! Δ needs to know what "base case" means for a type; that seam is the
//! [`Inductive`] trait. A type that has not opted in cannot be classified
//! at all, which replaces the dynamic unrecognized-shape fallback of a
//! loosely-typed rendition with a compile-time obligation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::nat::Nat;
use crate::sum::{left, right, Sum};

/// A type whose values split into exactly one base case and an inductive
/// remainder: the shape Δ classifies over.
pub trait Inductive {
    /// True iff this value is the base (terminal, non-recursive) case.
    fn is_base(&self) -> bool;
}

impl Inductive for Nat {
    fn is_base(&self) -> bool {
        matches!(self, Nat::Zero)
    }
}

impl<T: Inductive + ?Sized> Inductive for &T {
    fn is_base(&self) -> bool {
        (**self).is_base()
    }
}

/// Machine integers form the same base/inductive family with zero as the
/// base case; kept to show the classification seam is open to extension.
impl Inductive for u64 {
    fn is_base(&self) -> bool {
        *self == 0
    }
}

/// The difference operator Δ: A → A ⊕ A.
///
/// Classifies `value` by its structural case: `Left` iff it is the base
/// case, `Right` otherwise. Pure: the operand is moved into the branch
/// untouched.
///
/// # Examples
///
/// ```rust
/// use cim_peano::{delta, from_int};
///
/// assert!(delta(from_int(0)).is_left());
/// assert!(delta(from_int(3)).is_right());
/// ```
pub fn delta<T: Inductive>(value: T) -> Sum<T> {
    if value.is_base() {
        left(value)
    } else {
        right(value)
    }
}

/// The forced-Δ override: unconditionally the inductive branch.
///
/// Never inspects its operand, so no [`Inductive`] bound is required.
/// Callers use this to force the inductive path regardless of shape.
pub fn delta_forced<T>(value: T) -> Sum<T> {
    right(value)
}

/// The connection operator Σ: A × A → A.
///
/// Applies `op` to the components of `pair`, in order, exactly once.
/// Σ carries no logic of its own beyond delegation; it exists so that
/// every combination step in the arithmetic layer is traceable to one
/// operator. Failure, if any, belongs entirely to `op`.
pub fn sigma<T>(pair: (T, T), op: impl FnOnce(T, T) -> T) -> T {
    let (a, b) = pair;
    op(a, b)
}

/// The named Δ-outcome convention: `Left` means base, `Right` means
/// inductive, for every caller in the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Branch {
    /// The terminal, non-recursive case (`Left`).
    Base,
    /// The case that steps to a smaller instance (`Right`).
    Inductive,
}

impl Branch {
    /// Read the branch tag off a Δ result.
    pub fn of<T>(sum: &Sum<T>) -> Self {
        if sum.is_left() {
            Branch::Base
        } else {
            Branch::Inductive
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Base => write!(f, "base"),
            Branch::Inductive => write!(f, "inductive"),
        }
    }
}
