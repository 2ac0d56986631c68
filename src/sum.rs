// Copyright 2025 Cowboy AI, LLC.

//! The sum-type family: `Void`, `Either<L, R>`, and the `Sum<T>` coproduct.
//!
//! `Either` is the only container the difference operator (Δ) ever
//! produces. In this codebase we follow the convention that `Left` holds
//! the base-case value and `Right` holds the inductive-case value; every
//! caller of Δ relies on that convention.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The type with no values (initial object).
///
/// `Void` is never instantiated; it anchors the sum-type family the way
/// the initial object anchors a category of coproducts. Its only use is
/// type-level: `Either<Void, T>` can only ever be `Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Void {}

/// A standard Either ADT: Left(L) or Right(R).
///
/// Tag and payload are fixed at construction; equality is structural.
/// The arithmetic layer reads `Left` as "base case" and `Right` as
/// "inductive case" wherever a Δ-classification flows through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value")]
pub enum Either<L, R> {
    /// Left branch
    Left(L),
    /// Right branch
    Right(R),
}

/// The coproduct A ⊕ A: both branches carry the same payload type.
///
/// This is the result type of Δ, which classifies a value without
/// transforming it.
pub type Sum<T> = Either<T, T>;

/// Construct the left branch.
pub fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Construct the right branch.
pub fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> Either<L, R> {
    /// True if this is the `Left` branch.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// True if this is the `Right` branch.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Get a reference to the Left value if present.
    pub fn left(&self) -> Option<&L> {
        match self {
            Either::Left(l) => Some(l),
            _ => None,
        }
    }

    /// Get a reference to the Right value if present.
    pub fn right(&self) -> Option<&R> {
        match self {
            Either::Right(r) => Some(r),
            _ => None,
        }
    }

    /// Map over the Right value.
    pub fn map<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Map over the Left value.
    pub fn map_left<T, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Fold both branches into one result (the coproduct's universal
    /// property: `[f, g]: A ⊕ B → C`).
    pub fn either<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }
}
