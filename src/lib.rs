// Copyright 2025 Cowboy AI, LLC.

//! # CIM Peano
//!
//! Peano arithmetic reconstructed from two categorical operators, as a
//! formal-foundations demonstration for the Composable Information Machine:
//!
//! - **Δ (difference)**: classifies a value into the base or inductive
//!   branch of a coproduct, the sole source of branching
//! - **Σ (connection)**: combines a same-typed pair through a supplied
//!   binary operation, the sole source of composition
//! - **Sum type**: `Void`, `Either<L, R>`, and the `Sum<T>` coproduct Δ
//!   produces
//! - **Nat**: the inductive naturals, a finite successor chain over zero
//! - **Arithmetic**: `add`, `multiply`, `is_zero`, `is_even`, each a
//!   composition of Δ-classification and Σ-combination
//! - **Trace**: an evaluator that records every Δ and Σ act as a value,
//!   making the decomposition observable without call-stack unwinding
//!
//! Removing Δ destroys branching; removing Σ destroys composition. The
//! point of the crate is that nothing else is needed.
//!
//! ## Design Principles
//!
//! 1. **Closed induction**: `Nat` has exactly two constructors; every
//!    case split is an exhaustive match, never open-ended inspection
//! 2. **Immutability**: values are consumed by inspection and rebuilt,
//!    never mutated
//! 3. **One branch convention**: `Left` means base case and `Right`
//!    means inductive case for every caller of Δ
//! 4. **Bounded stacks**: the induction in the arithmetic layer runs as
//!    an accumulator loop, so depth never grows with operand magnitude
//! 5. **Errors at the boundary**: arithmetic is total; only parsing,
//!    step budgets, and JSON export can fail
//!
//! ```rust
//! use cim_peano::{add, from_int, value};
//!
//! let five = add(&from_int(2), &from_int(3));
//! assert_eq!(value(&five), 5);
//! assert_eq!(five.to_string(), "S(S(S(S(S(Z)))))");
//! ```

#![warn(missing_docs)]

mod arith;
mod errors;
mod nat;
mod operators;
mod sum;
mod trace;

pub use arith::{add, is_even, is_zero, multiply};
pub use errors::{KernelError, KernelResult};
pub use nat::{from_int, succ, value, zero, Nat};
pub use operators::{delta, delta_forced, sigma, Branch, Inductive};
pub use sum::{left, right, Either, Sum, Void};
pub use trace::{Combinator, Trace, TraceStep, Tracer};
