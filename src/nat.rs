// Copyright 2025 Cowboy AI, LLC.

//! The inductive naturals: a finite chain of `Succ` over exactly one
//! `Zero`, with the chain length as the represented value.
//!
//! Values are immutable once built; every operation inspects and
//! produces, never mutates. Construction and conversion walk the chain
//! iteratively, so only the derived structural traversals (`Clone`,
//! `PartialEq`, serde, drop) recurse, a stack-depth constraint that
//! bites only on pathologically deep values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::KernelError;

/// A Peano natural: zero, or the successor of a smaller natural.
///
/// The derived `Ord` coincides with numeric order: `Zero` precedes
/// `Succ`, and successors compare by their predecessors.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum Nat {
    /// Zero, the base constructor.
    Zero,
    /// Successor, the inductive constructor, owning its predecessor.
    Succ(Box<Nat>),
}

/// A borrowable zero with static lifetime, for fallback positions where
/// a freshly built `Nat::Zero` would not live long enough.
pub(crate) static ZERO: Nat = Nat::Zero;

/// The zero natural.
pub fn zero() -> Nat {
    Nat::Zero
}

/// The successor of `n`.
pub fn succ(n: Nat) -> Nat {
    Nat::Succ(Box::new(n))
}

/// Build a `Nat` from a machine integer by wrapping `Zero` in `k`
/// successors. Negative inputs normalize to zero; no negative `Nat`
/// exists by construction.
///
/// # Examples
///
/// ```rust
/// use cim_peano::{from_int, value};
///
/// assert_eq!(value(&from_int(4)), 4);
/// assert_eq!(value(&from_int(-4)), 0);
/// ```
pub fn from_int(k: i64) -> Nat {
    let mut n = Nat::Zero;
    for _ in 0..k.max(0) {
        n = succ(n);
    }
    n
}

/// Convert a `Nat` back to a machine integer by counting the successor
/// chain: `value(Zero) = 0`, `value(Succ(n)) = 1 + value(n)`.
pub fn value(n: &Nat) -> u64 {
    let mut count = 0u64;
    let mut rest = n;
    while let Nat::Succ(pred) = rest {
        count += 1;
        rest = pred;
    }
    count
}

impl Nat {
    /// The predecessor, if this is a successor.
    pub fn pred(&self) -> Option<&Nat> {
        match self {
            Nat::Zero => None,
            Nat::Succ(pred) => Some(pred),
        }
    }
}

impl Default for Nat {
    fn default() -> Self {
        Nat::Zero
    }
}

impl From<u64> for Nat {
    fn from(k: u64) -> Self {
        let mut n = Nat::Zero;
        for _ in 0..k {
            n = succ(n);
        }
        n
    }
}

impl From<&Nat> for u64 {
    fn from(n: &Nat) -> Self {
        value(n)
    }
}

impl From<Nat> for u64 {
    fn from(n: Nat) -> Self {
        value(&n)
    }
}

/// Renders the successor-chain notation: `Z`, `S(Z)`, `S(S(Z))`, ...
impl fmt::Display for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = value(self);
        for _ in 0..depth {
            write!(f, "S(")?;
        }
        write!(f, "Z")?;
        for _ in 0..depth {
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Parses the successor-chain notation back. This is the only place a
/// malformed shape can exist in the crate, so it is where classification
/// errors surface.
impl FromStr for Nat {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let mut pos = 0usize;
        let mut depth = 0u64;
        loop {
            match bytes.get(pos) {
                Some(b'S') if bytes.get(pos + 1) == Some(&b'(') => {
                    depth += 1;
                    pos += 2;
                }
                Some(b'Z') => {
                    pos += 1;
                    break;
                }
                Some(_) => {
                    return Err(KernelError::UnrecognizedShape {
                        offset: pos,
                        found: s[pos..].chars().next().unwrap_or('?'),
                    })
                }
                None => {
                    return Err(KernelError::UnexpectedEnd {
                        expected: "`Z` or `S(`".to_string(),
                    })
                }
            }
        }
        for _ in 0..depth {
            match bytes.get(pos) {
                Some(b')') => pos += 1,
                Some(_) => {
                    return Err(KernelError::UnrecognizedShape {
                        offset: pos,
                        found: s[pos..].chars().next().unwrap_or('?'),
                    })
                }
                None => {
                    return Err(KernelError::UnexpectedEnd {
                        expected: "`)`".to_string(),
                    })
                }
            }
        }
        if pos != bytes.len() {
            return Err(KernelError::TrailingInput {
                rest: s[pos..].to_string(),
            });
        }
        Ok(Nat::from(depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_int_builds_the_exact_chain() {
        assert_eq!(from_int(0), Nat::Zero);
        assert_eq!(from_int(1), succ(zero()));
        assert_eq!(from_int(3), succ(succ(succ(zero()))));
    }

    #[test]
    fn negative_inputs_normalize_to_zero() {
        assert_eq!(from_int(-1), Nat::Zero);
        assert_eq!(from_int(i64::MIN), Nat::Zero);
    }

    #[test]
    fn value_counts_the_chain() {
        for k in 0..32 {
            assert_eq!(value(&from_int(k)), k as u64);
        }
    }

    #[test]
    fn pred_peels_exactly_one_successor() {
        assert_eq!(zero().pred(), None);
        let three = from_int(3);
        assert_eq!(three.pred(), Some(&from_int(2)));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Nat::default(), zero());
    }

    #[test]
    fn derived_order_is_numeric_order() {
        for a in 0..12i64 {
            for b in 0..12i64 {
                assert_eq!(from_int(a).cmp(&from_int(b)), a.cmp(&b));
            }
        }
    }

    #[test]
    fn display_renders_the_successor_chain() {
        assert_eq!(from_int(0).to_string(), "Z");
        assert_eq!(from_int(1).to_string(), "S(Z)");
        assert_eq!(from_int(3).to_string(), "S(S(S(Z)))");
    }

    #[test]
    fn parse_round_trips_display() {
        for k in 0..24 {
            let n = from_int(k);
            let parsed: Nat = n.to_string().parse().unwrap();
            assert_eq!(parsed, n);
        }
    }

    #[test]
    fn parse_rejects_unrecognized_shapes() {
        let err = "Q".parse::<Nat>().unwrap_err();
        assert_eq!(
            err,
            KernelError::UnrecognizedShape {
                offset: 0,
                found: 'Q'
            }
        );

        let err = "S(X)".parse::<Nat>().unwrap_err();
        assert_eq!(
            err,
            KernelError::UnrecognizedShape {
                offset: 2,
                found: 'X'
            }
        );
    }

    #[test]
    fn parse_rejects_truncated_terms() {
        let err = "S(".parse::<Nat>().unwrap_err();
        assert!(matches!(err, KernelError::UnexpectedEnd { .. }));

        let err = "S(Z".parse::<Nat>().unwrap_err();
        assert_eq!(
            err,
            KernelError::UnexpectedEnd {
                expected: "`)`".to_string()
            }
        );
    }

    #[test]
    fn parse_rejects_trailing_garbage() {
        let err = "Z)".parse::<Nat>().unwrap_err();
        assert_eq!(
            err,
            KernelError::TrailingInput {
                rest: ")".to_string()
            }
        );
    }

    #[test]
    fn serde_round_trip_preserves_structure() {
        let n = from_int(5);
        let json = serde_json::to_string(&n).unwrap();
        let back: Nat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }
}
