// Copyright 2025 Cowboy AI, LLC.

//! Error types for kernel operations.
//!
//! The arithmetic layer is total over well-formed `Nat` values, so every
//! abnormal condition lives at a boundary: the textual parser (the only
//! place a malformed shape can exist), the optional step budget of the
//! traced evaluator, and JSON export.

use thiserror::Error;

/// Errors that can occur at the kernel's boundaries
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KernelError {
    /// Parser met a token that is neither `Z` nor `S(` where a term
    /// constructor was required
    #[error("unrecognized shape at offset {offset}: found {found:?}")]
    UnrecognizedShape {
        /// Byte offset of the offending token
        offset: usize,
        /// The character that failed to classify
        found: char,
    },

    /// Input ended in the middle of a successor chain
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEnd {
        /// What the parser was waiting for
        expected: String,
    },

    /// A complete term was followed by further input
    #[error("trailing input after complete term: {rest:?}")]
    TrailingInput {
        /// The unconsumed remainder
        rest: String,
    },

    /// A traced computation hit its defensive step bound
    #[error("step budget exhausted after {budget} recorded steps")]
    StepBudgetExhausted {
        /// The budget that was configured
        budget: u64,
    },

    /// JSON export failure
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

impl From<serde_json::Error> for KernelError {
    fn from(err: serde_json::Error) -> Self {
        KernelError::Serialization(err.to_string())
    }
}

impl KernelError {
    /// True for any parse-boundary error
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            KernelError::UnrecognizedShape { .. }
                | KernelError::UnexpectedEnd { .. }
                | KernelError::TrailingInput { .. }
        )
    }

    /// True if a traced computation ran out of budget
    pub fn is_budget_exhausted(&self) -> bool {
        matches!(self, KernelError::StepBudgetExhausted { .. })
    }

    /// True for JSON export failures
    pub fn is_serialization(&self) -> bool {
        matches!(self, KernelError::Serialization(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_condition() {
        let err = KernelError::UnrecognizedShape {
            offset: 4,
            found: 'Q',
        };
        assert_eq!(err.to_string(), "unrecognized shape at offset 4: found 'Q'");

        let err = KernelError::StepBudgetExhausted { budget: 16 };
        assert_eq!(
            err.to_string(),
            "step budget exhausted after 16 recorded steps"
        );
    }

    #[test]
    fn predicates_partition_the_taxonomy() {
        let parse = KernelError::TrailingInput {
            rest: ")".to_string(),
        };
        assert!(parse.is_parse());
        assert!(!parse.is_budget_exhausted());
        assert!(!parse.is_serialization());

        let budget = KernelError::StepBudgetExhausted { budget: 1 };
        assert!(budget.is_budget_exhausted());
        assert!(!budget.is_parse());
    }

    #[test]
    fn serde_json_errors_convert() {
        let bad = serde_json::from_str::<u64>("not json").unwrap_err();
        let err: KernelError = bad.into();
        assert!(err.is_serialization());
    }
}
