// Copyright 2025 Cowboy AI, LLC.

//! Observable Δ-Σ decomposition.
//!
//! The arithmetic layer runs its induction as a loop, so the call stack
//! no longer carries the step-by-step story. This module makes the story
//! a value instead: a [`Tracer`] evaluates `add`/`multiply` with the same
//! loop, recording one [`TraceStep`] per Δ or Σ act and emitting a
//! `tracing` event for each, and a [`Trace`] is the ordered record left
//! behind. An optional step budget gives the defensive bound the kernel
//! itself does not impose.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::arith::add;
use crate::errors::{KernelError, KernelResult};
use crate::nat::{succ, value, Nat, ZERO};
use crate::operators::{delta, sigma, Branch};
use crate::sum::Either;

/// The two canonical Σ instantiations in the arithmetic layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Combinator {
    /// Successor application, the combination step of `add`.
    Successor,
    /// Addition, the combination step of `multiply`.
    Addition,
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::Successor => write!(f, "succ"),
            Combinator::Addition => write!(f, "add"),
        }
    }
}

/// One recorded act: a Δ classification or a Σ combination.
///
/// Operands and results are recorded as integer values; the
/// successor-chain rendering is recoverable from the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "act", content = "detail")]
pub enum TraceStep {
    /// A Δ act: the stepped operand at `depth` classified into `branch`.
    Classify {
        /// Induction depth (number of successors peeled so far)
        depth: u64,
        /// Value of the operand that was classified
        operand: u64,
        /// The branch Δ chose
        branch: Branch,
    },
    /// A Σ act: the combination at `depth` produced `result`.
    Combine {
        /// Induction depth of the step this combination completes
        depth: u64,
        /// Which Σ instantiation combined
        combinator: Combinator,
        /// Value of the combined result
        result: u64,
    },
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceStep::Classify {
                depth,
                operand,
                branch,
            } => {
                let indent = "  ".repeat(*depth as usize);
                write!(f, "{indent}Δ {} -> {branch}", Nat::from(*operand))
            }
            TraceStep::Combine {
                depth,
                combinator,
                result,
            } => {
                let indent = "  ".repeat(*depth as usize);
                write!(f, "{indent}Σ {combinator} -> {}", Nat::from(*result))
            }
        }
    }
}

/// The ordered record of every act a traced computation performed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    /// The recorded steps, in execution order.
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Export the trace as pretty-printed JSON.
    pub fn to_json(&self) -> KernelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceStep;
    type IntoIter = std::slice::Iter<'a, TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// An evaluator that records each Δ and Σ act as it computes.
///
/// A traced `add(a, b)` records one classify/combine pair per unit of
/// `b` followed by the terminal base classification, `2·value(b) + 1`
/// steps. `multiply` records the same shape at its own granularity: each
/// inner addition is a single Σ act, not an interleaved sub-trace.
#[derive(Debug, Clone, Default)]
pub struct Tracer {
    steps: Vec<TraceStep>,
    step_budget: Option<u64>,
}

impl Tracer {
    /// A tracer with no step bound, matching the reference design.
    pub fn new() -> Self {
        Self::default()
    }

    /// Impose a defensive bound: recording more than `budget` steps
    /// aborts the computation with [`KernelError::StepBudgetExhausted`].
    pub fn with_step_budget(mut self, budget: u64) -> Self {
        self.step_budget = Some(budget);
        self
    }

    /// The steps recorded so far.
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Finish, yielding the accumulated trace.
    pub fn into_trace(self) -> Trace {
        Trace { steps: self.steps }
    }

    fn record(&mut self, step: TraceStep) -> KernelResult<()> {
        if let Some(budget) = self.step_budget {
            if self.steps.len() as u64 >= budget {
                return Err(KernelError::StepBudgetExhausted { budget });
            }
        }
        match &step {
            TraceStep::Classify {
                depth,
                operand,
                branch,
            } => debug!(depth = *depth, operand = *operand, branch = %branch, "Δ classification"),
            TraceStep::Combine {
                depth,
                combinator,
                result,
            } => debug!(depth = *depth, combinator = %combinator, result = *result, "Σ combination"),
        }
        self.steps.push(step);
        Ok(())
    }

    fn classify<'n>(&mut self, depth: u64, operand: &'n Nat) -> KernelResult<Either<&'n Nat, &'n Nat>> {
        let classified = delta(operand);
        self.record(TraceStep::Classify {
            depth,
            operand: value(operand),
            branch: Branch::of(&classified),
        })?;
        Ok(classified)
    }

    /// Traced addition; same result as [`add`], with every act recorded.
    pub fn add(&mut self, a: &Nat, b: &Nat) -> KernelResult<Nat> {
        let mut acc = a.clone();
        let mut rest = b;
        let mut depth = 0u64;
        loop {
            match self.classify(depth, rest)? {
                Either::Left(_) => return Ok(acc),
                Either::Right(step) => {
                    rest = step.pred().unwrap_or(&ZERO);
                    acc = sigma((acc, Nat::Zero), |partial, _| succ(partial));
                    self.record(TraceStep::Combine {
                        depth,
                        combinator: Combinator::Successor,
                        result: value(&acc),
                    })?;
                    depth += 1;
                }
            }
        }
    }

    /// Traced multiplication; same result as [`crate::multiply`].
    pub fn multiply(&mut self, a: &Nat, b: &Nat) -> KernelResult<Nat> {
        let mut acc = Nat::Zero;
        let mut rest = b;
        let mut depth = 0u64;
        loop {
            match self.classify(depth, rest)? {
                Either::Left(_) => return Ok(acc),
                Either::Right(step) => {
                    rest = step.pred().unwrap_or(&ZERO);
                    acc = sigma((a.clone(), acc), |x, y| add(&x, &y));
                    self.record(TraceStep::Combine {
                        depth,
                        combinator: Combinator::Addition,
                        result: value(&acc),
                    })?;
                    depth += 1;
                }
            }
        }
    }
}
