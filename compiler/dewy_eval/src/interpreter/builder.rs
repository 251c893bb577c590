//! `InterpreterBuilder` for creating Interpreter instances with custom limits.

use dewy_ir::StringInterner;

use super::Interpreter;
use crate::EvalLimits;

/// Builder for creating Interpreter instances.
///
/// ```text
/// let interp = InterpreterBuilder::new(&interner)
///     .max_call_depth(Some(64))
///     .step_budget(Some(1_000))
///     .build();
/// ```
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    limits: EvalLimits,
}

impl<'a> InterpreterBuilder<'a> {
    /// Create a new builder with default limits.
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            limits: EvalLimits::default(),
        }
    }

    /// Replace all limits at once.
    #[must_use]
    pub fn limits(mut self, limits: EvalLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.limits = self.limits.with_max_call_depth(depth);
        self
    }

    #[must_use]
    pub fn step_budget(mut self, budget: Option<u64>) -> Self {
        self.limits = self.limits.with_step_budget(budget);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            limits: self.limits,
            call_depth: 0,
            steps: 0,
        }
    }
}
