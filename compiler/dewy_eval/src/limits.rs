//! Evaluation limits.
//!
//! Parameterizes the interpreter with a call-depth ceiling and an optional
//! step budget. Both are checked at fixed points (calls, block entry, loop
//! iterations) so the per-node hot path stays free of bookkeeping.

/// Default call-depth ceiling on native targets.
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// WASM runs on a fixed-size stack that cannot be grown, so the ceiling is
/// much lower there.
#[cfg(target_arch = "wasm32")]
const DEFAULT_MAX_CALL_DEPTH: usize = 200;

/// Limits applied to one interpreter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EvalLimits {
    /// Maximum nesting of active calls. `None` means unlimited; the native
    /// stack still grows on demand.
    pub max_call_depth: Option<usize>,
    /// Maximum number of steps (block entries, loop iterations and calls).
    pub step_budget: Option<u64>,
}

impl EvalLimits {
    /// No call-depth ceiling and no step budget.
    pub const fn unlimited() -> Self {
        EvalLimits {
            max_call_depth: None,
            step_budget: None,
        }
    }

    #[must_use]
    pub const fn with_max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    #[must_use]
    pub const fn with_step_budget(mut self, budget: Option<u64>) -> Self {
        self.step_budget = budget;
        self
    }

    /// Whether `depth` active calls is past the ceiling.
    #[inline]
    pub fn call_depth_exceeded(&self, depth: usize) -> bool {
        self.max_call_depth.is_some_and(|max| depth > max)
    }

    /// Whether `steps` taken is past the budget.
    #[inline]
    pub fn budget_exceeded(&self, steps: u64) -> bool {
        self.step_budget.is_some_and(|budget| steps > budget)
    }
}

impl Default for EvalLimits {
    fn default() -> Self {
        EvalLimits {
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
            step_budget: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_a_depth_ceiling_and_no_budget() {
        let limits = EvalLimits::default();
        assert_eq!(limits.max_call_depth, Some(DEFAULT_MAX_CALL_DEPTH));
        assert_eq!(limits.step_budget, None);
    }

    #[test]
    fn unlimited_never_trips() {
        let limits = EvalLimits::unlimited();
        assert!(!limits.call_depth_exceeded(usize::MAX));
        assert!(!limits.budget_exceeded(u64::MAX));
    }

    #[test]
    fn limits_trip_strictly_past_the_ceiling() {
        let limits = EvalLimits::unlimited()
            .with_max_call_depth(Some(3))
            .with_step_budget(Some(10));
        assert!(!limits.call_depth_exceeded(3));
        assert!(limits.call_depth_exceeded(4));
        assert!(!limits.budget_exceeded(10));
        assert!(limits.budget_exceeded(11));
    }
}
