//! Conditionals, loops, blocks and short-circuit logic.

use dewy_ir::{BinaryOp, Expr};

use super::Interpreter;
use crate::errors::{budget_exceeded, type_mismatch, void_used};
use crate::{EvalError, EvalResult, Scope, Value};

impl Interpreter<'_> {
    /// Count one step against the budget.
    pub(super) fn tick(&mut self) -> Result<(), EvalError> {
        self.steps = self.steps.saturating_add(1);
        if self.limits.budget_exceeded(self.steps) {
            let budget = self.limits.step_budget.unwrap_or(self.steps);
            tracing::debug!(budget, "step budget exceeded");
            return Err(budget_exceeded(budget));
        }
        Ok(())
    }

    pub(super) fn eval_if(
        &mut self,
        cond: &Expr,
        then_branch: &Expr,
        else_branch: Option<&Expr>,
        scope: &Scope,
    ) -> EvalResult {
        let cond = self.eval(cond, scope)?;
        if expect_bool(&cond, "a condition")? {
            self.eval(then_branch, scope)
        } else if let Some(else_branch) = else_branch {
            self.eval(else_branch, scope)
        } else {
            Ok(Value::Void)
        }
    }

    /// While-style loop. The condition sees the loop's scope; each
    /// iteration's body gets a fresh child, so its bindings do not leak into
    /// the next iteration.
    pub(super) fn eval_loop(&mut self, cond: &Expr, body: &Expr, scope: &Scope) -> EvalResult {
        loop {
            let value = self.eval(cond, scope)?;
            if !expect_bool(&value, "a loop condition")? {
                return Ok(Value::Void);
            }
            self.tick()?;
            let iteration = scope.child();
            self.eval(body, &iteration)?;
        }
    }

    pub(super) fn eval_block(&mut self, stmts: &[Expr], scope: &Scope) -> EvalResult {
        self.tick()?;
        let block = scope.child();
        let mut result = Value::Void;
        for stmt in stmts {
            result = self.eval(stmt, &block)?;
        }
        Ok(result)
    }

    /// `and` / `or`: the right operand runs only when the left does not
    /// decide the result.
    pub(super) fn eval_logical(
        &mut self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
        scope: &Scope,
    ) -> EvalResult {
        let left = self.eval(left, scope)?;
        let left = expect_bool(&left, "an operand")?;
        match (op, left) {
            (BinaryOp::And, false) => return Ok(Value::Bool(false)),
            (BinaryOp::Or, true) => return Ok(Value::Bool(true)),
            _ => {}
        }
        let right = self.eval(right, scope)?;
        expect_bool(&right, "an operand").map(Value::Bool)
    }
}

fn expect_bool(value: &Value, context: &'static str) -> Result<bool, EvalError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Void => Err(void_used(context)),
        other => Err(type_mismatch("bool", other.kind())),
    }
}
