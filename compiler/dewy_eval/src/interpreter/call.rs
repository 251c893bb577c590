//! Function call evaluation.

use dewy_ir::Expr;

use super::Interpreter;
use crate::errors::{arity_mismatch, not_callable, stack_exhausted, void_used};
use crate::{EvalError, EvalResult, FunctionValue, Scope, Value};

impl Interpreter<'_> {
    /// Callee first, then arguments left to right, all in the caller's scope.
    pub(super) fn eval_call_expr(
        &mut self,
        callee: &Expr,
        args: &[Expr],
        scope: &Scope,
    ) -> EvalResult {
        let func = self.eval(callee, scope)?.non_void("a callee")?;
        if !matches!(func, Value::Function(_) | Value::Builtin(_)) {
            return Err(not_callable(func.kind()));
        }
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval(arg, scope)?.non_void("an argument")?);
        }
        self.call(&func, &values)
    }

    /// Call a callable value with already evaluated arguments.
    #[tracing::instrument(level = "debug", skip_all, fields(args = args.len()))]
    pub fn call(&mut self, func: &Value, args: &[Value]) -> EvalResult {
        if args.iter().any(Value::is_void) {
            return Err(void_used("an argument"));
        }
        match func {
            Value::Function(f) => {
                self.tick()?;
                self.call_function(f, args)
            }
            Value::Builtin(builtin) => {
                self.tick()?;
                if args.len() != builtin.arity {
                    return Err(arity_mismatch(builtin.arity, args.len()));
                }
                tracing::debug!(name = builtin.name, "builtin call");
                (builtin.func)(args)
            }
            other => Err(not_callable(other.kind())),
        }
    }

    /// Bind parameters in a child of the captured scope and run the body.
    fn call_function(&mut self, f: &FunctionValue, args: &[Value]) -> EvalResult {
        if args.len() != f.arity() {
            return Err(arity_mismatch(f.arity(), args.len()));
        }
        self.enter_call()?;
        let call_scope = f.captured_scope().child();
        for (param, arg) in f.params().iter().zip(args) {
            call_scope.define(*param, arg.clone());
        }
        let result = self.eval(f.body(), &call_scope);
        self.call_depth -= 1;
        result
    }

    fn enter_call(&mut self) -> Result<(), EvalError> {
        let depth = self.call_depth + 1;
        if self.limits.call_depth_exceeded(depth) {
            let max = self.limits.max_call_depth.unwrap_or(depth);
            tracing::debug!(
                max,
                remaining_stack = ?dewy_stack::remaining_stack(),
                "call depth limit reached"
            );
            return Err(stack_exhausted(max));
        }
        self.call_depth = depth;
        Ok(())
    }
}
