//! Tree-walking interpreter for Dewy.
//!
//! # Architecture
//!
//! All evaluation goes through [`Interpreter::eval`], which dispatches on the
//! node kind. Per-construct rules live in sibling modules:
//!
//! - `control` - conditionals, loops, blocks, short-circuit logic
//! - `call` - function and builtin calls
//! - `composite` - sequence and record literals, indexing
//!
//! Every recursive `eval` runs under `ensure_sufficient_stack`, so deeply
//! nested trees grow the native stack instead of overflowing it. Calls are
//! additionally bounded by `EvalLimits::max_call_depth`.
//!
//! Scopes are passed explicitly: the interpreter itself holds only
//! configuration and counters, so one interpreter can evaluate many trees
//! against many scopes.

mod builder;
mod call;
mod composite;
mod control;

pub use builder::InterpreterBuilder;

use std::rc::Rc;

use dewy_ir::{BinaryOp, Expr, ExprKind, Literal, Name, StringInterner};
use dewy_stack::ensure_sufficient_stack;

use crate::errors::unbound_name;
use crate::{
    evaluate_binary, evaluate_unary, EvalLimits, EvalResult, FunctionValue, Scope, Value,
};

/// Tree-walking interpreter.
pub struct Interpreter<'a> {
    /// Resolves names for failure messages and record field keys.
    interner: &'a StringInterner,
    limits: EvalLimits,
    /// Number of active calls.
    call_depth: usize,
    /// Steps taken so far (block entries, loop iterations, calls).
    steps: u64,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with default limits.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    pub fn builder(interner: &'a StringInterner) -> InterpreterBuilder<'a> {
        InterpreterBuilder::new(interner)
    }

    #[inline]
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    #[inline]
    pub fn limits(&self) -> EvalLimits {
        self.limits
    }

    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    #[inline]
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// Evaluate `expr` in `scope`.
    ///
    /// Failures carry the span of the innermost node with a real location.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = expr.kind.label()))]
    pub fn eval(&mut self, expr: &Expr, scope: &Scope) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr, scope)).map_err(|e| e.or_span(expr.span))
    }

    fn eval_inner(&mut self, expr: &Expr, scope: &Scope) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(lit) => Ok(eval_literal(lit)),
            ExprKind::Name(name) => self.eval_name(*name, scope),
            ExprKind::Bind { name, value } => {
                let value = self.eval(value, scope)?.non_void("a binding value")?;
                scope.define(*name, value);
                Ok(Value::Void)
            }
            ExprKind::Assign { name, value } => {
                let value = self.eval(value, scope)?.non_void("an assigned value")?;
                scope
                    .assign(*name, value)
                    .map_err(|_| unbound_name(self.interner.lookup(*name)))?;
                Ok(Value::Void)
            }
            ExprKind::Binary { op, left, right } => self.eval_binary(*op, left, right, scope),
            ExprKind::Unary { op, operand } => {
                let value = self.eval(operand, scope)?;
                evaluate_unary(&value, *op)
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => self.eval_if(cond, then_branch, else_branch.as_deref(), scope),
            ExprKind::Loop { cond, body } => self.eval_loop(cond, body, scope),
            ExprKind::Block(stmts) => self.eval_block(stmts, scope),
            ExprKind::Function { params, body } => Ok(Value::function(FunctionValue::new(
                Rc::clone(params),
                Rc::clone(body),
                scope.clone(),
            ))),
            ExprKind::Call { callee, args } => self.eval_call_expr(callee, args, scope),
            ExprKind::Sequence(items) => self.eval_sequence(items, scope),
            ExprKind::Record(fields) => self.eval_record(fields, scope),
            ExprKind::Index { base, index } => self.eval_index(base, index, scope),
        }
    }

    fn eval_name(&self, name: Name, scope: &Scope) -> EvalResult {
        scope
            .lookup(name)
            .ok_or_else(|| unbound_name(self.interner.lookup(name)))
    }

    /// Strict operators: left fully, then right, then the table.
    fn eval_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr, scope: &Scope) -> EvalResult {
        if op.is_short_circuit() {
            return self.eval_logical(op, left, right, scope);
        }
        let left = self.eval(left, scope)?.non_void("an operand")?;
        let right = self.eval(right, scope)?.non_void("an operand")?;
        evaluate_binary(&left, &right, op)
    }
}

fn eval_literal(lit: &Literal) -> Value {
    match lit {
        Literal::Number(n) => Value::Number(*n),
        Literal::Text(s) => Value::text(s),
        Literal::Bool(b) => Value::Bool(*b),
        Literal::Void => Value::Void,
    }
}

/// Evaluate `expr` in `scope` with a default interpreter.
pub fn evaluate(expr: &Expr, scope: &Scope, interner: &StringInterner) -> EvalResult {
    Interpreter::new(interner).eval(expr, scope)
}
