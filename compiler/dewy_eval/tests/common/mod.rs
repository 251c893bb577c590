//! Shared helpers for the integration suites.

#![allow(dead_code, reason = "each suite uses a different subset")]

use dewy_eval::{EvalErrorKind, EvalResult, Interpreter, Scope, Value};
use dewy_ir::{Expr, Name, StringInterner};

/// An interner plus a builtin root scope.
pub struct Harness {
    pub interner: StringInterner,
    pub scope: Scope,
}

impl Harness {
    pub fn new() -> Self {
        let interner = StringInterner::new();
        let scope = Scope::with_builtins(&interner);
        Harness { interner, scope }
    }

    pub fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    pub fn var(&self, s: &str) -> Expr {
        Expr::name(self.name(s))
    }

    pub fn eval(&self, expr: &Expr) -> EvalResult {
        dewy_eval::evaluate(expr, &self.scope, &self.interner)
    }

    pub fn eval_with(&self, interp: &mut Interpreter<'_>, expr: &Expr) -> EvalResult {
        interp.eval(expr, &self.scope)
    }

    pub fn get(&self, s: &str) -> Option<Value> {
        self.scope.lookup(self.name(s))
    }

    /// `name(args...)`
    pub fn call(&self, name: &str, args: Vec<Expr>) -> Expr {
        Expr::call(self.var(name), args)
    }

    /// Evaluate and return the failure kind.
    pub fn fail(&self, expr: &Expr) -> EvalErrorKind {
        match self.eval(expr) {
            Ok(value) => panic!("expected failure, got {value:?}"),
            Err(err) => err.kind,
        }
    }
}
