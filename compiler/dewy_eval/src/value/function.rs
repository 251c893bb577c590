//! Callable values: closures and builtins.

use std::fmt;
use std::rc::Rc;

use dewy_ir::{Expr, Name};

use crate::{EvalError, Scope, Value};

/// User-defined function with its captured defining scope.
///
/// The body and parameter list are shared with the defining tree. The scope
/// handle keeps the defining frame alive for as long as the closure is
/// reachable.
#[derive(Clone)]
pub struct FunctionValue {
    params: Rc<[Name]>,
    body: Rc<Expr>,
    scope: Scope,
}

impl FunctionValue {
    pub fn new(params: Rc<[Name]>, body: Rc<Expr>, scope: Scope) -> Self {
        FunctionValue {
            params,
            body,
            scope,
        }
    }

    #[inline]
    pub fn params(&self) -> &[Name] {
        &self.params
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    #[inline]
    pub fn body(&self) -> &Expr {
        &self.body
    }

    /// The scope active where the function was defined.
    #[inline]
    pub fn captured_scope(&self) -> &Scope {
        &self.scope
    }

    #[inline]
    pub(crate) fn captured_scope_mut(&mut self) -> &mut Scope {
        &mut self.scope
    }
}

// The captured scope may contain this very function, so Debug stops at the
// signature.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}

/// Identity: the same definition closed over the same frame.
impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body) && self.scope.same_scope(&other.scope)
    }
}

/// Native function signature. Arguments are already evaluated, non-void,
/// and arity-checked.
pub type BuiltinFn = fn(&[Value]) -> Result<Value, EvalError>;

/// Native function installed in the root scope.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub arity: usize,
    pub func: BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
