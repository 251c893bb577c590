//! Evaluation failures.
//!
//! Every failure is a value returned from `evaluate`; nothing is printed or
//! recovered inside the core. Factory functions are the public way to build
//! errors so message wording stays in one place.

use dewy_ir::{BinaryOp, Span, UnaryOp};

use crate::value::{Value, ValueKind};

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Failure category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("unbound name: {name}")]
    UnboundName { name: String },

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("void has no value and cannot be used as {context}")]
    VoidUsed { context: &'static str },

    #[error("{found} is not callable")]
    NotCallable { found: ValueKind },

    #[error("wrong number of arguments: expected {expected}, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("index error: {message}")]
    IndexError { message: String },

    #[error("stack exhausted: call depth limit of {depth} reached")]
    StackExhausted { depth: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("evaluation budget of {steps} steps exceeded")]
    BudgetExceeded { steps: u64 },
}

/// Evaluation error with the location of the node that raised it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Span of the innermost node with a real location.
    pub span: Option<Span>,
}

impl EvalError {
    #[inline]
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach `span` unless a location is already recorded or `span` is a
    /// placeholder. Errors bubble outward, so the innermost real span wins.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        if self.span.is_none() && !span.is_dummy() {
            self.span = Some(span);
        }
        self
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Name errors

#[cold]
pub fn unbound_name(name: &str) -> EvalError {
    EvalErrorKind::UnboundName {
        name: name.to_string(),
    }
    .into()
}

// Type errors

#[cold]
pub fn type_mismatch(expected: impl Into<String>, found: ValueKind) -> EvalError {
    EvalErrorKind::TypeMismatch {
        expected: expected.into(),
        found: found.to_string(),
    }
    .into()
}

/// Operands of a binary operator outside its table.
#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: ValueKind, right: ValueKind) -> EvalError {
    EvalErrorKind::TypeMismatch {
        expected: format!("operands supported by `{}`", op.as_symbol()),
        found: format!("{left} and {right}"),
    }
    .into()
}

#[cold]
pub fn unary_type_mismatch(op: UnaryOp, operand: ValueKind) -> EvalError {
    let expected = match op {
        UnaryOp::Neg => "number",
        UnaryOp::Not => "bool",
    };
    type_mismatch(format!("{expected} operand for `{}`", op.as_symbol()), operand)
}

#[cold]
pub fn void_used(context: &'static str) -> EvalError {
    EvalErrorKind::VoidUsed { context }.into()
}

// Call errors

#[cold]
pub fn not_callable(found: ValueKind) -> EvalError {
    EvalErrorKind::NotCallable { found }.into()
}

#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalErrorKind::ArityMismatch { expected, got }.into()
}

#[cold]
pub fn stack_exhausted(depth: usize) -> EvalError {
    EvalErrorKind::StackExhausted { depth }.into()
}

#[cold]
pub fn budget_exceeded(steps: u64) -> EvalError {
    EvalErrorKind::BudgetExceeded { steps }.into()
}

// Index errors

#[cold]
pub fn index_out_of_range(index: usize, len: usize) -> EvalError {
    EvalErrorKind::IndexError {
        message: format!("index {index} out of range for length {len}"),
    }
    .into()
}

#[cold]
pub fn invalid_index(index: f64) -> EvalError {
    EvalErrorKind::IndexError {
        message: format!("{index} is not a valid position"),
    }
    .into()
}

#[cold]
pub fn missing_key(key: &str) -> EvalError {
    EvalErrorKind::IndexError {
        message: format!("no field named {key:?}"),
    }
    .into()
}

// Arithmetic errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

#[cfg(test)]
mod tests;
