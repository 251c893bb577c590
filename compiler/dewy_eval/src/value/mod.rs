//! Runtime values.
//!
//! `Value` is a closed enum: every operator site matches on it exhaustively,
//! so adding a kind forces each rule to be revisited.
//!
//! Heap payloads go through factory methods:
//!
//! ```text
//! let s = Value::text("hello");
//! let xs = Value::sequence(vec![Value::Number(1.0)]);
//! ```
//!
//! `Void` is a whole-expression result only. Composite constructors never
//! see it because the evaluator rejects void elements before assembling.

mod function;
mod heap;

use std::collections::BTreeMap;
use std::fmt;

pub use function::{Builtin, BuiltinFn, FunctionValue};
pub use heap::Heap;

use dewy_stack::ensure_sufficient_stack;

use crate::errors::{type_mismatch, void_used};
use crate::teardown::Teardown;
use crate::{EvalError, EvalResult};

/// Field storage of a record, iterated in key order.
pub type RecordMap = BTreeMap<String, Value>;

/// Kind tag of a value, used in failure messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Text,
    Bool,
    Sequence,
    Record,
    Callable,
    Void,
}

impl ValueKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::Bool => "bool",
            ValueKind::Sequence => "sequence",
            ValueKind::Record => "record",
            ValueKind::Callable => "callable",
            ValueKind::Void => "void",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Text(Heap<str>),
    Sequence(Heap<Vec<Value>>),
    Record(Heap<RecordMap>),
    /// Closure.
    Function(FunctionValue),
    /// Native function.
    Builtin(Builtin),
    /// No value.
    Void,
}

// Factory methods

impl Value {
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    #[inline]
    pub fn text(s: impl AsRef<str>) -> Self {
        Value::Text(Heap::text(s.as_ref()))
    }

    #[inline]
    pub fn sequence(items: Vec<Value>) -> Self {
        Value::Sequence(Heap::new(items))
    }

    #[inline]
    pub fn record(fields: RecordMap) -> Self {
        Value::Record(Heap::new(fields))
    }

    #[inline]
    pub fn function(func: FunctionValue) -> Self {
        Value::Function(func)
    }
}

// Inspection

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Bool,
            Value::Text(_) => ValueKind::Text,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Record(_) => ValueKind::Record,
            Value::Function(_) | Value::Builtin(_) => ValueKind::Callable,
            Value::Void => ValueKind::Void,
        }
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    /// Pass the value through, or fail with `VoidUsed` naming where it was used.
    #[inline]
    pub fn non_void(self, context: &'static str) -> EvalResult {
        if self.is_void() {
            Err(void_used(context))
        } else {
            Ok(self)
        }
    }

    fn expect_kind(&self, expected: ValueKind) -> EvalError {
        if self.is_void() {
            void_used("a value")
        } else {
            type_mismatch(expected.as_str(), self.kind())
        }
    }

    pub fn as_number(&self) -> Result<f64, EvalError> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(other.expect_kind(ValueKind::Number)),
        }
    }

    pub fn as_bool(&self) -> Result<bool, EvalError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.expect_kind(ValueKind::Bool)),
        }
    }

    pub fn as_text(&self) -> Result<&str, EvalError> {
        match self {
            Value::Text(s) => Ok(&**s),
            other => Err(other.expect_kind(ValueKind::Text)),
        }
    }

    pub fn as_sequence(&self) -> Result<&[Value], EvalError> {
        match self {
            Value::Sequence(items) => Ok(items.as_slice()),
            other => Err(other.expect_kind(ValueKind::Sequence)),
        }
    }

    pub fn as_record(&self) -> Result<&RecordMap, EvalError> {
        match self {
            Value::Record(fields) => Ok(&**fields),
            other => Err(other.expect_kind(ValueKind::Record)),
        }
    }
}

// Teardown

impl Value {
    /// Move uniquely owned children into `teardown`. Shared payloads are
    /// only released by their last handle.
    pub(crate) fn release_children(&mut self, teardown: &mut Teardown) {
        match self {
            Value::Sequence(items) => {
                if let Some(items) = items.get_mut() {
                    teardown.push_values(items.drain(..));
                }
            }
            Value::Record(fields) => {
                if let Some(fields) = fields.get_mut() {
                    teardown.push_values(std::mem::take(fields).into_values());
                }
            }
            Value::Function(func) => func.captured_scope_mut().release_frame(teardown),
            _ => {}
        }
    }
}

impl Drop for Value {
    fn drop(&mut self) {
        if matches!(
            self,
            Value::Sequence(_) | Value::Record(_) | Value::Function(_)
        ) {
            let mut teardown = Teardown::default();
            self.release_children(&mut teardown);
            teardown.run();
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

/// Host-level equality for tests and embedding. Language equality (`=?`)
/// lives in the operator table and rejects cross-kind comparison instead of
/// answering `false`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.eq_inner(other))
    }
}

impl Value {
    fn eq_inner(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Sequence(a), Value::Sequence(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::Void, Value::Void) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.fmt_debug(f))
    }
}

impl Value {
    fn fmt_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Text(s) => write!(f, "Text({:?})", &**s),
            Value::Sequence(items) => f.debug_tuple("Sequence").field(&**items).finish(),
            Value::Record(fields) => f.debug_tuple("Record").field(&**fields).finish(),
            Value::Function(func) => fmt::Debug::fmt(func, f),
            Value::Builtin(builtin) => fmt::Debug::fmt(builtin, f),
            Value::Void => f.write_str("Void"),
        }
    }
}

impl Value {
    /// Nested rendering: text is quoted inside composites.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{:?}", &**s),
            other => ensure_sufficient_stack(|| fmt::Display::fmt(other, f)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => f.write_str(s),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                f.write_str("]")
            }
            Value::Record(fields) => {
                f.write_str("[")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key} = ")?;
                    value.fmt_nested(f)?;
                }
                f.write_str("]")
            }
            Value::Function(func) => write!(f, "<function/{}>", func.arity()),
            Value::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name),
            Value::Void => f.write_str("void"),
        }
    }
}
