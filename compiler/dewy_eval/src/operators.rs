//! Binary operator table.
//!
//! Direct enum dispatch over `(Value, Value)` pairs. There is no implicit
//! coercion: a pair of kinds missing from the table is a `TypeMismatch`,
//! including every cross-kind pair. `and` / `or` appear here for totality;
//! the interpreter short-circuits them before reaching this table.

use dewy_ir::BinaryOp;
use dewy_stack::ensure_sufficient_stack;

use crate::errors::{binary_type_mismatch, division_by_zero, type_mismatch, void_used};
use crate::value::{RecordMap, ValueKind};
use crate::{EvalError, EvalResult, Value};

/// Apply `op` to two evaluated operands.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Void, _) | (_, Value::Void) => Err(void_used("an operand")),
        (Value::Number(a), Value::Number(b)) => eval_number_binary(*a, *b, op),
        (Value::Text(a), Value::Text(b)) => eval_text_binary(a, b, op),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        (Value::Sequence(a), Value::Sequence(b)) => eval_sequence_binary(a, b, op),
        (Value::Record(a), Value::Record(b)) => eval_record_binary(a, b, op),
        _ => Err(binary_type_mismatch(op, left.kind(), right.kind())),
    }
}

/// Language equality (`=?`): same-kind only, structural for composites.
///
/// Composite elements are compared pairwise in order, stopping at the first
/// unequal pair. Callables have no equality. Nesting depth is bounded only
/// by memory; the native stack grows as needed.
pub fn values_equal(left: &Value, right: &Value) -> Result<bool, EvalError> {
    ensure_sufficient_stack(|| structural_eq(left, right))
}

fn structural_eq(left: &Value, right: &Value) -> Result<bool, EvalError> {
    match (left, right) {
        (Value::Void, _) | (_, Value::Void) => Err(void_used("an operand")),
        (Value::Number(a), Value::Number(b)) => Ok(a == b),
        (Value::Text(a), Value::Text(b)) => Ok(a == b),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::Sequence(a), Value::Sequence(b)) => sequences_equal(a, b),
        (Value::Record(a), Value::Record(b)) => records_equal(a, b),
        (Value::Function(_) | Value::Builtin(_), _) | (_, Value::Function(_) | Value::Builtin(_)) => {
            Err(type_mismatch("comparable values", ValueKind::Callable))
        }
        _ => Err(binary_type_mismatch(BinaryOp::Eq, left.kind(), right.kind())),
    }
}

fn sequences_equal(a: &[Value], b: &[Value]) -> Result<bool, EvalError> {
    if a.len() != b.len() {
        return Ok(false);
    }
    for (x, y) in a.iter().zip(b) {
        if !values_equal(x, y)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn records_equal(a: &RecordMap, b: &RecordMap) -> Result<bool, EvalError> {
    if a.len() != b.len() || !a.keys().eq(b.keys()) {
        return Ok(false);
    }
    for (x, y) in a.values().zip(b.values()) {
        if !values_equal(x, y)? {
            return Ok(false);
        }
    }
    Ok(true)
}

// Per-kind tables

fn eval_number_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Number(a + b)),
        BinaryOp::Sub => Ok(Value::Number(a - b)),
        BinaryOp::Mul => Ok(Value::Number(a * b)),
        BinaryOp::Div if b == 0.0 => Err(division_by_zero()),
        BinaryOp::Div => Ok(Value::Number(a / b)),
        BinaryOp::Mod if b == 0.0 => Err(division_by_zero()),
        BinaryOp::Mod => Ok(Value::Number(a % b)),
        BinaryOp::Pow => Ok(Value::Number(a.powf(b))),
        // IEEE 754 comparisons: NaN is unequal to everything
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::And | BinaryOp::Or => Err(binary_type_mismatch(
            op,
            ValueKind::Number,
            ValueKind::Number,
        )),
    }
}

fn eval_text_binary(a: &str, b: &str, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::text(format!("{a}{b}"))),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        // Lexicographic by code point
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        _ => Err(binary_type_mismatch(op, ValueKind::Text, ValueKind::Text)),
    }
}

fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::And => Ok(Value::Bool(a && b)),
        BinaryOp::Or => Ok(Value::Bool(a || b)),
        _ => Err(binary_type_mismatch(op, ValueKind::Bool, ValueKind::Bool)),
    }
}

fn eval_sequence_binary(a: &[Value], b: &[Value], op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => {
            let mut items = Vec::with_capacity(a.len() + b.len());
            items.extend_from_slice(a);
            items.extend_from_slice(b);
            Ok(Value::sequence(items))
        }
        BinaryOp::Eq => sequences_equal(a, b).map(Value::Bool),
        BinaryOp::NotEq => sequences_equal(a, b).map(|eq| Value::Bool(!eq)),
        _ => Err(binary_type_mismatch(
            op,
            ValueKind::Sequence,
            ValueKind::Sequence,
        )),
    }
}

fn eval_record_binary(a: &RecordMap, b: &RecordMap, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => records_equal(a, b).map(Value::Bool),
        BinaryOp::NotEq => records_equal(a, b).map(|eq| Value::Bool(!eq)),
        _ => Err(binary_type_mismatch(op, ValueKind::Record, ValueKind::Record)),
    }
}
