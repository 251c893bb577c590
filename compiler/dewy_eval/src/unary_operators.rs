//! Unary operator table.

use dewy_ir::UnaryOp;

use crate::errors::{unary_type_mismatch, void_used};
use crate::{EvalResult, Value};

/// Apply `op` to an evaluated operand.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Void, _) => Err(void_used("an operand")),
        (Value::Number(n), UnaryOp::Neg) => Ok(Value::Number(-n)),
        (Value::Bool(b), UnaryOp::Not) => Ok(Value::Bool(!b)),
        _ => Err(unary_type_mismatch(op, value.kind())),
    }
}
