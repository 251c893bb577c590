//! Sequence and record literals, and indexing.

use dewy_ir::{Expr, Name};

use super::Interpreter;
use crate::errors::{index_out_of_range, invalid_index, missing_key, type_mismatch};
use crate::value::RecordMap;
use crate::{EvalError, EvalResult, Scope, Value};

impl Interpreter<'_> {
    pub(super) fn eval_sequence(&mut self, items: &[Expr], scope: &Scope) -> EvalResult {
        let mut values = Vec::with_capacity(items.len());
        for item in items {
            values.push(self.eval(item, scope)?.non_void("a sequence element")?);
        }
        Ok(Value::sequence(values))
    }

    /// Fields are evaluated in source order; a repeated field keeps the
    /// later value.
    pub(super) fn eval_record(&mut self, fields: &[(Name, Expr)], scope: &Scope) -> EvalResult {
        let mut map = RecordMap::new();
        for (name, expr) in fields {
            let value = self.eval(expr, scope)?.non_void("a record field")?;
            map.insert(self.interner.lookup(*name).to_string(), value);
        }
        Ok(Value::record(map))
    }

    pub(super) fn eval_index(&mut self, base: &Expr, index: &Expr, scope: &Scope) -> EvalResult {
        let base = self.eval(base, scope)?.non_void("an index base")?;
        let index = self.eval(index, scope)?.non_void("an index")?;
        index_value(&base, &index)
    }
}

/// `base.[index]` on evaluated operands.
pub(crate) fn index_value(base: &Value, index: &Value) -> EvalResult {
    match (base, index) {
        (Value::Sequence(items), Value::Number(n)) => {
            let i = position(*n)?;
            items
                .get(i)
                .cloned()
                .ok_or_else(|| index_out_of_range(i, items.len()))
        }
        (Value::Text(s), Value::Number(n)) => {
            let i = position(*n)?;
            s.chars()
                .nth(i)
                .map(|c| Value::text(c.to_string()))
                .ok_or_else(|| index_out_of_range(i, s.chars().count()))
        }
        (Value::Record(fields), Value::Text(key)) => fields
            .get(&**key)
            .cloned()
            .ok_or_else(|| missing_key(key)),
        (Value::Sequence(_) | Value::Text(_), other) => {
            Err(type_mismatch("number index", other.kind()))
        }
        (Value::Record(_), other) => Err(type_mismatch("text key", other.kind())),
        (other, _) => Err(type_mismatch("sequence, text, or record", other.kind())),
    }
}

/// Zero-based position from a number: non-negative and integral.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "range and integrality are checked first; huge values saturate and miss"
)]
fn position(n: f64) -> Result<usize, EvalError> {
    if !n.is_finite() || n < 0.0 || n.fract() != 0.0 {
        return Err(invalid_index(n));
    }
    Ok(n as usize)
}
