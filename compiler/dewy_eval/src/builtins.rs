//! Native functions available in a builtin root scope.

use dewy_ir::StringInterner;

use crate::errors::type_mismatch;
use crate::value::Builtin;
use crate::{EvalResult, Scope, Value};

const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "len",
        arity: 1,
        func: builtin_len,
    },
    Builtin {
        name: "str",
        arity: 1,
        func: builtin_str,
    },
    Builtin {
        name: "type",
        arity: 1,
        func: builtin_type,
    },
];

/// Define every builtin in `scope`.
pub(crate) fn install(scope: &Scope, interner: &StringInterner) {
    for builtin in BUILTINS {
        scope.define(interner.intern(builtin.name), Value::Builtin(*builtin));
    }
}

/// Number of elements, fields, or characters.
#[expect(
    clippy::cast_precision_loss,
    reason = "lengths beyond 2^53 are not representable as values anyway"
)]
fn builtin_len(args: &[Value]) -> EvalResult {
    let len = match &args[0] {
        Value::Sequence(items) => items.len(),
        Value::Record(fields) => fields.len(),
        Value::Text(s) => s.chars().count(),
        other => return Err(type_mismatch("sequence, record, or text", other.kind())),
    };
    Ok(Value::Number(len as f64))
}

fn builtin_str(args: &[Value]) -> EvalResult {
    Ok(Value::text(args[0].to_string()))
}

fn builtin_type(args: &[Value]) -> EvalResult {
    Ok(Value::text(args[0].kind().as_str()))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::EvalErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn len_counts_characters_not_bytes() {
        assert_eq!(
            builtin_len(&[Value::text("héllo")]).unwrap(),
            Value::Number(5.0)
        );
    }

    #[test]
    fn len_rejects_numbers() {
        let err = builtin_len(&[Value::Number(3.0)]).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::TypeMismatch { .. }));
    }

    #[test]
    fn str_uses_display_form() {
        let seq = Value::sequence(vec![Value::Number(1.0), Value::text("a")]);
        assert_eq!(builtin_str(&[seq]).unwrap(), Value::text("[1, \"a\"]"));
    }

    #[test]
    fn type_names_the_kind() {
        assert_eq!(
            builtin_type(&[Value::Bool(true)]).unwrap(),
            Value::text("bool")
        );
    }

    #[test]
    fn install_defines_all_builtins() {
        let interner = StringInterner::new();
        let scope = Scope::root();
        install(&scope, &interner);
        for name in ["len", "str", "type"] {
            assert!(scope.contains_local(interner.intern(name)), "{name}");
        }
    }
}
