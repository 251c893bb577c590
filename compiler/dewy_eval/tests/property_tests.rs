//! Property-based tests for the evaluator.
//!
//! These generate random literals, names and loop counts and check the
//! evaluation laws that must hold for every input.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::cast_precision_loss,
    clippy::float_cmp,
    reason = "Proptest macros generate code with these patterns"
)]

use dewy_eval::{evaluate, EvalErrorKind, Scope, Value};
use dewy_ir::{BinaryOp, Expr, StringInterner};
use proptest::prelude::*;

// -- Strategies --

/// Finite numbers, so equality of the result is meaningful.
fn number_strategy() -> impl Strategy<Value = f64> {
    -1.0e12f64..1.0e12f64
}

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,11}").expect("valid regex")
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,24}").expect("valid regex")
}

// -- Properties --

proptest! {
    #[test]
    fn number_literal_evaluates_to_itself(n in number_strategy()) {
        let interner = StringInterner::new();
        let value = evaluate(&Expr::number(n), &Scope::root(), &interner).unwrap();
        prop_assert_eq!(value, Value::Number(n));
    }

    #[test]
    fn text_literal_evaluates_to_itself(s in text_strategy()) {
        let interner = StringInterner::new();
        let value = evaluate(&Expr::text(s.clone()), &Scope::root(), &interner).unwrap();
        prop_assert_eq!(value, Value::text(&s));
    }

    #[test]
    fn bool_literal_evaluates_to_itself(b in any::<bool>()) {
        let interner = StringInterner::new();
        let value = evaluate(&Expr::boolean(b), &Scope::root(), &interner).unwrap();
        prop_assert_eq!(value, Value::Bool(b));
    }

    #[test]
    fn unbound_names_fail_with_their_name(name in identifier_strategy()) {
        let interner = StringInterner::new();
        let err = evaluate(&Expr::name(interner.intern(&name)), &Scope::root(), &interner)
            .unwrap_err();
        prop_assert_eq!(err.kind, EvalErrorKind::UnboundName { name });
    }

    #[test]
    fn shadowing_never_touches_the_parent(
        name in identifier_strategy(),
        outer in number_strategy(),
        inner in number_strategy(),
    ) {
        let interner = StringInterner::new();
        let x = interner.intern(&name);
        let root = Scope::root();
        root.define(x, Value::Number(outer));
        let block = Expr::block(vec![Expr::bind(x, Expr::number(inner)), Expr::name(x)]);
        prop_assert_eq!(evaluate(&block, &root, &interner).unwrap(), Value::Number(inner));
        prop_assert_eq!(root.lookup(x), Some(Value::Number(outer)));
    }

    #[test]
    fn assign_from_a_child_reaches_the_parent(
        name in identifier_strategy(),
        before in number_strategy(),
        after in number_strategy(),
    ) {
        let interner = StringInterner::new();
        let x = interner.intern(&name);
        let root = Scope::root();
        root.define(x, Value::Number(before));
        let block = Expr::block(vec![Expr::assign(x, Expr::number(after))]);
        evaluate(&block, &root, &interner).unwrap();
        prop_assert_eq!(root.lookup(x), Some(Value::Number(after)));
    }

    #[test]
    fn loop_runs_the_body_exactly_n_times(n in 0u32..64) {
        let interner = StringInterner::new();
        let i = interner.intern("i");
        let root = Scope::root();
        root.define(i, Value::Number(0.0));
        let expr = Expr::loop_while(
            Expr::binary(BinaryOp::Lt, Expr::name(i), Expr::number(f64::from(n))),
            Expr::assign(i, Expr::binary(BinaryOp::Add, Expr::name(i), Expr::number(1.0))),
        );
        prop_assert_eq!(evaluate(&expr, &root, &interner).unwrap(), Value::Void);
        prop_assert_eq!(root.lookup(i), Some(Value::Number(f64::from(n))));
    }

    #[test]
    fn arithmetic_matches_host_floats(a in number_strategy(), b in number_strategy()) {
        let interner = StringInterner::new();
        let scope = Scope::root();
        let eval = |op| {
            evaluate(&Expr::binary(op, Expr::number(a), Expr::number(b)), &scope, &interner)
                .unwrap()
        };
        prop_assert_eq!(eval(BinaryOp::Add), Value::Number(a + b));
        prop_assert_eq!(eval(BinaryOp::Sub), Value::Number(a - b));
        prop_assert_eq!(eval(BinaryOp::Mul), Value::Number(a * b));
        prop_assert_eq!(eval(BinaryOp::Lt), Value::Bool(a < b));
    }

    #[test]
    fn text_ordering_matches_host_strings(a in text_strategy(), b in text_strategy()) {
        let interner = StringInterner::new();
        let expr = Expr::binary(BinaryOp::LtEq, Expr::text(a.clone()), Expr::text(b.clone()));
        let value = evaluate(&expr, &Scope::root(), &interner).unwrap();
        prop_assert_eq!(value, Value::Bool(a <= b));
    }

    #[test]
    fn void_anywhere_in_a_sequence_fails(len in 1usize..16, at in any::<prop::sample::Index>()) {
        let interner = StringInterner::new();
        let hole = at.index(len);
        let items = (0..len)
            .map(|i| if i == hole { Expr::void() } else { Expr::number(i as f64) })
            .collect();
        let err = evaluate(&Expr::sequence(items), &Scope::root(), &interner).unwrap_err();
        prop_assert!(matches!(err.kind, EvalErrorKind::VoidUsed { .. }), "expected VoidUsed, got {:?}", err.kind);
    }

    #[test]
    fn arity_must_match_exactly(params in 0usize..6, args in 0usize..6) {
        let interner = StringInterner::new();
        let names = (0..params).map(|i| interner.intern(&format!("p{i}"))).collect();
        let func = Expr::function(names, Expr::number(1.0));
        let call = Expr::call(func, (0..args).map(|_| Expr::number(0.0)).collect());
        let result = evaluate(&call, &Scope::root(), &interner);
        if params == args {
            prop_assert_eq!(result.unwrap(), Value::Number(1.0));
        } else {
            prop_assert_eq!(
                result.unwrap_err().kind,
                EvalErrorKind::ArityMismatch { expected: params, got: args }
            );
        }
    }
}
