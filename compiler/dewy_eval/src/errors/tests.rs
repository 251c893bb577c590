use pretty_assertions::assert_eq;

use super::*;

#[test]
fn messages_name_the_offender() {
    assert_eq!(unbound_name("zed").to_string(), "unbound name: zed");
    assert_eq!(
        type_mismatch("bool", ValueKind::Number).to_string(),
        "type mismatch: expected bool, found number"
    );
    assert_eq!(
        arity_mismatch(2, 3).to_string(),
        "wrong number of arguments: expected 2, got 3"
    );
    assert_eq!(not_callable(ValueKind::Text).to_string(), "text is not callable");
}

#[test]
fn binary_mismatch_names_both_kinds() {
    let err = binary_type_mismatch(BinaryOp::Add, ValueKind::Text, ValueKind::Number);
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: "operands supported by `+`".to_string(),
            found: "text and number".to_string(),
        }
    );
}

#[test]
fn index_errors_share_a_kind() {
    for err in [index_out_of_range(3, 2), invalid_index(0.5), missing_key("a")] {
        assert!(matches!(err.kind, EvalErrorKind::IndexError { .. }));
    }
}

#[test]
fn innermost_span_wins() {
    let err = void_used("an operand")
        .or_span(Span::new(4, 5))
        .or_span(Span::new(0, 10));
    assert_eq!(err.span, Some(Span::new(4, 5)));
}

#[test]
fn dummy_span_is_not_attached() {
    let err = division_by_zero().or_span(Span::DUMMY).or_span(Span::new(1, 2));
    assert_eq!(err.span, Some(Span::new(1, 2)));
}
