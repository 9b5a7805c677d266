//! Tests for infix and index operator evaluation.

use crate::operators::{evaluate_index, evaluate_infix};
use monkey_ir::InfixOp;
use monkey_value::{BuiltinFn, Value};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn int(n: i64) -> Value {
    Value::Integer(n)
}

fn infix_err(left: &Value, op: InfixOp, right: &Value) -> String {
    evaluate_infix(op, left, right).unwrap_err().message
}

#[test]
fn test_int_operations() {
    assert_eq!(evaluate_infix(InfixOp::Plus, &int(2), &int(3)).unwrap(), int(5));
    assert_eq!(evaluate_infix(InfixOp::Minus, &int(5), &int(3)).unwrap(), int(2));
    assert_eq!(evaluate_infix(InfixOp::Asterisk, &int(2), &int(3)).unwrap(), int(6));
    assert_eq!(evaluate_infix(InfixOp::Slash, &int(7), &int(2)).unwrap(), int(3));
}

#[test]
fn test_division_truncates_toward_zero() {
    assert_eq!(evaluate_infix(InfixOp::Slash, &int(-7), &int(2)).unwrap(), int(-3));
    assert_eq!(evaluate_infix(InfixOp::Slash, &int(7), &int(-2)).unwrap(), int(-3));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(infix_err(&int(1), InfixOp::Slash, &int(0)), "division by zero");
    assert_eq!(infix_err(&int(0), InfixOp::Slash, &int(0)), "division by zero");
}

#[test]
fn test_overflow() {
    assert_eq!(
        infix_err(&int(i64::MAX), InfixOp::Plus, &int(1)),
        "integer overflow in addition"
    );
    assert_eq!(
        infix_err(&int(i64::MIN), InfixOp::Minus, &int(1)),
        "integer overflow in subtraction"
    );
    assert_eq!(
        infix_err(&int(i64::MAX), InfixOp::Asterisk, &int(2)),
        "integer overflow in multiplication"
    );
    assert_eq!(
        infix_err(&int(i64::MIN), InfixOp::Slash, &int(-1)),
        "integer overflow in division"
    );
}

#[test]
fn test_comparisons() {
    assert_eq!(evaluate_infix(InfixOp::Lt, &int(2), &int(3)).unwrap(), Value::TRUE);
    assert_eq!(evaluate_infix(InfixOp::Gt, &int(2), &int(3)).unwrap(), Value::FALSE);
    assert_eq!(evaluate_infix(InfixOp::Eq, &int(2), &int(2)).unwrap(), Value::TRUE);
    assert_eq!(evaluate_infix(InfixOp::NotEq, &int(2), &int(2)).unwrap(), Value::FALSE);
}

#[test]
fn test_string_concatenation() {
    let result = evaluate_infix(
        InfixOp::Plus,
        &Value::string("hello"),
        &Value::string(" world"),
    )
    .unwrap();
    assert_eq!(result, Value::string("hello world"));
}

#[test]
fn test_string_equality() {
    let a = Value::string("a");
    let b = Value::string("b");
    assert_eq!(evaluate_infix(InfixOp::Eq, &a, &Value::string("a")).unwrap(), Value::TRUE);
    assert_eq!(evaluate_infix(InfixOp::NotEq, &a, &b).unwrap(), Value::TRUE);
}

#[test]
fn test_other_string_operators_are_unknown() {
    let a = Value::string("a");
    assert_eq!(
        infix_err(&a, InfixOp::Minus, &a),
        "unknown operator: STRING - STRING"
    );
    assert_eq!(infix_err(&a, InfixOp::Lt, &a), "unknown operator: STRING < STRING");
}

#[test]
fn test_boolean_operators() {
    assert_eq!(
        evaluate_infix(InfixOp::Eq, &Value::TRUE, &Value::TRUE).unwrap(),
        Value::TRUE
    );
    assert_eq!(
        evaluate_infix(InfixOp::NotEq, &Value::TRUE, &Value::FALSE).unwrap(),
        Value::TRUE
    );
    assert_eq!(
        infix_err(&Value::TRUE, InfixOp::Plus, &Value::FALSE),
        "unknown operator: BOOLEAN + BOOLEAN"
    );
    assert_eq!(
        infix_err(&Value::TRUE, InfixOp::Gt, &Value::FALSE),
        "unknown operator: BOOLEAN > BOOLEAN"
    );
}

#[test]
fn test_mixed_primitive_equality() {
    assert_eq!(evaluate_infix(InfixOp::Eq, &int(1), &Value::TRUE).unwrap(), Value::FALSE);
    assert_eq!(
        evaluate_infix(InfixOp::NotEq, &Value::NULL, &int(0)).unwrap(),
        Value::TRUE
    );
    assert_eq!(
        evaluate_infix(InfixOp::Eq, &Value::NULL, &Value::NULL).unwrap(),
        Value::TRUE
    );
}

#[test]
fn test_type_mismatch() {
    assert_eq!(
        infix_err(&int(5), InfixOp::Plus, &Value::TRUE),
        "type mismatch: INTEGER + BOOLEAN"
    );
    assert_eq!(
        infix_err(&Value::string("a"), InfixOp::Plus, &int(1)),
        "type mismatch: STRING + INTEGER"
    );
}

#[test]
fn test_composite_equality_is_rejected() {
    let arr = Value::array(vec![int(1)]);
    assert_eq!(
        infix_err(&arr, InfixOp::Eq, &arr.clone()),
        "unknown operator: ARRAY == ARRAY"
    );
    assert_eq!(
        infix_err(&arr, InfixOp::NotEq, &int(1)),
        "type mismatch: ARRAY != INTEGER"
    );
    let len = Value::Builtin(BuiltinFn::Len);
    assert_eq!(
        infix_err(&len, InfixOp::Eq, &len),
        "unknown operator: BUILTIN == BUILTIN"
    );
}

#[test]
fn test_index() {
    let arr = Value::array(vec![int(10), int(20)]);
    assert_eq!(evaluate_index(&arr, &int(0)).unwrap(), int(10));
    assert_eq!(evaluate_index(&arr, &int(1)).unwrap(), int(20));
    assert_eq!(evaluate_index(&arr, &int(2)).unwrap(), Value::NULL);
    assert_eq!(evaluate_index(&arr, &int(-1)).unwrap(), Value::NULL);
}

#[test]
fn test_index_errors() {
    let err = evaluate_index(&Value::string("abc"), &int(0)).unwrap_err();
    assert_eq!(err.message, "index operator not supported: STRING");
    let arr = Value::array(vec![int(10)]);
    let err = evaluate_index(&arr, &Value::string("0")).unwrap_err();
    assert_eq!(err.message, "index operator not supported: ARRAY");
}

proptest! {
    #[test]
    fn integer_comparisons_match_host(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(evaluate_infix(InfixOp::Lt, &int(a), &int(b)).unwrap(), Value::from_bool(a < b));
        prop_assert_eq!(evaluate_infix(InfixOp::Gt, &int(a), &int(b)).unwrap(), Value::from_bool(a > b));
        prop_assert_eq!(evaluate_infix(InfixOp::Eq, &int(a), &int(b)).unwrap(), Value::from_bool(a == b));
        prop_assert_eq!(evaluate_infix(InfixOp::NotEq, &int(a), &int(b)).unwrap(), Value::from_bool(a != b));
    }

    #[test]
    fn addition_is_checked(a in any::<i64>(), b in any::<i64>()) {
        let result = evaluate_infix(InfixOp::Plus, &int(a), &int(b));
        match a.checked_add(b) {
            Some(sum) => prop_assert_eq!(result.unwrap(), int(sum)),
            None => prop_assert!(result.is_err()),
        }
    }

    #[test]
    fn division_never_panics(a in any::<i64>(), b in any::<i64>()) {
        let result = evaluate_infix(InfixOp::Slash, &int(a), &int(b));
        match a.checked_div(b) {
            Some(quotient) => prop_assert_eq!(result.unwrap(), int(quotient)),
            None => prop_assert!(result.is_err()),
        }
    }
}
