//! Tests for prefix operator evaluation.

use crate::unary_operators::evaluate_prefix;
use monkey_ir::PrefixOp;
use monkey_value::{BuiltinFn, Value};

mod negation {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn int_positive() {
        assert_eq!(
            evaluate_prefix(PrefixOp::Minus, &Value::Integer(5)).unwrap(),
            Value::Integer(-5)
        );
    }

    #[test]
    fn int_negative() {
        assert_eq!(
            evaluate_prefix(PrefixOp::Minus, &Value::Integer(-5)).unwrap(),
            Value::Integer(5)
        );
    }

    #[test]
    fn int_zero() {
        assert_eq!(
            evaluate_prefix(PrefixOp::Minus, &Value::Integer(0)).unwrap(),
            Value::Integer(0)
        );
    }

    #[test]
    fn int_max() {
        assert_eq!(
            evaluate_prefix(PrefixOp::Minus, &Value::Integer(i64::MAX)).unwrap(),
            Value::Integer(-i64::MAX)
        );
    }

    #[test]
    fn int_min_overflows() {
        let err = evaluate_prefix(PrefixOp::Minus, &Value::Integer(i64::MIN)).unwrap_err();
        assert_eq!(err.message, "integer overflow in negation");
    }

    #[test]
    fn non_integers_are_unknown_operators() {
        let cases = [
            (Value::TRUE, "unknown operator: -BOOLEAN"),
            (Value::string("a"), "unknown operator: -STRING"),
            (Value::array(vec![]), "unknown operator: -ARRAY"),
            (Value::NULL, "unknown operator: -NULL"),
            (Value::Builtin(BuiltinFn::Len), "unknown operator: -BUILTIN"),
        ];
        for (operand, expected) in cases {
            let err = evaluate_prefix(PrefixOp::Minus, &operand).unwrap_err();
            assert_eq!(err.message, expected);
        }
    }
}

mod bang {
    use pretty_assertions::assert_eq;
    use super::*;

    fn bang(operand: &Value) -> Value {
        evaluate_prefix(PrefixOp::Bang, operand).unwrap()
    }

    #[test]
    fn booleans() {
        assert_eq!(bang(&Value::TRUE), Value::FALSE);
        assert_eq!(bang(&Value::FALSE), Value::TRUE);
    }

    #[test]
    fn null_is_falsy() {
        assert_eq!(bang(&Value::NULL), Value::TRUE);
    }

    #[test]
    fn zero_and_empty_values_are_truthy() {
        assert_eq!(bang(&Value::Integer(0)), Value::FALSE);
        assert_eq!(bang(&Value::Integer(5)), Value::FALSE);
        assert_eq!(bang(&Value::string("")), Value::FALSE);
        assert_eq!(bang(&Value::array(vec![])), Value::FALSE);
        assert_eq!(bang(&Value::Builtin(BuiltinFn::Log)), Value::FALSE);
    }
}
