//! Prefix operator evaluation.
//!
//! Direct enum-based dispatch; the operand has already been evaluated and
//! checked for errors by the interpreter.

use monkey_ir::PrefixOp;
use monkey_value::{integer_overflow, unknown_prefix_operator, EvalError, Value};

/// Evaluate a prefix operator applied to an evaluated operand.
///
/// `!` works on any value through truthiness. `-` only accepts integers.
pub fn evaluate_prefix(op: PrefixOp, operand: &Value) -> Result<Value, EvalError> {
    match (op, operand) {
        (PrefixOp::Bang, _) => Ok(Value::from_bool(!operand.is_truthy())),
        (PrefixOp::Minus, Value::Integer(n)) => n
            .checked_neg()
            .map(Value::Integer)
            .ok_or_else(|| integer_overflow("negation")),
        (PrefixOp::Minus, _) => Err(unknown_prefix_operator(op, operand)),
    }
}
