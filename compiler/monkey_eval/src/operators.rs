//! Infix and index operator evaluation.
//!
//! Both operands arrive already evaluated; errors in either were propagated
//! by the interpreter before we get here.
//!
//! Integer arithmetic is checked: overflow and division by zero are
//! evaluation errors rather than host panics. Division truncates toward zero.

use monkey_ir::InfixOp;
use monkey_value::{
    division_by_zero, index_not_supported, integer_overflow, type_mismatch,
    unknown_infix_operator, EvalError, Value,
};

/// Evaluate `left <op> right`.
///
/// Resolution order:
/// 1. two integers: arithmetic and comparison table
/// 2. two strings with `+`: concatenation
/// 3. `==` / `!=` on primitives: payload equality
/// 4. operands of different types: type mismatch
/// 5. otherwise: unknown operator
///
/// Arrays, functions and builtins have no equality, so `==` on them falls
/// through to 4 or 5.
pub fn evaluate_infix(op: InfixOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => eval_integer_infix(op, *a, *b),
        (Value::Str(a), Value::Str(b)) if op == InfixOp::Plus => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        _ => eval_generic_infix(op, left, right),
    }
}

fn eval_integer_infix(op: InfixOp, a: i64, b: i64) -> Result<Value, EvalError> {
    match op {
        InfixOp::Plus => checked_arith(a.checked_add(b), "addition"),
        InfixOp::Minus => checked_arith(a.checked_sub(b), "subtraction"),
        InfixOp::Asterisk => checked_arith(a.checked_mul(b), "multiplication"),
        InfixOp::Slash => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(a.checked_div(b), "division")
            }
        }
        InfixOp::Lt => Ok(Value::from_bool(a < b)),
        InfixOp::Gt => Ok(Value::from_bool(a > b)),
        InfixOp::Eq => Ok(Value::from_bool(a == b)),
        InfixOp::NotEq => Ok(Value::from_bool(a != b)),
    }
}

#[inline]
fn checked_arith(result: Option<i64>, operation: &'static str) -> Result<Value, EvalError> {
    result
        .map(Value::Integer)
        .ok_or_else(|| integer_overflow(operation))
}

fn eval_generic_infix(op: InfixOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    if op.is_equality() {
        if let Some(equal) = left.primitive_eq(right) {
            let result = if op == InfixOp::Eq { equal } else { !equal };
            return Ok(Value::from_bool(result));
        }
    }

    if left.type_name() == right.type_name() {
        Err(unknown_infix_operator(left, op, right))
    } else {
        Err(type_mismatch(left, op, right))
    }
}

/// Evaluate `left[index]`.
///
/// Out-of-range indices (including negative ones) yield `null`.
pub fn evaluate_index(left: &Value, index: &Value) -> Result<Value, EvalError> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| elements.get(i))
            .cloned()
            .unwrap_or(Value::NULL)),
        _ => Err(index_not_supported(left)),
    }
}
