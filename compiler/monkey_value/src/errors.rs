//! Evaluation errors and control-flow carriers.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` gives every failure a typed category. Its `Display` output
//! is the message programs and drivers observe, so the factory functions
//! below are the single place those texts are defined.

use monkey_ir::{InfixOp, PrefixOp};

use crate::Value;

/// Typed error category.
///
/// The rendered message is the observable part; the variant exists so hosts
/// can match on the failure without parsing text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Operators
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        op: PrefixOp,
        operand: &'static str,
    },
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        op: InfixOp,
        right: &'static str,
    },
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: &'static str,
        op: InfixOp,
        right: &'static str,
    },
    #[error("index operator not supported: {type_name}")]
    IndexNotSupported { type_name: &'static str },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    // Names and calls
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },
    #[error("not a function: {type_name}")]
    NotAFunction { type_name: &'static str },
    #[error("wrong number of arguments: want={expected}, got={got}")]
    FunctionArity { expected: usize, got: usize },
    #[error("maximum recursion depth exceeded (limit {limit})")]
    RecursionLimitExceeded { limit: usize },

    // Builtins
    #[error("wrong number of arguments. got={got}, want={expected}")]
    BuiltinArity { expected: usize, got: usize },
    #[error("argument to '{builtin}' not supported, got {got}")]
    UnsupportedArgument {
        builtin: &'static str,
        got: &'static str,
    },
    #[error("argument to '{builtin}' must be {expected}, got {got}")]
    WrongArgumentType {
        builtin: &'static str,
        expected: &'static str,
        got: &'static str,
    },
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured category.
    pub kind: EvalErrorKind,
    /// Human-readable message; always `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

/// Non-value outcomes of evaluating a node.
///
/// `Return` is produced by a `return` statement and travels outward through
/// blocks until the nearest function-call boundary (or the program root)
/// unwraps it. `Error` travels all the way out to the driver.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    Error(EvalError),
    Return(Value),
}

impl ControlAction {
    /// Unwrap at a call or program boundary: a pending `return` becomes the
    /// result, an error stays an error.
    pub fn into_result(self) -> Result<Value, EvalError> {
        match self {
            ControlAction::Return(value) => Ok(value),
            ControlAction::Error(err) => Err(err),
        }
    }
}

impl From<EvalError> for ControlAction {
    fn from(err: EvalError) -> Self {
        ControlAction::Error(err)
    }
}

/// Result of evaluating a node.
pub type EvalResult = Result<Value, ControlAction>;

// Factory functions

#[cold]
pub fn unknown_prefix_operator(op: PrefixOp, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownPrefixOperator {
        op,
        operand: operand.type_name(),
    })
}

#[cold]
pub fn unknown_infix_operator(left: &Value, op: InfixOp, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownInfixOperator {
        left: left.type_name(),
        op,
        right: right.type_name(),
    })
}

#[cold]
pub fn type_mismatch(left: &Value, op: InfixOp, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        left: left.type_name(),
        op,
        right: right.type_name(),
    })
}

#[cold]
pub fn index_not_supported(left: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexNotSupported {
        type_name: left.type_name(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn identifier_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IdentifierNotFound {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_a_function(callee: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction {
        type_name: callee.type_name(),
    })
}

#[cold]
pub fn wrong_function_args(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::FunctionArity { expected, got })
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimitExceeded { limit })
}

#[cold]
pub fn wrong_builtin_args(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BuiltinArity { expected, got })
}

#[cold]
pub fn unsupported_argument(builtin: &'static str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedArgument {
        builtin,
        got: got.type_name(),
    })
}

#[cold]
pub fn argument_must_be(builtin: &'static str, expected: &'static str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgumentType {
        builtin,
        expected,
        got: got.type_name(),
    })
}
