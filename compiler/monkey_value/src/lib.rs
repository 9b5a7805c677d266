#![allow(
    clippy::result_large_err,
    reason = "EvalError is fundamental; boxing would add complexity across the crate"
)]
//! Monkey Value - runtime model for the Monkey evaluator.
//!
//! This crate provides:
//! - Runtime values (`Value`, `FunctionValue`, `Heap`)
//! - Lexical environments (`Environment`)
//! - The builtin identity table (`BuiltinFn`); the procedures themselves
//!   live in `monkey_eval`
//! - Evaluation errors and control-flow carriers (`EvalError`, `ControlAction`)
//!
//! # Control Flow
//!
//! `Error` and `ReturnSignal` are not `Value` variants. They travel in the
//! `Err` channel of `EvalResult` as `ControlAction`, so an error can never be
//! stored in an array or bound by `let`, and every composite evaluation step
//! re-propagates them with `?`.

mod builtin;
mod environment;
mod errors;
mod value;

pub use builtin::BuiltinFn;
pub use environment::Environment;
pub use errors::{
    argument_must_be, division_by_zero, identifier_not_found, index_not_supported,
    integer_overflow, not_a_function, recursion_limit_exceeded, type_mismatch,
    unknown_infix_operator, unknown_prefix_operator, unsupported_argument,
    wrong_builtin_args, wrong_function_args, ControlAction, EvalError, EvalErrorKind,
    EvalResult,
};
pub use value::{FunctionValue, Heap, Value};
