#![allow(
    clippy::result_large_err,
    reason = "EvalError is fundamental; boxing would add complexity across the crate"
)]
//! Monkey Eval - tree-walking evaluator for Monkey programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Interpreter`: recursive dispatch over `monkey_ir` nodes
//! - `evaluate_infix` / `evaluate_prefix`: direct enum-based operator dispatch
//! - `call_builtin`: the native procedures behind `BuiltinFn`
//! - `Environment` and `Value` from `monkey_value`
//!
//! # Re-exports
//!
//! Value types are re-exported from `monkey_value` so drivers only need this
//! crate and `monkey_ir`.

mod builtins;
pub mod interpreter;
mod operators;
mod print_handler;
mod stack;
mod unary_operators;

pub use monkey_value::{
    BuiltinFn, ControlAction, Environment, EvalError, EvalErrorKind, EvalResult, FunctionValue,
    Value,
};

pub use builtins::call_builtin;
pub use interpreter::{Interpreter, InterpreterBuilder, Node};
pub use operators::{evaluate_index, evaluate_infix};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_prefix;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
