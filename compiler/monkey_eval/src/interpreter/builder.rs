//! `InterpreterBuilder` for creating `Interpreter` instances.

use super::Interpreter;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for interpreter configuration.
///
/// Defaults: `log` writes to stdout and call depth is unlimited (deep
/// recursion is bounded only by memory).
#[derive(Default)]
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination for `log` output.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Limit the nesting of function applications.
    ///
    /// Exceeding the limit produces an evaluation error instead of growing
    /// the stack without bound.
    #[must_use]
    pub fn max_call_depth(mut self, limit: usize) -> Self {
        self.max_call_depth = Some(limit);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}
