//! User-defined function values (closures).

use std::fmt;
use std::rc::Rc;

use monkey_ir::{BlockStatement, FunctionLiteral, Identifier};

use crate::{Environment, Value};

/// A `fn` literal paired with the environment it was evaluated in.
///
/// The environment is shared, not copied: a binding added to the defining
/// scope after the function was created is visible when the function runs.
/// This is what lets a `let`-bound function call itself recursively.
#[derive(Clone)]
pub struct FunctionValue {
    literal: Rc<FunctionLiteral>,
    env: Environment,
}

impl FunctionValue {
    pub fn new(literal: Rc<FunctionLiteral>, env: Environment) -> Self {
        FunctionValue { literal, env }
    }

    #[inline]
    pub fn params(&self) -> &[Identifier] {
        &self.literal.parameters
    }

    #[inline]
    pub fn body(&self) -> &BlockStatement {
        &self.literal.body
    }

    /// The captured (defining) environment.
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Hand the captured frame's bindings to `pending` when this closure is
    /// the frame's last owner.
    pub(crate) fn release_captures(&mut self, pending: &mut Vec<Value>) {
        self.env.take_bindings_if_unique(pending);
    }

    /// Identity comparison: same literal, same captured environment.
    pub fn ptr_eq(&self, other: &FunctionValue) -> bool {
        Rc::ptr_eq(&self.literal, &other.literal) && Environment::ptr_eq(&self.env, &other.env)
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, param) in self.params().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") {{\n{}\n}}", self.body())
    }
}

// The captured environment may (indirectly) contain this function again, so
// Debug stays shallow.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("params", &self.literal.parameters)
            .finish_non_exhaustive()
    }
}
