//! Tree-walking interpreter for Monkey.
//!
//! # Evaluation Rules
//!
//! - Statements run in order. An error stops the enclosing construct at once
//!   and travels unchanged to the driver.
//! - `return` produces `ControlAction::Return`. A block passes it outward
//!   still wrapped; the nearest function call (or the program root) unwraps
//!   it exactly once.
//! - Operands, call arguments and array elements are evaluated left to right,
//!   and the first error wins.
//! - Identifiers resolve through the environment chain first and the builtin
//!   registry second.
//!
//! Every composite step uses `?` on an `EvalResult`, which is how control
//! carriers are re-propagated before an operator ever sees them.

mod builder;
mod function_call;

pub use builder::InterpreterBuilder;

use std::rc::Rc;

use monkey_ir::{BlockStatement, Expression, Program, Statement};
use monkey_value::{
    identifier_not_found, BuiltinFn, ControlAction, Environment, EvalError, EvalResult,
    FunctionValue, Value,
};

use crate::operators::{evaluate_index, evaluate_infix};
use crate::print_handler::SharedPrintHandler;
use crate::stack::ensure_sufficient_stack;
use crate::unary_operators::evaluate_prefix;

/// A borrowed view of any evaluable node.
#[derive(Copy, Clone, Debug)]
pub enum Node<'a> {
    Program(&'a Program),
    Block(&'a BlockStatement),
    Statement(&'a Statement),
    Expression(&'a Expression),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a BlockStatement> for Node<'a> {
    fn from(block: &'a BlockStatement) -> Self {
        Node::Block(block)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(statement: &'a Statement) -> Self {
        Node::Statement(statement)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expression: &'a Expression) -> Self {
        Node::Expression(expression)
    }
}

/// Tree-walking interpreter.
///
/// Holds only host configuration and the current call depth; all program
/// state lives in the `Environment` passed to each call.
pub struct Interpreter {
    /// Destination for `log`.
    pub(crate) print_handler: SharedPrintHandler,
    /// Maximum nesting of function applications, if limited.
    pub(crate) max_call_depth: Option<usize>,
    /// Function applications currently in progress.
    pub(crate) call_depth: usize,
}

impl Interpreter {
    /// Interpreter with default configuration (stdout, no depth limit).
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Evaluate any node in `env`.
    ///
    /// A `Program` never yields `ControlAction::Return`; any other node may,
    /// if it contains a `return` outside a function body.
    pub fn evaluate<'a>(&mut self, node: impl Into<Node<'a>>, env: &Environment) -> EvalResult {
        match node.into() {
            Node::Program(program) => self.eval_program(program, env),
            Node::Block(block) => self.eval_block(block, env),
            Node::Statement(statement) => self.eval_statement(statement, env),
            Node::Expression(expression) => self.eval_expression(expression, env),
        }
    }

    /// Run a whole program: the driver-facing entry point.
    pub fn run(&mut self, program: &Program, env: &Environment) -> Result<Value, EvalError> {
        self.eval_program(program, env)
            .or_else(ControlAction::into_result)
    }

    fn eval_program(&mut self, program: &Program, env: &Environment) -> EvalResult {
        let mut result = Value::NULL;
        for statement in &program.statements {
            match self.eval_statement(statement, env) {
                Ok(value) => result = value,
                // A top-level return ends the program.
                Err(ControlAction::Return(value)) => return Ok(value),
                Err(err) => return Err(err),
            }
        }
        Ok(result)
    }

    fn eval_block(&mut self, block: &BlockStatement, env: &Environment) -> EvalResult {
        let mut result = Value::NULL;
        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;
        }
        Ok(result)
    }

    fn eval_statement(&mut self, statement: &Statement, env: &Environment) -> EvalResult {
        match statement {
            Statement::Expression(expression) => self.eval_expression(expression, env),
            Statement::Return(expression) => {
                let value = self.eval_expression(expression, env)?;
                Err(ControlAction::Return(value))
            }
            Statement::Let { name, value } => {
                let value = match self.eval_expression(value, env) {
                    Ok(value) | Err(ControlAction::Return(value)) => value,
                    Err(err) => return Err(err),
                };
                env.set(name.as_str(), value.clone());
                Ok(value)
            }
        }
    }

    fn eval_expression(&mut self, expression: &Expression, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expression_inner(expression, env))
    }

    fn eval_expression_inner(&mut self, expression: &Expression, env: &Environment) -> EvalResult {
        match expression {
            Expression::Integer(n) => Ok(Value::Integer(*n)),
            Expression::String(s) => Ok(Value::string(s.as_str())),
            Expression::Boolean(b) => Ok(Value::from_bool(*b)),
            Expression::Identifier(ident) => Ok(Self::eval_identifier(ident.as_str(), env)?),
            Expression::Array(elements) => Ok(Value::array(self.eval_expressions(elements, env)?)),
            Expression::Prefix { op, right } => {
                let right = self.eval_expression(right, env)?;
                Ok(evaluate_prefix(*op, &right)?)
            }
            Expression::Infix { op, left, right } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                Ok(evaluate_infix(*op, &left, &right)?)
            }
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.eval_expression(condition, env)?;
                if condition.is_truthy() {
                    self.eval_block(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env)
                } else {
                    Ok(Value::NULL)
                }
            }
            Expression::Function(literal) => Ok(Value::Function(FunctionValue::new(
                Rc::clone(literal),
                env.clone(),
            ))),
            Expression::Call {
                function,
                arguments,
            } => {
                let callee = self.eval_expression(function, env)?;
                let args = self.eval_expressions(arguments, env)?;
                self.apply(&callee, args)
            }
            Expression::Index { left, index } => {
                let left = self.eval_expression(left, env)?;
                let index = self.eval_expression(index, env)?;
                Ok(evaluate_index(&left, &index)?)
            }
        }
    }

    /// Evaluate `expressions` left to right, stopping at the first failure.
    fn eval_expressions(
        &mut self,
        expressions: &[Expression],
        env: &Environment,
    ) -> Result<Vec<Value>, ControlAction> {
        expressions
            .iter()
            .map(|expression| self.eval_expression(expression, env))
            .collect()
    }

    fn eval_identifier(name: &str, env: &Environment) -> Result<Value, EvalError> {
        env.get(name)
            .or_else(|| BuiltinFn::lookup(name).map(Value::Builtin))
            .ok_or_else(|| identifier_not_found(name))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
