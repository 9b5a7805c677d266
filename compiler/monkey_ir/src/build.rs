//! Terse AST constructors.
//!
//! There is no parser in this workspace, so tests and hand-written drivers
//! assemble trees directly:
//!
//! ```
//! use monkey_ir::build::{add, call, expr, func, ident, int, program};
//!
//! // fn(x) { x + 1 }(41)
//! let prog = program(vec![expr(call(
//!     func(&["x"], vec![expr(add(ident("x"), int(1)))]),
//!     vec![int(41)],
//! ))]);
//! assert_eq!(prog.to_string(), "fn(x) { (x + 1) }(41)");
//! ```

use std::rc::Rc;

use crate::ast::{
    BlockStatement, Expression, FunctionLiteral, Identifier, InfixOp, PrefixOp, Program,
    Statement,
};

// Statements

pub fn program(statements: Vec<Statement>) -> Program {
    Program { statements }
}

pub fn block(statements: Vec<Statement>) -> BlockStatement {
    BlockStatement { statements }
}

pub fn let_(name: &str, value: Expression) -> Statement {
    Statement::Let {
        name: Identifier::new(name),
        value,
    }
}

pub fn ret(value: Expression) -> Statement {
    Statement::Return(value)
}

pub fn expr(expression: Expression) -> Statement {
    Statement::Expression(expression)
}

// Literals

pub fn int(n: i64) -> Expression {
    Expression::Integer(n)
}

pub fn string(s: &str) -> Expression {
    Expression::String(s.to_string())
}

pub fn boolean(b: bool) -> Expression {
    Expression::Boolean(b)
}

pub fn ident(name: &str) -> Expression {
    Expression::Identifier(Identifier::new(name))
}

pub fn array(elements: Vec<Expression>) -> Expression {
    Expression::Array(elements)
}

// Operators

pub fn prefix(op: PrefixOp, right: Expression) -> Expression {
    Expression::Prefix {
        op,
        right: Box::new(right),
    }
}

pub fn not(right: Expression) -> Expression {
    prefix(PrefixOp::Bang, right)
}

pub fn neg(right: Expression) -> Expression {
    prefix(PrefixOp::Minus, right)
}

pub fn infix(left: Expression, op: InfixOp, right: Expression) -> Expression {
    Expression::Infix {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub fn add(left: Expression, right: Expression) -> Expression {
    infix(left, InfixOp::Plus, right)
}

pub fn sub(left: Expression, right: Expression) -> Expression {
    infix(left, InfixOp::Minus, right)
}

pub fn mul(left: Expression, right: Expression) -> Expression {
    infix(left, InfixOp::Asterisk, right)
}

pub fn div(left: Expression, right: Expression) -> Expression {
    infix(left, InfixOp::Slash, right)
}

pub fn lt(left: Expression, right: Expression) -> Expression {
    infix(left, InfixOp::Lt, right)
}

pub fn gt(left: Expression, right: Expression) -> Expression {
    infix(left, InfixOp::Gt, right)
}

pub fn eq(left: Expression, right: Expression) -> Expression {
    infix(left, InfixOp::Eq, right)
}

pub fn not_eq(left: Expression, right: Expression) -> Expression {
    infix(left, InfixOp::NotEq, right)
}

// Control flow and functions

pub fn if_(condition: Expression, consequence: Vec<Statement>) -> Expression {
    Expression::If {
        condition: Box::new(condition),
        consequence: block(consequence),
        alternative: None,
    }
}

pub fn if_else(
    condition: Expression,
    consequence: Vec<Statement>,
    alternative: Vec<Statement>,
) -> Expression {
    Expression::If {
        condition: Box::new(condition),
        consequence: block(consequence),
        alternative: Some(block(alternative)),
    }
}

pub fn func(parameters: &[&str], body: Vec<Statement>) -> Expression {
    Expression::Function(Rc::new(FunctionLiteral {
        parameters: parameters.iter().copied().map(Identifier::new).collect(),
        body: block(body),
    }))
}

pub fn call(function: Expression, arguments: Vec<Expression>) -> Expression {
    Expression::Call {
        function: Box::new(function),
        arguments,
    }
}

pub fn index(left: Expression, index: Expression) -> Expression {
    Expression::Index {
        left: Box::new(left),
        index: Box::new(index),
    }
}
