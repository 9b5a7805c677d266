//! Monkey IR - AST node types consumed by the evaluator.
//!
//! Lexing and parsing live outside this workspace. Whatever produces the tree
//! only has to satisfy the shapes defined here:
//! - `Program` and `BlockStatement` hold ordered statement lists
//! - `Statement` is a `let`, a `return` or a bare expression
//! - `Expression` is a closed sum over every expression form
//!
//! Every node implements `Display`, rendering canonical source text. With the
//! `serde` feature enabled, the tree can be loaded from any self-describing
//! format (the `monkey` driver uses JSON).

pub mod ast;
pub mod build;

pub use ast::{
    BlockStatement, Expression, FunctionLiteral, Identifier, InfixOp, PrefixOp, Program,
    Statement,
};
