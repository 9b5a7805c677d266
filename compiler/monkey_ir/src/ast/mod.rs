//! AST node types.
//!
//! Dispatch in the evaluator is an exhaustive `match` over these enums, so
//! adding a node kind is a compile error everywhere it is not handled.
//!
//! Function literals are held behind `Rc` so that function values can keep a
//! reference to their parameter list and body without copying the subtree.

mod operators;

use std::fmt;
use std::rc::Rc;

pub use operators::{InfixOp, PrefixOp};

/// An identifier as written in source.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Root node: the statements of one program, in source order.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub statements: Vec<Statement>,
}

/// A braced statement list (`if` branches, function bodies).
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    /// `let <name> = <value>;`
    Let { name: Identifier, value: Expression },
    /// `return <value>;`
    Return(Expression),
    /// A bare expression in statement position.
    Expression(Expression),
}

/// Parameter list and body of a `fn` literal.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expression {
    Identifier(Identifier),
    Integer(i64),
    String(String),
    Boolean(bool),
    /// `[a, b, c]`
    Array(Vec<Expression>),
    Prefix {
        op: PrefixOp,
        right: Box<Expression>,
    },
    Infix {
        op: InfixOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    Function(Rc<FunctionLiteral>),
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
    /// `left[index]`
    Index {
        left: Box<Expression>,
        index: Box<Expression>,
    },
}

// Display: canonical source rendering

/// Writes `items` separated by `sep`.
fn write_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    sep: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated(f, &self.statements, "\n")
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated(f, &self.statements, " ")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {name} = {value};"),
            Statement::Return(value) => write!(f, "return {value};"),
            Statement::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_separated(f, &self.parameters, ", ")?;
        write!(f, ") {{ {} }}", self.body)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{ident}"),
            Expression::Integer(n) => write!(f, "{n}"),
            Expression::String(s) => write!(f, "{s:?}"),
            Expression::Boolean(b) => write!(f, "{b}"),
            Expression::Array(elements) => {
                f.write_str("[")?;
                write_separated(f, elements, ", ")?;
                f.write_str("]")
            }
            Expression::Prefix { op, right } => write!(f, "({op}{right})"),
            Expression::Infix { op, left, right } => write!(f, "({left} {op} {right})"),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if {condition} {{ {consequence} }}")?;
                if let Some(alt) = alternative {
                    write!(f, " else {{ {alt} }}")?;
                }
                Ok(())
            }
            Expression::Function(literal) => write!(f, "{literal}"),
            Expression::Call {
                function,
                arguments,
            } => {
                write!(f, "{function}(")?;
                write_separated(f, arguments, ", ")?;
                f.write_str(")")
            }
            Expression::Index { left, index } => write!(f, "({left}[{index}])"),
        }
    }
}
