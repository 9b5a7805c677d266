//! Prefix and infix operators.
//!
//! With the `serde` feature, operators serialize as their source symbol
//! (`"+"`, `"=="`, `"!"`), which keeps hand-written AST documents readable.

use std::fmt;

/// Prefix (unary) operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrefixOp {
    /// Logical negation of truthiness (`!`).
    #[cfg_attr(feature = "serde", serde(rename = "!"))]
    Bang,
    /// Integer negation (`-`).
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Minus,
}

impl PrefixOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Bang => "!",
            Self::Minus => "-",
        }
    }
}

/// Infix (binary) operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfixOp {
    // Arithmetic
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Plus,
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Minus,
    #[cfg_attr(feature = "serde", serde(rename = "*"))]
    Asterisk,
    #[cfg_attr(feature = "serde", serde(rename = "/"))]
    Slash,

    // Comparison
    #[cfg_attr(feature = "serde", serde(rename = "<"))]
    Lt,
    #[cfg_attr(feature = "serde", serde(rename = ">"))]
    Gt,
    #[cfg_attr(feature = "serde", serde(rename = "=="))]
    Eq,
    #[cfg_attr(feature = "serde", serde(rename = "!="))]
    NotEq,
}

impl InfixOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }

    /// Returns `true` for `==` and `!=`.
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Eq | Self::NotEq)
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
