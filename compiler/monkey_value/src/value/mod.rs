//! Runtime values for the Monkey evaluator.
//!
//! # Heap Enforcement
//!
//! String and array payloads go through `Heap<T>`, whose constructor is
//! private to this module. Build them with the factory methods:
//!
//! ```text
//! let s = Value::string("hello");                      // OK
//! let arr = Value::array(vec![Value::Integer(1)]);     // OK
//! let s = Value::Str(Heap::new(...));                  // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Canonical Instances
//!
//! `Value::TRUE`, `Value::FALSE` and `Value::NULL` are the canonical boolean
//! and null values. Truthiness is decided by matching on the tag, never by
//! comparing payloads, so there is no notion of "another" null.

mod function;
mod heap;

use std::fmt;

pub use function::FunctionValue;
pub use heap::Heap;

use crate::BuiltinFn;

/// Runtime value in the Monkey evaluator.
#[derive(Clone)]
pub enum Value {
    /// Signed 64-bit integer.
    Integer(i64),
    /// Boolean value. Use `Value::TRUE` / `Value::FALSE` / `Value::from_bool`.
    Bool(bool),
    /// Immutable string.
    Str(Heap<String>),
    /// Immutable ordered sequence.
    Array(Heap<Vec<Value>>),
    /// User-defined closure.
    Function(FunctionValue),
    /// Native procedure from the builtin registry.
    Builtin(BuiltinFn),
    /// The absence of a value.
    Null,
}

// Factory Methods

impl Value {
    pub const TRUE: Value = Value::Bool(true);
    pub const FALSE: Value = Value::Bool(false);
    pub const NULL: Value = Value::Null;

    /// Map a host boolean onto the canonical instances.
    #[inline]
    pub fn from_bool(b: bool) -> Self {
        if b {
            Value::TRUE
        } else {
            Value::FALSE
        }
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Heap::new(elements))
    }
}

// Value Methods

impl Value {
    /// Truthiness: `null` and `false` are falsy, everything else is truthy.
    ///
    /// Zero, the empty string and the empty array are all truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Bool(false))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elements) => Some(elements.as_slice()),
            _ => None,
        }
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Bool(_) => "BOOLEAN",
            Value::Str(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Null => "NULL",
        }
    }

    /// Language-level `==` on primitive payloads.
    ///
    /// Returns `None` when either side is a composite (array, function,
    /// builtin), which has no defined equality. Primitives of different types
    /// are never equal.
    pub fn primitive_eq(&self, other: &Value) -> Option<bool> {
        match (self, other) {
            (Value::Array(_) | Value::Function(_) | Value::Builtin(_), _)
            | (_, Value::Array(_) | Value::Function(_) | Value::Builtin(_)) => None,
            (Value::Integer(a), Value::Integer(b)) => Some(a == b),
            (Value::Bool(a), Value::Bool(b)) => Some(a == b),
            (Value::Str(a), Value::Str(b)) => Some(a == b),
            (Value::Null, Value::Null) => Some(true),
            _ => Some(false),
        }
    }
}

/// Host-side equality, used by tests and drivers.
///
/// Arrays compare element-wise, functions by identity. This is not the
/// language's `==`; see [`Value::primitive_eq`].
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}

// Teardown
//
// Nested arrays and closure chains have no depth bound. `Drop` moves the
// children of uniquely owned payloads onto a worklist instead of recursing;
// shared payloads are left to their last owner.

impl Value {
    /// Move out the directly owned children of this value, if nothing else
    /// can observe them.
    fn release_children(&mut self, pending: &mut Vec<Value>) {
        match self {
            Value::Array(elements) => {
                if let Some(elements) = Heap::get_mut(elements) {
                    pending.append(elements);
                }
            }
            Value::Function(func) => func.release_captures(pending),
            Value::Integer(_)
            | Value::Bool(_)
            | Value::Str(_)
            | Value::Builtin(_)
            | Value::Null => {}
        }
    }
}

impl Drop for Value {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.release_children(&mut pending);
        while let Some(mut value) = pending.pop() {
            value.release_children(&mut pending);
        }
    }
}

/// Pending output while rendering.
enum Render<'a> {
    Text(&'static str),
    Value(&'a Value),
}

/// The rendering used by `log` and by drivers.
///
/// Walks nested arrays with an explicit stack, so nesting depth is bounded
/// by memory rather than by the native stack.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !matches!(self, Value::Array(_)) {
            return self.fmt_leaf(f);
        }

        let mut stack = vec![Render::Value(self)];
        while let Some(item) = stack.pop() {
            match item {
                Render::Text(text) => f.write_str(text)?,
                Render::Value(Value::Array(elements)) => {
                    f.write_str("[")?;
                    stack.push(Render::Text("]"));
                    for (i, element) in elements.iter().enumerate().rev() {
                        stack.push(Render::Value(element));
                        if i > 0 {
                            stack.push(Render::Text(", "));
                        }
                    }
                }
                Render::Value(value) => value.fmt_leaf(f)?,
            }
        }
        Ok(())
    }
}

impl Value {
    /// Render anything but an array.
    fn fmt_leaf(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => f.write_str(s),
            Value::Function(func) => write!(f, "{func}"),
            Value::Builtin(_) => f.write_str("builtin function"),
            Value::Null => f.write_str("null"),
            Value::Array(_) => write!(f, "{self}"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => f.debug_tuple("Integer").field(n).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(&**s).finish(),
            Value::Array(elements) => f.debug_tuple("Array").field(&**elements).finish(),
            Value::Function(func) => fmt::Debug::fmt(func, f),
            Value::Builtin(b) => f.debug_tuple("Builtin").field(b).finish(),
            Value::Null => f.write_str("Null"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::from_bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

#[cfg(test)]
mod tests;
