//! Lexical environments.
//!
//! An `Environment` is a reference-counted scope frame with an optional link
//! to its enclosing frame. The root frame is created once per program run;
//! every function application creates a child of the function's *captured*
//! frame, not of the caller's, which is what makes closures lexical.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::Value;

/// A single scope frame.
#[derive(Default)]
struct Scope {
    /// Bindings defined directly in this frame.
    bindings: FxHashMap<String, Value>,
    /// Enclosing frame (for lexical scoping).
    parent: Option<Environment>,
}

/// Shared handle to a scope frame.
///
/// Cloning the handle does not copy the frame: every clone observes the same
/// bindings. Not thread-safe; a frame must only be used from one call
/// sequence at a time.
#[derive(Clone, Default)]
#[repr(transparent)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Create a root environment with no parent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a child frame whose lookups fall back to `parent`.
    pub fn enclosed(parent: &Environment) -> Self {
        Environment(Rc::new(RefCell::new(Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent.clone()),
        })))
    }

    /// Look up `name`, walking outward from this frame.
    ///
    /// Returns the innermost binding, or `None` if no frame in the chain
    /// defines it.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut current = self.clone();
        loop {
            let parent = {
                let scope = current.0.borrow();
                if let Some(value) = scope.bindings.get(name) {
                    return Some(value.clone());
                }
                scope.parent.clone()?
            };
            current = parent;
        }
    }

    /// Define `name` in this frame, shadowing any outer binding.
    ///
    /// Never writes to an enclosing frame.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Move every binding of this frame into `out`, but only when no other
    /// handle to the frame exists. Used by value teardown.
    pub(crate) fn take_bindings_if_unique(&mut self, out: &mut Vec<Value>) {
        if let Some(scope) = Rc::get_mut(&mut self.0) {
            out.extend(scope.get_mut().bindings.drain().map(|(_, value)| value));
        }
    }

    /// Returns `true` if both handles refer to the same frame.
    #[inline]
    pub fn ptr_eq(this: &Environment, other: &Environment) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

// Frames can be reachable from their own bindings (a recursive function
// captures the scope it is bound in), so Debug only lists names.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<&str> = scope.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}
