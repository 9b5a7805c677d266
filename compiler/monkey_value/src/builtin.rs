//! Builtin registry identities.
//!
//! The table of names is fixed, so a builtin is a plain enum tag rather than
//! a function pointer. `monkey_eval` matches on the tag to run the native
//! procedure.

/// A native procedure available to every program.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinFn {
    Len,
    First,
    Last,
    Rest,
    Push,
    Log,
}

impl BuiltinFn {
    /// Every builtin, in registry order.
    pub const ALL: [BuiltinFn; 6] = [
        BuiltinFn::Len,
        BuiltinFn::First,
        BuiltinFn::Last,
        BuiltinFn::Rest,
        BuiltinFn::Push,
        BuiltinFn::Log,
    ];

    /// Resolve a builtin by the name programs use to call it.
    pub fn lookup(name: &str) -> Option<BuiltinFn> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    pub const fn name(self) -> &'static str {
        match self {
            BuiltinFn::Len => "len",
            BuiltinFn::First => "first",
            BuiltinFn::Last => "last",
            BuiltinFn::Rest => "rest",
            BuiltinFn::Push => "push",
            BuiltinFn::Log => "log",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_every_builtin_by_name() {
        for builtin in BuiltinFn::ALL {
            assert_eq!(BuiltinFn::lookup(builtin.name()), Some(builtin));
        }
    }

    #[test]
    fn lookup_rejects_unknown_names() {
        assert_eq!(BuiltinFn::lookup("puts"), None);
        assert_eq!(BuiltinFn::lookup("LEN"), None);
    }
}
