use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;
use crate::Environment;
use monkey_ir::build::{add, block, expr, ident};
use monkey_ir::{FunctionLiteral, Identifier};

fn adder_literal() -> Rc<FunctionLiteral> {
    Rc::new(FunctionLiteral {
        parameters: vec![Identifier::new("x"), Identifier::new("y")],
        body: block(vec![expr(add(ident("x"), ident("y")))]),
    })
}

mod truthiness {
    use super::*;

    #[test]
    fn null_and_false_are_falsy() {
        assert!(!Value::NULL.is_truthy());
        assert!(!Value::FALSE.is_truthy());
    }

    #[test]
    fn zero_is_truthy() {
        assert!(Value::Integer(0).is_truthy());
    }

    #[test]
    fn empty_string_and_array_are_truthy() {
        assert!(Value::string("").is_truthy());
        assert!(Value::array(vec![]).is_truthy());
    }

    #[test]
    fn functions_and_builtins_are_truthy() {
        let f = Value::Function(FunctionValue::new(adder_literal(), Environment::new()));
        assert!(f.is_truthy());
        assert!(Value::Builtin(BuiltinFn::Len).is_truthy());
    }
}

mod rendering {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn primitives() {
        assert_eq!(Value::Integer(-3).to_string(), "-3");
        assert_eq!(Value::TRUE.to_string(), "true");
        assert_eq!(Value::NULL.to_string(), "null");
        assert_eq!(Value::string("hi there").to_string(), "hi there");
    }

    #[test]
    fn arrays_render_elements() {
        let arr = Value::array(vec![
            Value::Integer(1),
            Value::string("a"),
            Value::array(vec![Value::TRUE]),
        ]);
        assert_eq!(arr.to_string(), "[1, a, [true]]");
        assert_eq!(Value::array(vec![]).to_string(), "[]");
    }

    #[test]
    fn function_renders_params_and_body() {
        let f = Value::Function(FunctionValue::new(adder_literal(), Environment::new()));
        assert_eq!(f.to_string(), "fn(x, y) {\n(x + y)\n}");
    }

    #[test]
    fn deeply_nested_arrays_render_without_recursing() {
        let depth = 100_000;
        let mut nested = Value::array(vec![]);
        for _ in 0..depth {
            nested = Value::array(vec![nested]);
        }
        let text = nested.to_string();
        assert_eq!(text.len(), 2 * (depth + 1));
        assert!(text.starts_with("[[[") && text.ends_with("]]]"));
    }

    #[test]
    fn builtin_rendering() {
        assert_eq!(Value::Builtin(BuiltinFn::Push).to_string(), "builtin function");
    }
}

mod teardown {
    use pretty_assertions::assert_eq;
    use super::*;

    const DEPTH: usize = 100_000;

    #[test]
    fn deeply_nested_array_drops() {
        let mut nested = Value::array(vec![Value::string("leaf")]);
        for _ in 0..DEPTH {
            nested = Value::array(vec![nested, Value::Integer(0)]);
        }
        drop(nested);
    }

    #[test]
    fn long_closure_chain_drops() {
        let literal = adder_literal();
        let mut f = Value::Function(FunctionValue::new(Rc::clone(&literal), Environment::new()));
        for _ in 0..DEPTH {
            let frame = Environment::new();
            frame.set("g", f);
            f = Value::Function(FunctionValue::new(Rc::clone(&literal), frame));
        }
        drop(f);
    }

    #[test]
    fn shared_payload_survives_teardown_of_one_owner() {
        let inner = Value::array(vec![Value::Integer(7)]);
        let outer = Value::array(vec![inner.clone()]);
        drop(outer);
        assert_eq!(inner.as_array(), Some(&[Value::Integer(7)][..]));
    }

    #[test]
    fn shared_frame_keeps_its_bindings() {
        let frame = Environment::new();
        frame.set("x", Value::Integer(1));
        let f = Value::Function(FunctionValue::new(adder_literal(), frame.clone()));
        drop(f);
        assert_eq!(frame.get("x"), Some(Value::Integer(1)));
    }
}

mod type_names {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn all_variants() {
        assert_eq!(Value::Integer(1).type_name(), "INTEGER");
        assert_eq!(Value::TRUE.type_name(), "BOOLEAN");
        assert_eq!(Value::string("").type_name(), "STRING");
        assert_eq!(Value::array(vec![]).type_name(), "ARRAY");
        assert_eq!(Value::Builtin(BuiltinFn::Log).type_name(), "BUILTIN");
        assert_eq!(Value::NULL.type_name(), "NULL");
        let f = Value::Function(FunctionValue::new(adder_literal(), Environment::new()));
        assert_eq!(f.type_name(), "FUNCTION");
    }
}

mod equality {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn primitive_eq_on_same_types() {
        assert_eq!(Value::Integer(1).primitive_eq(&Value::Integer(1)), Some(true));
        assert_eq!(Value::TRUE.primitive_eq(&Value::FALSE), Some(false));
        assert_eq!(Value::string("a").primitive_eq(&Value::string("a")), Some(true));
        assert_eq!(Value::NULL.primitive_eq(&Value::NULL), Some(true));
    }

    #[test]
    fn primitive_eq_across_types_is_false() {
        assert_eq!(Value::Integer(1).primitive_eq(&Value::TRUE), Some(false));
        assert_eq!(Value::NULL.primitive_eq(&Value::FALSE), Some(false));
    }

    #[test]
    fn composites_have_no_primitive_eq() {
        let arr = Value::array(vec![]);
        assert_eq!(arr.primitive_eq(&arr), None);
        assert_eq!(Value::Integer(1).primitive_eq(&arr), None);
        let b = Value::Builtin(BuiltinFn::Len);
        assert_eq!(b.primitive_eq(&b), None);
    }

    #[test]
    fn host_eq_compares_functions_by_identity() {
        let env = Environment::new();
        let literal = adder_literal();
        let f1 = Value::Function(FunctionValue::new(Rc::clone(&literal), env.clone()));
        let f2 = Value::Function(FunctionValue::new(Rc::clone(&literal), env));
        let f3 = Value::Function(FunctionValue::new(literal, Environment::new()));
        assert_eq!(f1, f2);
        assert_ne!(f1, f3);
    }

    #[test]
    fn host_eq_compares_arrays_elementwise() {
        let a = Value::array(vec![Value::Integer(1), Value::string("x")]);
        let b = Value::array(vec![Value::Integer(1), Value::string("x")]);
        assert_eq!(a, b);
    }
}

#[test]
fn from_bool_yields_canonical_instances() {
    assert_eq!(Value::from_bool(true), Value::TRUE);
    assert_eq!(Value::from(false), Value::FALSE);
}

#[test]
fn accessors() {
    assert_eq!(Value::TRUE.as_array(), None);
    assert_eq!(
        Value::array(vec![Value::NULL]).as_array(),
        Some(&[Value::NULL][..])
    );
    assert!(Value::NULL.is_null());
}
