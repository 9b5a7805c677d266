//! Native procedures behind the builtin registry.
//!
//! Every arity and type problem is reported as an `EvalError`. Array
//! builtins never write through their argument: `push` and `rest` return a
//! freshly allocated array and leave the original untouched.

use monkey_value::{
    argument_must_be, integer_overflow, unsupported_argument, wrong_builtin_args, BuiltinFn,
    EvalError, Value,
};

use crate::print_handler::PrintHandlerImpl;

/// Invoke `builtin` with already-evaluated arguments.
///
/// `log` writes through `print`; no other builtin has side effects.
pub fn call_builtin(
    builtin: BuiltinFn,
    args: &[Value],
    print: &PrintHandlerImpl,
) -> Result<Value, EvalError> {
    tracing::trace!(builtin = builtin.name(), argc = args.len(), "calling builtin");
    match builtin {
        BuiltinFn::Len => len(args),
        BuiltinFn::First => first(args),
        BuiltinFn::Last => last(args),
        BuiltinFn::Rest => rest(args),
        BuiltinFn::Push => push(args),
        BuiltinFn::Log => {
            log(args, print);
            Ok(Value::NULL)
        }
    }
}

/// The single argument of a one-argument builtin.
fn single_arg(args: &[Value]) -> Result<&Value, EvalError> {
    match args {
        [arg] => Ok(arg),
        _ => Err(wrong_builtin_args(1, args.len())),
    }
}

fn array_arg(builtin: BuiltinFn, arg: &Value) -> Result<&[Value], EvalError> {
    arg.as_array()
        .ok_or_else(|| argument_must_be(builtin.name(), "ARRAY", arg))
}

fn length(n: usize) -> Result<Value, EvalError> {
    i64::try_from(n)
        .map(Value::Integer)
        .map_err(|_| integer_overflow("len"))
}

fn len(args: &[Value]) -> Result<Value, EvalError> {
    let arg = single_arg(args)?;
    match arg {
        Value::Str(s) => length(s.chars().count()),
        Value::Array(elements) => length(elements.len()),
        _ => Err(unsupported_argument(BuiltinFn::Len.name(), arg)),
    }
}

fn first(args: &[Value]) -> Result<Value, EvalError> {
    let elements = array_arg(BuiltinFn::First, single_arg(args)?)?;
    Ok(elements.first().cloned().unwrap_or(Value::NULL))
}

fn last(args: &[Value]) -> Result<Value, EvalError> {
    let elements = array_arg(BuiltinFn::Last, single_arg(args)?)?;
    Ok(elements.last().cloned().unwrap_or(Value::NULL))
}

fn rest(args: &[Value]) -> Result<Value, EvalError> {
    let elements = array_arg(BuiltinFn::Rest, single_arg(args)?)?;
    match elements {
        [] => Ok(Value::NULL),
        [_, tail @ ..] => Ok(Value::array(tail.to_vec())),
    }
}

fn push(args: &[Value]) -> Result<Value, EvalError> {
    let [arr, item] = args else {
        return Err(wrong_builtin_args(2, args.len()));
    };
    let elements = array_arg(BuiltinFn::Push, arr)?;
    let mut pushed = Vec::with_capacity(elements.len() + 1);
    pushed.extend_from_slice(elements);
    pushed.push(item.clone());
    Ok(Value::array(pushed))
}

fn log(args: &[Value], print: &PrintHandlerImpl) {
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    print.println(&line);
}
