//! The `run` command: load a program and evaluate it in a fresh environment.

use std::path::Path;

use monkey_eval::{
    silent_handler, stdout_handler, Environment, EvalError, InterpreterBuilder,
    SharedPrintHandler, Value,
};
use monkey_ir::Program;

use crate::{load_program, DriverError};

/// Evaluation settings taken from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Limit on nested function applications (`--max-depth=<n>`).
    pub max_depth: Option<usize>,
    /// Discard `log` output (`--quiet`); the result is still printed.
    pub quiet: bool,
}

/// Parse `run` arguments: one program path plus options, in any order.
pub fn parse_run_args(args: &[String]) -> Result<(String, RunOptions), DriverError> {
    let mut options = RunOptions::default();
    let mut path = None;

    for arg in args {
        if let Some(depth) = arg.strip_prefix("--max-depth=") {
            let depth = depth.parse::<usize>().map_err(|_| {
                DriverError::Usage(format!("invalid value for --max-depth: '{depth}'"))
            })?;
            options.max_depth = Some(depth);
        } else if arg == "--quiet" || arg == "-q" {
            options.quiet = true;
        } else if arg.starts_with('-') {
            return Err(DriverError::Usage(format!("unknown option '{arg}'")));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(DriverError::Usage(format!("unexpected argument '{arg}'")));
        }
    }

    let path = path.ok_or_else(|| DriverError::Usage("missing program path".to_string()))?;
    Ok((path, options))
}

/// Evaluate `program` in a fresh global environment.
pub fn evaluate_program(
    program: &Program,
    options: &RunOptions,
    print: SharedPrintHandler,
) -> Result<Value, EvalError> {
    let mut builder = InterpreterBuilder::new().print_handler(print);
    if let Some(limit) = options.max_depth {
        builder = builder.max_call_depth(limit);
    }
    let mut interpreter = builder.build();
    interpreter.run(program, &Environment::new())
}

/// Run a program file, printing its result to stdout.
///
/// A `null` result prints nothing.
pub fn run_file(path: &str, options: &RunOptions) -> Result<(), DriverError> {
    let program = load_program(Path::new(path))?;
    let print = if options.quiet {
        silent_handler()
    } else {
        stdout_handler()
    };
    let value = evaluate_program(&program, options, print)?;
    if !value.is_null() {
        println!("{value}");
    }
    Ok(())
}
