//! Function application.

use super::Interpreter;
use crate::builtins::call_builtin;
use monkey_value::{
    not_a_function, recursion_limit_exceeded, wrong_function_args, ControlAction, Environment,
    EvalError, EvalResult, FunctionValue, Value,
};

impl Interpreter {
    /// Apply an evaluated callee to evaluated arguments.
    ///
    /// Only functions and builtins are callable.
    #[tracing::instrument(level = "debug", skip_all, fields(callee = callee.type_name(), argc = args.len()))]
    pub(super) fn apply(&mut self, callee: &Value, args: Vec<Value>) -> EvalResult {
        match callee {
            Value::Function(func) => self.call_function(func, args),
            Value::Builtin(builtin) => Ok(call_builtin(*builtin, &args, &self.print_handler)?),
            _ => Err(not_a_function(callee).into()),
        }
    }

    /// Run a closure body in a fresh frame enclosed by the captured
    /// environment, then unwrap one pending `return`.
    fn call_function(&mut self, func: &FunctionValue, args: Vec<Value>) -> EvalResult {
        let params = func.params();
        if params.len() != args.len() {
            return Err(wrong_function_args(params.len(), args.len()).into());
        }

        self.enter_call()?;

        let call_env = Environment::enclosed(func.env());
        for (param, arg) in params.iter().zip(args) {
            call_env.set(param.as_str(), arg);
        }
        let result = self.eval_block(func.body(), &call_env);

        self.call_depth = self.call_depth.saturating_sub(1);

        match result {
            Err(ControlAction::Return(value)) => Ok(value),
            other => other,
        }
    }

    fn enter_call(&mut self) -> Result<(), EvalError> {
        if let Some(limit) = self.max_call_depth {
            if self.call_depth >= limit {
                tracing::debug!(limit, "call depth limit reached");
                return Err(recursion_limit_exceeded(limit));
            }
        }
        self.call_depth += 1;
        Ok(())
    }
}
