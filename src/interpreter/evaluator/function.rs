use crate::{
    ast::{BuiltinFunction, Expr, UserFunction},
    error::EvaluationError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

impl Expr {
    pub(crate) fn eval_builtin(function: BuiltinFunction, argument: &Self) -> EvalResult<Value> {
        let x = numeric_argument(function.name(), argument)?;
        Ok(Value::Number(function.apply(x)))
    }

    /// Calls the function bound at parse time. The registry is not
    /// consulted.
    pub(crate) fn eval_user_call(name: &str,
                                 function: &UserFunction,
                                 argument: &Self)
                                 -> EvalResult<Value> {
        let x = numeric_argument(name, argument)?;
        Ok(Value::Number(function.call(x)))
    }
}

/// Evaluates a call argument, which must be a number.
///
/// # Errors
/// [`EvaluationError::NonNumericArgument`] if it evaluates to a boolean.
fn numeric_argument(function: &str, argument: &Expr) -> EvalResult<f64> {
    match argument.evaluate()? {
        Value::Number(x) => Ok(x),
        other @ Value::Boolean(_) => {
            Err(EvaluationError::NonNumericArgument { function: function.to_string(),
                                                      found:    other.kind(), })
        },
    }
}
