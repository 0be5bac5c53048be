use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{evaluator::core::EvalResult, value::Value},
};

impl Expr {
    pub(crate) fn eval_unary_op(op: UnaryOperator, operand: &Self) -> EvalResult<Value> {
        let value = operand.evaluate()?;
        eval_unary(op, &value)
    }
}

/// Evaluates a unary operation on a value.
///
/// - `Negate`: numeric negation.
/// - `Not`: boolean negation.
///
/// # Errors
/// [`EvaluationError::TypeMismatch`](crate::error::EvaluationError::TypeMismatch)
/// if the operand has the wrong type.
///
/// ## Example
/// ```
/// use exprtree::{Value, ast::UnaryOperator, interpreter::evaluator::unary::eval_unary};
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Number(5.0)).unwrap();
/// assert_eq!(v, Value::Number(-5.0));
///
/// let v = eval_unary(UnaryOperator::Not, &Value::Boolean(false)).unwrap();
/// assert_eq!(v, Value::Boolean(true));
///
/// assert!(eval_unary(UnaryOperator::Not, &Value::Number(1.0)).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => Ok(Value::Number(-value.as_number(op)?)),
        UnaryOperator::Not => Ok(Value::Boolean(!value.as_boolean(op)?)),
    }
}
