use crate::{
    ast::{BinaryOperator, Expr},
    error::EvaluationError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

impl Expr {
    /// Evaluates a binary node.
    ///
    /// `and` and `or` receive their right operand unevaluated so they can
    /// skip it; every other operator evaluates left, then right.
    pub(crate) fn eval_binary_op(op: BinaryOperator,
                                 left: &Self,
                                 right: &Self)
                                 -> EvalResult<Value> {
        match op {
            BinaryOperator::And | BinaryOperator::Or => Self::eval_logic(op, left, right),
            _ => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                eval_binary(op, &left, &right)
            },
        }
    }

    /// Evaluates `and`/`or` with short-circuiting.
    ///
    /// The right operand is not evaluated when the left one decides the
    /// result, so `false and x` is `false` even if `x` would fail.
    fn eval_logic(op: BinaryOperator, left: &Self, right: &Self) -> EvalResult<Value> {
        let left = left.evaluate()?.as_boolean(op)?;
        match (op, left) {
            (BinaryOperator::And, false) => Ok(Value::Boolean(false)),
            (BinaryOperator::Or, true) => Ok(Value::Boolean(true)),
            _ => Ok(Value::Boolean(right.evaluate()?.as_boolean(op)?)),
        }
    }
}

/// Evaluates a binary operation on two already evaluated operands.
///
/// - Arithmetic (`+ - * /`) and ordering (`< <= > >=`) need two numbers and
///   follow IEEE-754: `1 / 0` is infinity, and every ordering involving NaN
///   is `false`.
/// - `==` and `!=` need two numbers or two booleans. Numbers compare by
///   IEEE equality, so `NaN != NaN`.
/// - `and` and `or` need two booleans. Both operands are already evaluated
///   here, so nothing is skipped.
///
/// # Errors
/// - [`EvaluationError::TypeMismatch`] if an operand has the wrong type.
/// - [`EvaluationError::MismatchedOperands`] if `==`/`!=` gets a number and
///   a boolean.
///
/// ## Example
/// ```
/// use exprtree::{Value, ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::Number(1.0), &Value::Number(2.0));
/// assert_eq!(sum.unwrap(), Value::Number(3.0));
///
/// let eq = eval_binary(BinaryOperator::Equal, &Value::Boolean(true), &Value::Number(1.0));
/// assert!(eq.is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
    };

    match op {
        Add | Sub | Mul | Div => {
            let (a, b) = (left.as_number(op)?, right.as_number(op)?);
            Ok(Value::Number(match op {
                                 Add => a + b,
                                 Sub => a - b,
                                 Mul => a * b,
                                 _ => a / b,
                             }))
        },
        Less | LessEqual | Greater | GreaterEqual => {
            let (a, b) = (left.as_number(op)?, right.as_number(op)?);
            Ok(Value::Boolean(match op {
                                  Less => a < b,
                                  LessEqual => a <= b,
                                  Greater => a > b,
                                  _ => a >= b,
                              }))
        },
        Equal | NotEqual => {
            let equal = values_equal(op, left, right)?;
            Ok(Value::Boolean(if op == Equal { equal } else { !equal }))
        },
        And | Or => {
            let (a, b) = (left.as_boolean(op)?, right.as_boolean(op)?);
            Ok(Value::Boolean(if op == And { a && b } else { a || b }))
        },
    }
}

#[allow(clippy::float_cmp)]
fn values_equal(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<bool> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(a == b),
        (Value::Boolean(a), Value::Boolean(b)) => Ok(a == b),
        _ => Err(EvaluationError::MismatchedOperands { operator: op.to_string(),
                                                       left:     left.kind(),
                                                       right:    right.kind(), }),
    }
}
