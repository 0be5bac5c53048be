use std::f64::consts::{E, PI};

use crate::{ast::Expr, error::EvaluationError, interpreter::value::Value};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

impl Expr {
    /// Evaluates the tree and returns the resulting value.
    ///
    /// Evaluation is a pure function of the tree: it reads no global state
    /// and never changes the tree, so the same tree may be evaluated any
    /// number of times, from any number of threads.
    ///
    /// Children are evaluated left to right. `and`, `or` and `?:` only
    /// evaluate the operands they need.
    ///
    /// # Errors
    /// Any [`EvaluationError`]: an operand of the wrong type or an
    /// identifier that names no constant.
    ///
    /// ## Example
    /// ```
    /// use exprtree::{Value, parse};
    ///
    /// let tree = parse("1 < 2 ? 10 : 20").unwrap();
    /// assert_eq!(tree.evaluate().unwrap(), Value::Number(10.0));
    /// ```
    pub fn evaluate(&self) -> EvalResult<Value> {
        match self {
            Self::NumberLiteral { value } => Ok(Value::Number(*value)),
            Self::NamedConstant { name } => Self::eval_constant(name),
            Self::UnaryOp { op, operand } => Self::eval_unary_op(*op, operand),
            Self::BinaryOp { op, left, right } => Self::eval_binary_op(*op, left, right),
            Self::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                Self::eval_conditional(condition, then_branch, else_branch)
            },
            Self::BuiltinCall { function, argument } => Self::eval_builtin(*function, argument),
            Self::UserCall { name,
                             function,
                             argument, } => Self::eval_user_call(name, function, argument),
        }
    }

    /// Resolves a named constant.
    ///
    /// `PI` and `E` are matched exactly; `true` and `false` are stored in
    /// lower case by the parser.
    fn eval_constant(name: &str) -> EvalResult<Value> {
        match name {
            "PI" => Ok(Value::Number(PI)),
            "E" => Ok(Value::Number(E)),
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            _ => Err(EvaluationError::UnresolvedIdentifier { name: name.to_string() }),
        }
    }

    fn eval_conditional(condition: &Self,
                        then_branch: &Self,
                        else_branch: &Self)
                        -> EvalResult<Value> {
        if condition.evaluate()?.as_boolean("?:")? {
            then_branch.evaluate()
        } else {
            else_branch.evaluate()
        }
    }
}
