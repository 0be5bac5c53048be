use std::fmt;

use crate::{error::EvaluationError, interpreter::printer::number_text};

/// The result of evaluating an expression.
///
/// Arithmetic and function calls produce numbers; comparisons, logical
/// operators and the boolean constants produce booleans.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value {
    /// A double-precision floating-point number.
    Number(f64),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
}

/// The runtime type of a [`Value`], used in error reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// See [`Value::Number`].
    Number,
    /// See [`Value::Boolean`].
    Boolean,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl Value {
    /// Returns the runtime type of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Converts the value to an `f64`, or returns an error if it is a boolean.
    ///
    /// # Parameters
    /// - `operator`: The operator or function that needs the number, named
    ///   in the error.
    ///
    /// # Errors
    /// [`EvaluationError::TypeMismatch`] if the value is not a number.
    ///
    /// ## Example
    /// ```
    /// use exprtree::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number("+").unwrap(), 2.5);
    /// assert!(Value::Boolean(true).as_number("+").is_err());
    /// ```
    pub fn as_number(&self, operator: impl fmt::Display) -> Result<f64, EvaluationError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Boolean(_) => Err(EvaluationError::TypeMismatch { operator: operator.to_string(),
                                                                    expected: ValueKind::Number,
                                                                    found:    self.kind(), }),
        }
    }

    /// Converts the value to `bool`, or returns an error if it is a number.
    ///
    /// # Errors
    /// [`EvaluationError::TypeMismatch`] if the value is not a boolean.
    pub fn as_boolean(&self, operator: impl fmt::Display) -> Result<bool, EvaluationError> {
        match self {
            Self::Boolean(b) => Ok(*b),
            Self::Number(_) => Err(EvaluationError::TypeMismatch { operator: operator.to_string(),
                                                                   expected: ValueKind::Boolean,
                                                                   found:    self.kind(), }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&number_text(*n)),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}
