use thiserror::Error;

use crate::interpreter::value::ValueKind;

/// Represents all errors that can occur while evaluating a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// An operand had the wrong kind for its operator.
    #[error("Type error: '{operator}' expects {expected}, but found {found}.")]
    TypeMismatch {
        /// The operator being applied, e.g. `+` or `?:`.
        operator: String,
        /// The kind the operator requires.
        expected: ValueKind,
        /// The kind the operand evaluated to.
        found:    ValueKind,
    },
    /// An equality operator was applied to a number and a boolean.
    #[error("Type error: cannot compare {left} {operator} {right}.")]
    MismatchedOperands {
        /// The equality operator.
        operator: String,
        /// Kind of the left operand.
        left:     ValueKind,
        /// Kind of the right operand.
        right:    ValueKind,
    },
    /// A function received a non-numeric argument.
    #[error("Type error: function '{function}' expects a number argument, but got {found}.")]
    NonNumericArgument {
        /// Name of the called function.
        function: String,
        /// Kind the argument evaluated to.
        found:    ValueKind,
    },
    /// A named constant that is neither `PI`, `E`, `true` nor `false`.
    #[error("Unresolved identifier '{name}'.")]
    UnresolvedIdentifier {
        /// The identifier.
        name: String,
    },
}
