use thiserror::Error;

/// Represents the failures of in-place tree edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A value edit was applied to a node that is not a number literal.
    #[error("Only number literals can be assigned a value, found {found}.")]
    NotANumberLiteral {
        /// Label of the node the edit was applied to.
        found: String,
    },
    /// A rebind was applied to a node that is not a function call.
    #[error("Only function calls can be rebound, found {found}.")]
    NotAFunctionCall {
        /// Label of the node the edit was applied to.
        found: String,
    },
    /// The new name is neither a built-in nor a registered function.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The requested name.
        name: String,
    },
}
