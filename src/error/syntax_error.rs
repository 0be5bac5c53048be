use thiserror::Error;

/// Represents all errors that can occur during tokenizing or parsing.
///
/// A syntax error is never partially applied: when one is returned no tree
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A character that starts no token.
    #[error("Error at {position}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// A single `=`; the language only knows `==`.
    #[error("Error at {position}: Expected '==' for equality comparison.")]
    ExpectedDoubleEquals {
        /// Byte offset of the `=`.
        position: usize,
    },
    /// A token that cannot start an operand.
    #[error("Error at {position}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// Text of the token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// The input ended where an operand was required.
    #[error("Error at {position}: Unexpected end of expression.")]
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A required token (`)`, `:` or `(`) was not found.
    #[error("Error at {position}: Expected '{expected}' {context}, found {found}.")]
    ExpectedToken {
        /// The token that was required.
        expected: &'static str,
        /// Where the token was required, e.g. `after expression`.
        context:  String,
        /// Description of what was found instead.
        found:    String,
        /// Byte offset of the token found instead.
        position: usize,
    },
    /// A complete expression was followed by more tokens.
    #[error("Error at {position}: Unexpected characters after expression: '{token}'.")]
    TrailingInput {
        /// Text of the first unconsumed token.
        token:    String,
        /// Byte offset of that token.
        position: usize,
    },
    /// A second comparison operator was applied to a comparison, as in
    /// `a == b == c`.
    #[error("Error at {position}: Comparison operators cannot be chained: '{operator}'.")]
    ChainedComparison {
        /// The second operator.
        operator: String,
        /// Byte offset of the second operator.
        position: usize,
    },
    /// The expression nests deeper than the parser allows.
    #[error("Error at {position}: Expression nesting exceeds the limit of {limit}.")]
    NestingTooDeep {
        /// The configured nesting limit.
        limit:    usize,
        /// Byte offset of the token that crossed the limit.
        position: usize,
    },
}

impl SyntaxError {
    /// Gets the byte offset the error refers to.
    ///
    /// ## Example
    /// ```
    /// use exprtree::parse;
    ///
    /// let err = parse("1 + 2 3").unwrap_err();
    /// assert_eq!(err.position(), 6);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::ExpectedDoubleEquals { position }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedToken { position, .. }
            | Self::TrailingInput { position, .. }
            | Self::ChainedComparison { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}
