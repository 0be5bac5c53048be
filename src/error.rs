use thiserror::Error;

/// Syntax errors.
///
/// Defines every failure that can occur while tokenizing or parsing an
/// expression. Each variant carries the byte offset of the offending
/// character or token so callers can point at the exact spot in the source.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains the errors raised while walking a finished tree: operand kind
/// mismatches, non-numeric function arguments and unresolved identifiers.
/// The grammar does not separate numeric from boolean sub-expressions, so
/// these are only detectable at evaluation time.
pub mod evaluation_error;
/// Edit errors.
///
/// Failures of the in-place edit operations used by interactive tree
/// editors.
pub mod edit_error;

pub use edit_error::EditError;
pub use evaluation_error::EvaluationError;
pub use syntax_error::SyntaxError;

/// Any error produced while turning source text into a value.
///
/// Returned by [`crate::get_result`], which runs both phases in one call.
#[derive(Debug, Error)]
pub enum Error {
    /// The source text could not be tokenized or parsed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The tree was built but could not be evaluated.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}
