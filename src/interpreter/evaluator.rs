/// Core evaluation logic.
///
/// Contains the entry point [`Expr::evaluate`](crate::ast::Expr::evaluate),
/// constants and conditionals.
pub mod core;

/// Unary operator evaluation logic.
///
/// Arithmetic negation and logical NOT.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Arithmetic, comparisons and equality on evaluated operands, plus the
/// short-circuiting `and` and `or`.
pub mod binary;

/// Function evaluation.
///
/// Calls of built-in and registered functions.
pub mod function;
