/// Parser state, token cursor and the entry points.
///
/// Holds the [`core::Parser`] type, the conditional (`?:`) level, the
/// nesting guard and the check that the whole input was consumed.
pub mod core;

/// Infix operator levels.
///
/// One method per precedence level, from `or` down to `*` and `/`.
/// Arithmetic and logical levels fold left; comparison levels accept a
/// single operator.
pub mod binary;

/// Prefix operators and primary expressions.
///
/// Handles `-` and `!`, literals, constants, parenthesized groups and
/// function calls.
pub mod unary;
