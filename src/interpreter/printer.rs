use std::fmt;

use crate::ast::Expr;

/// Renders a number the way the printer writes literals: the shortest text
/// that reads back as the same `f64`, always with a fractional part and
/// never in exponent notation.
///
/// Non-finite values come out as `NaN`, `inf` and `-inf`. That text is
/// meant for people; [`Expr`]'s `Display` writes them as divisions instead
/// so that the output still parses.
///
/// ## Example
/// ```
/// use exprtree::interpreter::printer::number_text;
///
/// assert_eq!(number_text(1.0), "1.0");
/// assert_eq!(number_text(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(number_text(1e20), "100000000000000000000.0");
/// ```
#[must_use]
pub fn number_text(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("(0.0 / 0.0)")
    } else if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        write!(f, "{sign}(1.0 / 0.0)")
    } else {
        f.write_str(&number_text(value))
    }
}

/// Canonical text of a tree.
///
/// Every binary operation and conditional is wrapped in exactly one pair of
/// parentheses, so the text re-parses to a tree that evaluates to the same
/// value regardless of the original spacing or grouping.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumberLiteral { value } => write_number(f, *value),
            Self::NamedConstant { name } => f.write_str(name),
            Self::UnaryOp { op, operand } => write!(f, "{op}{operand}"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                write!(f, "({condition} ? {then_branch} : {else_branch})")
            },
            Self::BuiltinCall { function, argument } => write!(f, "{function}({argument})"),
            Self::UserCall { name, argument, .. } => write!(f, "{name}({argument})"),
        }
    }
}
