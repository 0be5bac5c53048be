//! # exprtree
//!
//! exprtree reads arithmetic and boolean expressions such as
//! `sin(PI / 2) > 0.5 ? 1 : -1`, builds them into a syntax tree, evaluates
//! the tree and prints it back as canonical text.
//!
//! The language has numbers, the constants `PI`, `E`, `true` and `false`,
//! the operators `+ - * /`, comparisons, `and`/`or`/`!`, the conditional
//! `?:`, six built-in functions and any number of `f64 -> f64` functions
//! registered by the host program.
//!
//! ```
//! use exprtree::{ExpressionParser, Value};
//!
//! let mut parser = ExpressionParser::new();
//! parser.register_function("cube", |x| x * x * x);
//!
//! let tree = parser.parse("cube(2) * 3 == 24").unwrap();
//!
//! assert_eq!(tree.evaluate().unwrap(), Value::Boolean(true));
//! assert_eq!(tree.to_string(), "((cube(2.0) * 3.0) == 24.0)");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::parser::core::{DEFAULT_MAX_DEPTH, Parser};
pub use crate::{
    ast::Expr,
    error::{EditError, Error, EvaluationError, SyntaxError},
    interpreter::{lexer::tokenize, registry::FunctionRegistry, value::Value},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum, its operators and the function
/// handles bound into call nodes, plus the inspection and edit operations
/// used by tree editors.
///
/// # Responsibilities
/// - Defines one node variant per language construct.
/// - Owns children by value, so a tree is a plain tree with no sharing.
/// - Exposes node labels and children for visualizers.
pub mod ast;
/// Provides the error types for parsing, evaluation and editing.
///
/// Every failure mode is a variant carrying the details needed to report it:
/// source positions for syntax errors, the involved types for evaluation
/// errors.
pub mod error;
/// Tokenizer, parser, evaluator, printer and function registry.
///
/// This module holds the phases that turn text into a tree and a tree into a
/// value or text again.
pub mod interpreter;

/// Parses expressions against a set of registered functions.
///
/// Functions must be registered before the expressions that call them are
/// parsed; each call node keeps the function it was bound to, so trees
/// already built are unaffected by later registrations.
///
/// ## Example
/// ```
/// use exprtree::{ExpressionParser, Value};
///
/// let mut parser = ExpressionParser::new();
/// parser.register_function("atan", f64::atan);
///
/// let tree = parser.parse("4 * atan(1)").unwrap();
/// let Value::Number(pi) = tree.evaluate().unwrap() else { panic!() };
/// assert!((pi - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct ExpressionParser {
    registry:  FunctionRegistry,
    max_depth: usize,
}

impl Default for ExpressionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionParser {
    /// Creates a parser with no registered functions and the default
    /// nesting limit.
    #[must_use]
    pub fn new() -> Self {
        Self { registry:  FunctionRegistry::new(),
               max_depth: DEFAULT_MAX_DEPTH, }
    }

    /// Sets how deeply expressions may nest before
    /// [`SyntaxError::NestingTooDeep`] is returned.
    ///
    /// The limit applies to the recursion of the parser (parentheses, calls,
    /// conditionals and prefix operators) and to the height of the finished
    /// tree, so `1 + 1 + 1` counts three levels. Evaluation, printing and
    /// dropping a tree recurse once per level; raising the limit far above
    /// the default needs a correspondingly larger thread stack for those.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Registers a function callable as `name(argument)` in expressions
    /// parsed afterwards. Registering a name again replaces the function.
    pub fn register_function<F>(&mut self, name: impl Into<String>, function: F)
        where F: Fn(f64) -> f64 + Send + Sync + 'static
    {
        self.registry.register(name, function);
    }

    /// The functions registered so far.
    #[must_use]
    pub const fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Parses `text` into a tree.
    ///
    /// # Errors
    /// A [`SyntaxError`] if the text is not a single well-formed expression.
    pub fn parse(&self, text: &str) -> Result<Expr, SyntaxError> {
        let tokens = tokenize(text)?;
        Parser::new(&tokens, &self.registry).with_max_depth(self.max_depth)
                                             .parse()
    }
}

/// Parses `text` with no registered functions.
///
/// # Errors
/// A [`SyntaxError`] if the text is not a single well-formed expression.
///
/// ## Example
/// ```
/// let tree = exprtree::parse("1 + 2 * 3").unwrap();
/// assert_eq!(exprtree::visit(&tree), "(1.0 + (2.0 * 3.0))");
/// ```
pub fn parse(text: &str) -> Result<Expr, SyntaxError> {
    ExpressionParser::new().parse(text)
}

/// Evaluates a tree. Equivalent to [`Expr::evaluate`].
///
/// # Errors
/// An [`EvaluationError`] if an operand has the wrong type or an identifier
/// names no constant.
pub fn evaluate(expr: &Expr) -> Result<Value, EvaluationError> {
    expr.evaluate()
}

/// Renders a tree as canonical text. Equivalent to `expr.to_string()`.
#[must_use]
pub fn visit(expr: &Expr) -> String {
    expr.to_string()
}

/// Parses and evaluates `source` in one step.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use exprtree::{Value, get_result};
///
/// assert_eq!(get_result("2 + 2").unwrap(), Value::Number(4.0));
///
/// // `x` names no constant.
/// assert!(get_result("x + 1").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Value, Error> {
    let tree = parse(source)?;
    Ok(tree.evaluate()?)
}
