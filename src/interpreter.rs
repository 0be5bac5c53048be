/// The evaluator module computes the value of a tree.
///
/// Evaluation walks the tree depth first and left to right. It is pure: the
/// tree is only read, and no state outlives a call.
///
/// # Responsibilities
/// - Applies arithmetic, comparison and logical operators.
/// - Short-circuits `and`, `or` and the conditional.
/// - Reports type errors and unknown identifiers.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw text and produces a vector of tokens, each with
/// its kind, its text and its byte offset. It is the first stage of parsing.
///
/// # Responsibilities
/// - Recognizes numbers, names, keywords, operators and brackets.
/// - Skips whitespace.
/// - Reports characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive descent parser with one level per precedence tier. Function
/// names are resolved against a [`registry::FunctionRegistry`] while the
/// tree is built.
///
/// # Responsibilities
/// - Converts tokens into [`Expr`](crate::ast::Expr) nodes.
/// - Enforces precedence, associativity and the nesting limit.
/// - Reports syntax errors with the offending token's position.
pub mod parser;
/// Renders trees back to text.
///
/// Implements `Display` for [`Expr`](crate::ast::Expr): fully parenthesized
/// canonical text that parses back to an equivalent tree.
pub mod printer;
/// The table of functions registered by the host program.
pub mod registry;
/// The value module defines the results of evaluation.
///
/// A value is a number or a boolean.
pub mod value;
