use tracing::debug;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        registry::FunctionRegistry,
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// How deeply expressions may nest before parsing is refused.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Remaining stack below which a nested expression is parsed on a fresh
/// segment.
const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_SEGMENT: usize = 2 * 1024 * 1024;

/// Recursive descent parser over a token slice.
///
/// Function names are resolved against the borrowed registry while the tree
/// is built; the registry is not consulted again afterwards.
///
/// Two things are held under the nesting limit: how deeply the parser
/// recurses, and the height of the tree it builds. The second also covers
/// long operator chains such as `1 + 1 + ... + 1`, whose left-deep trees
/// would otherwise be too tall to evaluate, print or drop.
pub struct Parser<'a> {
    tokens:    &'a [Token],
    pos:       usize,
    end:       Token,
    registry:  &'a FunctionRegistry,
    depth:     usize,
    /// Height of the tree most recently returned by a `parse_*` method.
    height:    usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser for `tokens`, as produced by
    /// [`tokenize`](crate::interpreter::lexer::tokenize).
    ///
    /// If the slice does not end with [`TokenKind::EndOfInput`] the parser
    /// behaves as if it did.
    #[must_use]
    pub fn new(tokens: &'a [Token], registry: &'a FunctionRegistry) -> Self {
        let end = match tokens.last() {
            Some(last) if last.kind == TokenKind::EndOfInput => last.clone(),
            Some(last) => Token::end_of_input(last.position + last.text.len()),
            None => Token::end_of_input(0),
        };
        Self { tokens,
               pos: 0,
               end,
               registry,
               depth: 0,
               height: 0,
               max_depth: DEFAULT_MAX_DEPTH }
    }

    /// Sets the nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses the whole token stream into one expression.
    ///
    /// Grammar:
    /// ```text
    /// expression     := or ( "?" expression ":" expression )?
    /// or             := and ( "or" and )*
    /// and            := equality ( "and" equality )*
    /// equality       := relational ( ( "==" | "!=" ) relational )?
    /// relational     := additive ( ( "<" | "<=" | ">" | ">=" ) additive )?
    /// additive       := multiplicative ( ( "+" | "-" ) multiplicative )*
    /// multiplicative := unary ( ( "*" | "/" ) unary )*
    /// unary          := ( "-" | "!" ) unary | primary
    /// primary        := NUMBER | BOOLEAN | "(" expression ")"
    ///                 | BUILTIN "(" expression ")"
    ///                 | REGISTERED "(" expression ")"
    ///                 | IDENTIFIER
    /// ```
    ///
    /// # Errors
    /// Any [`SyntaxError`] raised while parsing, or
    /// [`SyntaxError::TrailingInput`] if tokens remain after a complete
    /// expression.
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;

        let next = self.peek();
        if next.kind != TokenKind::EndOfInput {
            return Err(SyntaxError::TrailingInput { token:    next.text.clone(),
                                                    position: next.position, });
        }

        debug!(tree = %expr, "parsed expression");
        Ok(expr)
    }

    /// Parses a full expression, including a trailing conditional.
    ///
    /// Both branches of a conditional are full expressions, so `?:` nests
    /// to the right: `a ? b : c ? d : e` is `a ? b : (c ? d : e)`.
    ///
    /// Each nested expression gets a fresh stack segment when the current
    /// one runs low, so the nesting limit holds on small thread stacks too.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || self.parse_conditional())
    }

    fn parse_conditional(&mut self) -> ParseResult<Expr> {
        self.enter()?;
        let condition = self.parse_logical_or()?;

        let expr = if self.check(TokenKind::Question) {
            let position = self.advance().position;
            let mut height = self.height;
            let then_branch = self.parse_expression()?;
            height = height.max(self.height);
            self.expect(TokenKind::Colon, ":", "in conditional expression")?;
            let else_branch = self.parse_expression()?;
            self.grow(height.max(self.height), position)?;
            Expr::Conditional { condition:   Box::new(condition),
                                then_branch: Box::new(then_branch),
                                else_branch: Box::new(else_branch), }
        } else {
            condition
        };

        self.leave();
        Ok(expr)
    }

    /// Counts one level of nesting, failing once the limit is crossed.
    pub(crate) fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(SyntaxError::NestingTooDeep { limit:    self.max_depth,
                                                     position: self.peek().position, });
        }
        Ok(())
    }

    pub(crate) const fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Records that a leaf node was just built.
    pub(crate) const fn leaf(&mut self) {
        self.height = 1;
    }

    /// Records that a node was just built over children at most
    /// `child_height` high.
    ///
    /// # Errors
    /// [`SyntaxError::NestingTooDeep`] at `position`, the node's operator or
    /// function name, if the tree is now taller than the limit.
    pub(crate) fn grow(&mut self, child_height: usize, position: usize) -> ParseResult<()> {
        self.height = child_height + 1;
        if self.height > self.max_depth {
            return Err(SyntaxError::NestingTooDeep { limit: self.max_depth,
                                                     position });
        }
        Ok(())
    }

    /// Height of the tree most recently parsed.
    pub(crate) const fn height(&self) -> usize {
        self.height
    }

    /// The registry calls are resolved against.
    pub(crate) const fn registry(&self) -> &'a FunctionRegistry {
        self.registry
    }

    /// Peeks at the current token without consuming it.
    pub(crate) fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.end)
    }

    /// Consumes the current token and returns it. The end-of-input token is
    /// never consumed.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::EndOfInput {
            self.pos += 1;
        }
        token
    }

    /// Whether the current token has the given kind.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes a token of the given kind or fails with
    /// [`SyntaxError::ExpectedToken`].
    ///
    /// # Parameters
    /// - `kind`: The required kind.
    /// - `expected`: Its text, for the error message.
    /// - `context`: Where it was required, for the error message.
    pub(crate) fn expect(&mut self,
                         kind: TokenKind,
                         expected: &'static str,
                         context: &str)
                         -> ParseResult<Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        let found = self.peek();
        Err(SyntaxError::ExpectedToken { expected,
                                         context: context.to_string(),
                                         found: found.to_string(),
                                         position: found.position })
    }
}
