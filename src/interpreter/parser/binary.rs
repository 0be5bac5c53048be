use crate::{
    ast::{BinaryOperator, Expr},
    error::SyntaxError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses logical OR expressions.
    ///
    /// The rule is: `or := and ("or" and)*`
    pub(crate) fn parse_logical_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_logical_and()?;
        while self.check(TokenKind::Or) {
            let position = self.advance().position;
            let left_height = self.height();
            let right = self.parse_logical_and()?;
            self.grow(left_height.max(self.height()), position)?;
            left = Expr::BinaryOp { op:    BinaryOperator::Or,
                                    left:  Box::new(left),
                                    right: Box::new(right), };
        }
        Ok(left)
    }

    /// Parses logical AND expressions.
    ///
    /// The rule is: `and := equality ("and" equality)*`
    pub(crate) fn parse_logical_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_equality()?;
        while self.check(TokenKind::And) {
            let position = self.advance().position;
            let left_height = self.height();
            let right = self.parse_equality()?;
            self.grow(left_height.max(self.height()), position)?;
            left = Expr::BinaryOp { op:    BinaryOperator::And,
                                    left:  Box::new(left),
                                    right: Box::new(right), };
        }
        Ok(left)
    }

    /// Parses `==` and `!=`.
    ///
    /// At most one equality operator is accepted; `a == b == c` is a
    /// [`SyntaxError::ChainedComparison`].
    pub(crate) fn parse_equality(&mut self) -> ParseResult<Expr> {
        self.parse_comparison(is_equality_op, Self::parse_relational)
    }

    /// Parses `<`, `<=`, `>` and `>=`.
    ///
    /// At most one relational operator is accepted.
    pub(crate) fn parse_relational(&mut self) -> ParseResult<Expr> {
        self.parse_comparison(is_relational_op, Self::parse_additive)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub(crate) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;
        loop {
            if let Some(op) = token_to_binary_operator(self.peek().kind)
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                let position = self.advance().position;
                let left_height = self.height();
                let right = self.parse_multiplicative()?;
                self.grow(left_height.max(self.height()), position)?;
                left = Expr::BinaryOp { op,
                                        left: Box::new(left),
                                        right: Box::new(right) };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// The rule is: `multiplicative := unary (("*" | "/") unary)*`
    pub(crate) fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            if let Some(op) = token_to_binary_operator(self.peek().kind)
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
            {
                let position = self.advance().position;
                let left_height = self.height();
                let right = self.parse_unary()?;
                self.grow(left_height.max(self.height()), position)?;
                left = Expr::BinaryOp { op,
                                        left: Box::new(left),
                                        right: Box::new(right) };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Shared shape of the two non-associative comparison levels.
    ///
    /// # Parameters
    /// - `accepts`: Which operators belong to this level.
    /// - `operand`: Parser for the next higher level.
    fn parse_comparison(&mut self,
                        accepts: fn(BinaryOperator) -> bool,
                        operand: fn(&mut Self) -> ParseResult<Expr>)
                        -> ParseResult<Expr> {
        let left = operand(self)?;
        let Some(op) = token_to_binary_operator(self.peek().kind).filter(|op| accepts(*op)) else {
            return Ok(left);
        };
        let position = self.advance().position;
        let left_height = self.height();
        let right = operand(self)?;

        let next = self.peek();
        if token_to_binary_operator(next.kind).is_some_and(accepts) {
            return Err(SyntaxError::ChainedComparison { operator: next.text.clone(),
                                                        position: next.position, });
        }

        self.grow(left_height.max(self.height()), position)?;
        Ok(Expr::BinaryOp { op,
                            left: Box::new(left),
                            right: Box::new(right) })
    }
}

/// Converts a token kind to a binary operator, if applicable.
///
/// # Returns
/// `Some(BinaryOperator)` if the token is an infix operator; otherwise
/// `None`.
///
/// ## Example
/// ```
/// use exprtree::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Lte), Some(BinaryOperator::LessEqual));
/// assert_eq!(token_to_binary_operator(TokenKind::Not), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
    };
    match kind {
        TokenKind::Add => Some(Add),
        TokenKind::Subtract => Some(Sub),
        TokenKind::Multiply => Some(Mul),
        TokenKind::Divide => Some(Div),
        TokenKind::And => Some(And),
        TokenKind::Or => Some(Or),
        TokenKind::Equal => Some(Equal),
        TokenKind::Unequal => Some(NotEqual),
        TokenKind::Lt => Some(Less),
        TokenKind::Lte => Some(LessEqual),
        TokenKind::Gt => Some(Greater),
        TokenKind::Gte => Some(GreaterEqual),
        _ => None,
    }
}

const fn is_equality_op(op: BinaryOperator) -> bool {
    matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
}

const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::LessEqual
             | BinaryOperator::Greater
             | BinaryOperator::GreaterEqual)
}
