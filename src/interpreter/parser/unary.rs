use crate::{
    ast::{BuiltinFunction, Expr, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses prefix `-` and `!`, which may repeat: `--x`, `!!b`, `-!x`.
    ///
    /// The rule is: `unary := ("-" | "!") unary | primary`
    pub(crate) fn parse_unary(&mut self) -> ParseResult<Expr> {
        let op = match self.peek().kind {
            TokenKind::Subtract => UnaryOperator::Negate,
            TokenKind::Not => UnaryOperator::Not,
            _ => return self.parse_primary(),
        };
        let position = self.advance().position;

        self.enter()?;
        let operand = self.parse_unary()?;
        self.leave();
        self.grow(self.height(), position)?;

        Ok(Expr::UnaryOp { op,
                           operand: Box::new(operand) })
    }

    /// Parses a primary expression: a literal, a name, a call or a
    /// parenthesized group.
    ///
    /// # Errors
    /// - [`SyntaxError::UnexpectedEndOfInput`] if the input ends here.
    /// - [`SyntaxError::UnexpectedToken`] for any token that cannot start an
    ///   operand.
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Expr> {
        let token = self.advance();
        match token.kind {
            TokenKind::Number => {
                let value = token.text
                                 .parse::<f64>()
                                 .map_err(|_| SyntaxError::UnexpectedToken { token:    token.text.clone(),
                                                                             position: token.position, })?;
                self.leaf();
                Ok(Expr::NumberLiteral { value })
            },
            TokenKind::BooleanLiteral => {
                self.leaf();
                Ok(Expr::NamedConstant { name: token.text.to_ascii_lowercase() })
            },
            TokenKind::Identifier => self.parse_identifier(token),
            TokenKind::LParen => {
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen, ")", "after expression")?;
                Ok(expr)
            },
            TokenKind::EndOfInput => {
                Err(SyntaxError::UnexpectedEndOfInput { position: token.position })
            },
            _ => Err(SyntaxError::UnexpectedToken { token:    token.text,
                                                    position: token.position, }),
        }
    }

    /// Resolves an identifier.
    ///
    /// Built-in names are checked first, then the registry. A match must be
    /// followed by a parenthesized argument. Any other name becomes a
    /// [`Expr::NamedConstant`] and whatever follows it is left for the
    /// caller, so `foo(1)` with an unregistered `foo` fails as trailing
    /// input.
    fn parse_identifier(&mut self, token: Token) -> ParseResult<Expr> {
        let Token { text: name, position, .. } = token;

        if let Some(function) = BuiltinFunction::from_name(&name) {
            let argument = self.parse_call_argument(&name)?;
            self.grow(self.height(), position)?;
            return Ok(Expr::BuiltinCall { function,
                                          argument: Box::new(argument) });
        }

        if let Some(function) = self.registry().get(&name).cloned() {
            let argument = self.parse_call_argument(&name)?;
            self.grow(self.height(), position)?;
            return Ok(Expr::UserCall { name,
                                       function,
                                       argument: Box::new(argument) });
        }

        self.leaf();
        Ok(Expr::NamedConstant { name })
    }

    /// Parses `"(" expression ")"` after a function name.
    fn parse_call_argument(&mut self, name: &str) -> ParseResult<Expr> {
        self.expect(TokenKind::LParen, "(", &format!("after function name '{name}'"))?;
        let argument = self.parse_expression()?;
        self.expect(TokenKind::RParen, ")", &format!("to close the call to '{name}'"))?;
        Ok(argument)
    }
}
