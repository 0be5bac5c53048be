use std::fmt;

use logos::Logos;
use tracing::{debug, trace};

use crate::error::SyntaxError;

/// The kind of a lexical token.
///
/// Keywords (`and`, `or`, `true`, `false`) are matched without regard to
/// case; everything else is case-sensitive.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Numeric literal tokens, such as `3.14`, `.5` or `5.`.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    #[regex(r"\.[0-9]+")]
    Number,
    /// A name: a constant such as `PI` or a function such as `sin`. Any
    /// Unicode letter may start a name, and letters or decimal digits may
    /// follow.
    #[regex(r"\p{L}[\p{L}\p{Nd}]*", classify_word)]
    Identifier,
    /// `true` or `false`, in any case.
    BooleanLiteral,
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Subtract,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `!`
    #[token("!")]
    Not,
    /// `and`, in any case.
    And,
    /// `or`, in any case.
    Or,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    Unequal,
    /// `<`
    #[token("<")]
    Lt,
    /// `<=`
    #[token("<=")]
    Lte,
    /// `>`
    #[token(">")]
    Gt,
    /// `>=`
    #[token(">=")]
    Gte,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// Marks the end of the input; always the last token.
    EndOfInput,
}

/// A token together with its source text and byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The exact source text, empty for [`TokenKind::EndOfInput`].
    pub text:     String,
    /// Byte offset of the first character in the source.
    pub position: usize,
}

impl Token {
    /// Creates the end-of-input marker for a source of `length` bytes.
    #[must_use]
    pub const fn end_of_input(length: usize) -> Self {
        Self { kind:     TokenKind::EndOfInput,
               text:     String::new(),
               position: length, }
    }
}

/// Describes the token for error messages: its quoted text, or
/// `end of input`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Turns a word matched by the identifier pattern into a keyword token when
/// it spells one.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The keyword's kind, or [`TokenKind::Identifier`].
fn classify_word(lex: &logos::Lexer<TokenKind>) -> TokenKind {
    let word = lex.slice();
    if word.eq_ignore_ascii_case("and") {
        TokenKind::And
    } else if word.eq_ignore_ascii_case("or") {
        TokenKind::Or
    } else if word.eq_ignore_ascii_case("true") || word.eq_ignore_ascii_case("false") {
        TokenKind::BooleanLiteral
    } else {
        TokenKind::Identifier
    }
}

/// Splits source text into tokens.
///
/// Whitespace is skipped. The returned vector always ends with exactly one
/// [`TokenKind::EndOfInput`] token positioned at `source.len()`.
///
/// # Errors
/// - [`SyntaxError::ExpectedDoubleEquals`] for a lone `=`.
/// - [`SyntaxError::UnexpectedCharacter`] for any character that starts no
///   token.
///
/// ## Example
/// ```
/// use exprtree::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<TokenKind> = tokenize("1 AND x").unwrap().iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::And, TokenKind::Identifier, TokenKind::EndOfInput]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let position = lexer.span().start;
        let text = lexer.slice();

        let Ok(kind) = result else {
            return Err(match text.chars().next() {
                Some('=') => SyntaxError::ExpectedDoubleEquals { position },
                Some(character) => SyntaxError::UnexpectedCharacter { character, position },
                None => SyntaxError::UnexpectedEndOfInput { position },
            });
        };

        trace!(?kind, text, position, "token");
        tokens.push(Token { kind,
                            text: text.to_string(),
                            position });
    }

    tokens.push(Token::end_of_input(source.len()));
    debug!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}
