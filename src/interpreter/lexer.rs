use logos::Logos;

use crate::{
    error::LexError,
    interpreter::token::{Position, Token, TokenKind},
};

/// Raw tokens recognized by the generated lexer.
///
/// Whitespace and newlines never reach the [`Tokenizer`]; the newline
/// callback only updates the line bookkeeping in [`LexerExtras`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum RawToken {
    #[regex(r"[0-9]+")]
    Number,
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Multiply,
    #[token("/")]
    Divide,
    #[token("=")]
    Equals,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and form feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl RawToken {
    /// The public kind of this token, or `None` for the skipped ones.
    const fn kind(self) -> Option<TokenKind> {
        let kind = match self {
            Self::Number => TokenKind::Number,
            Self::Identifier => TokenKind::Identifier,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Multiply => TokenKind::Multiply,
            Self::Divide => TokenKind::Divide,
            Self::Equals => TokenKind::Equals,
            Self::Semicolon => TokenKind::Semicolon,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::NewLine | Self::Ignored => return None,
        };
        Some(kind)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset at which it starts, so
/// columns can be derived from token spans.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Turns one line of input into tokens on demand.
///
/// Tokens are produced lazily by [`Tokenizer::next_token`]. Once the input is
/// exhausted every further call yields [`TokenKind::EndOfInput`] at the same
/// position.
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::Tokenizer, token::TokenKind};
///
/// let mut tokenizer = Tokenizer::new("x = 4");
///
/// assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::Identifier);
/// assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::Equals);
/// assert_eq!(tokenizer.next_token().unwrap().lexeme, "4");
/// assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::EndOfInput);
/// assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::EndOfInput);
/// ```
pub struct Tokenizer<'src> {
    source:    &'src str,
    lexer:     logos::Lexer<'src, RawToken>,
    exhausted: bool,
}

impl<'src> Tokenizer<'src> {
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               lexer: RawToken::lexer(source),
               exhausted: false }
    }

    /// Returns the next token, or [`TokenKind::EndOfInput`] once nothing is
    /// left.
    ///
    /// # Errors
    /// Returns a [`LexError`] when the next non-whitespace character cannot
    /// start a token. The offending character is skipped, so a later call
    /// resumes after it.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        if self.exhausted {
            return Ok(self.end_of_input());
        }

        loop {
            match self.lexer.next() {
                Some(Ok(raw)) => {
                    let Some(kind) = raw.kind() else {
                        continue;
                    };
                    let token = Token { kind,
                                        lexeme: self.lexer.slice(),
                                        position: self.position_of(self.lexer.span().start) };
                    log::trace!("token {token}");
                    return Ok(token);
                },
                Some(Err(())) => {
                    let start = self.lexer.span().start;
                    let position = self.position_of(start);
                    let character = self.source
                                        .get(start..)
                                        .and_then(|rest| rest.chars().next())
                                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(LexError { character,
                                          line: position.line,
                                          column: position.column });
                },
                None => {
                    self.exhausted = true;
                    return Ok(self.end_of_input());
                },
            }
        }
    }

    fn end_of_input(&self) -> Token<'src> {
        Token { kind:     TokenKind::EndOfInput,
                lexeme:   "",
                position: self.position_of(self.source.len()), }
    }

    /// Converts a byte offset on the current line into a character-based
    /// position.
    fn position_of(&self, offset: usize) -> Position {
        let extras = &self.lexer.extras;
        let column = self.source
                         .get(extras.line_start..offset)
                         .map_or(0, |prefix| prefix.chars().count());
        Position::new(extras.line, column + 1)
    }
}

/// Yields every token up to, but not including, [`TokenKind::EndOfInput`].
///
/// Lexical errors are yielded in place and iteration continues after the
/// offending character.
impl<'src> Iterator for Tokenizer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is(TokenKind::EndOfInput) => None,
            other => Some(other),
        }
    }
}
