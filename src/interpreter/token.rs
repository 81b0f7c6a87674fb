use std::fmt;

/// The kind of a lexical token.
///
/// Every kind except [`TokenKind::Identifier`] and [`TokenKind::Number`] maps
/// to exactly one lexeme, and [`TokenKind::EndOfInput`] to the empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer literal made of ASCII digits, such as `42`.
    Number,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// Variable names such as `x` or `_total2`.
    Identifier,
    /// `=`
    Equals,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Produced once the input is exhausted, and on every request after that.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "NUMBER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Identifier => "IDENTIFIER",
            Self::Equals => "EQUALS",
            Self::Semicolon => "SEMICOLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::EndOfInput => "END_OF_INPUT",
        };
        write!(f, "{name}")
    }
}

/// A 1-based line and column in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column in characters, starting at 1.
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A lexical token borrowed from the line it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// What the token is.
    pub kind:     TokenKind,
    /// The exact source text, empty for [`TokenKind::EndOfInput`].
    pub lexeme:   &'src str,
    /// Where the token starts.
    pub position: Position,
}

impl Token<'_> {
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lexeme.is_empty() {
            write!(f, "{} {}", self.kind, self.position)
        } else {
            write!(f, "{} {} {}", self.kind, self.lexeme, self.position)
        }
    }
}
