use crate::error::{LexError, RuntimeError};

/// Represents all errors that can occur while parsing a line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The tokenizer failed while the parser was requesting the next token.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Found a token that does not fit the grammar at this position.
    #[error("Syntax error at line {line}, column {column}: unexpected token '{token}'")]
    UnexpectedToken {
        /// The lexeme of the token encountered.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column where the token starts.
        column: usize,
    },
    /// Reached the end of input while a factor or `)` was still expected.
    #[error("Syntax error at line {line}, column {column}: unexpected end of input")]
    UnexpectedEndOfInput {
        /// The source line where the input ended.
        line:   usize,
        /// The column just past the last character.
        column: usize,
    },
    /// Opened more nested parentheses than the parser accepts.
    #[error("Syntax error at line {line}, column {column}: parentheses nested too deeply")]
    NestingTooDeep {
        /// The source line of the rejected `(`.
        line:   usize,
        /// The column of the rejected `(`.
        column: usize,
    },
    /// Found extra tokens after a complete statement.
    #[error("Syntax error at line {line}, column {column}: unexpected '{token}' after end of statement")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column where the extra token starts.
        column: usize,
    },
    /// Evaluation failed before the parser reached the end of the line.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl ParseError {
    /// Returns the `(line, column)` the error was reported at.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::Lex(LexError { line, column, .. })
            | Self::UnexpectedToken { line, column, .. }
            | Self::UnexpectedEndOfInput { line, column }
            | Self::NestingTooDeep { line, column }
            | Self::UnexpectedTrailingTokens { line, column, .. } => (*line, *column),
            Self::Runtime(e) => e.position(),
        }
    }
}
