/// Lexical errors.
///
/// Raised by the tokenizer when a character cannot begin any token. Carries
/// the offending character together with its line and column.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while matching the token stream
/// against the grammar: unexpected tokens, a premature end of input,
/// parentheses nested too deeply and tokens left over after a complete
/// statement.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types raised while evaluating a parsed statement, such
/// as reading an unassigned variable or dividing by zero.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Every way evaluating a single line can fail.
///
/// The four failure kinds of the evaluator stay distinguishable: invalid
/// characters surface as [`EvalError::Lex`], grammar mismatches as
/// [`EvalError::Syntax`], and unknown variables or division by zero as
/// [`EvalError::Runtime`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The input contained a character that does not start any token.
    #[error(transparent)]
    Lex(LexError),
    /// The token stream did not match the grammar.
    #[error(transparent)]
    Syntax(ParseError),
    /// Evaluation of a well-formed statement failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::Lex(lex) => Self::Lex(lex),
            ParseError::Runtime(runtime) => Self::Runtime(runtime),
            other => Self::Syntax(other),
        }
    }
}

impl From<LexError> for EvalError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl EvalError {
    /// Returns the `(line, column)` the failure was reported at.
    ///
    /// # Example
    /// ```
    /// use reckon::{Environment, parse_and_evaluate};
    ///
    /// let mut environment = Environment::new();
    /// let err = parse_and_evaluate("1 +\n  $", &mut environment).unwrap_err();
    ///
    /// assert_eq!(err.position(), (2, 3));
    /// ```
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::Lex(e) => (e.line, e.column),
            Self::Syntax(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}
