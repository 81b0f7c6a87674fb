use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        environment::Environment,
        lexer::Tokenizer,
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting a line may use.
pub const MAX_NESTING_DEPTH: usize = 128;

/// A recursive-descent parser over a single line.
///
/// The parser always holds exactly one current token. A second token can be
/// peeked to tell an assignment from an expression that starts with a
/// variable; it is buffered and handed out by the next advance.
///
/// A parser built with [`Parser::with_environment`] also checks variable
/// reads and divisors while it reduces them, so the first failure in reading
/// order is the one reported, whether it is a syntax or a runtime error.
pub struct Parser<'src, 'env> {
    tokenizer:   Tokenizer<'src>,
    current:     Token<'src>,
    lookahead:   Option<Token<'src>>,
    environment: Option<&'env Environment>,
    /// Number of currently open parentheses.
    pub(in crate::interpreter::parser) depth: usize,
}

impl<'src, 'env> Parser<'src, 'env> {
    /// Creates a parser over `source` and reads its first token.
    ///
    /// # Errors
    /// Returns [`ParseError::Lex`] if the first token is invalid.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut tokenizer = Tokenizer::new(source);
        let current = tokenizer.next_token()?;

        Ok(Self { tokenizer,
                  current,
                  lookahead: None,
                  environment: None,
                  depth: 0 })
    }

    /// Creates a parser that evaluates against `environment` as it goes.
    ///
    /// The environment is only read. An unassigned variable or a zero
    /// divisor fails the parse at the token where it is found.
    ///
    /// # Errors
    /// Returns [`ParseError::Lex`] if the first token is invalid.
    ///
    /// # Example
    /// ```
    /// use reckon::{Environment, error::ParseError, interpreter::parser::core::Parser};
    ///
    /// let environment = Environment::new();
    ///
    /// let err = Parser::with_environment("y +", &environment).unwrap()
    ///                                                        .parse_statement()
    ///                                                        .unwrap_err();
    /// assert!(matches!(err, ParseError::Runtime(_)));
    /// ```
    pub fn with_environment(source: &'src str, environment: &'env Environment) -> ParseResult<Self> {
        let mut parser = Self::new(source)?;
        parser.environment = Some(environment);
        Ok(parser)
    }

    /// The token the parser is currently looking at.
    #[must_use]
    pub const fn current(&self) -> &Token<'src> {
        &self.current
    }

    /// Consumes the current token if it has the `expected` kind.
    ///
    /// # Errors
    /// Returns a syntax error describing the current token when its kind does
    /// not match, or a lexical error if reading the following token fails.
    pub fn eat(&mut self, expected: TokenKind) -> ParseResult<Token<'src>> {
        if self.current.is(expected) {
            self.advance()
        } else {
            Err(self.unexpected())
        }
    }

    /// Moves to the next token and returns the one that was current.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Token<'src>> {
        let next = match self.lookahead.take() {
            Some(token) => token,
            None => self.tokenizer.next_token()?,
        };

        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Returns the token after the current one without consuming anything.
    pub(in crate::interpreter::parser) fn peek(&mut self) -> ParseResult<Token<'src>> {
        if let Some(token) = self.lookahead {
            return Ok(token);
        }

        let token = self.tokenizer.next_token()?;
        self.lookahead = Some(token);
        Ok(token)
    }

    /// Evaluates `expr` right away when an environment is attached.
    ///
    /// Returns `None` for a parser without an environment.
    pub(in crate::interpreter::parser) fn evaluate_eagerly(&self, expr: &Expr) -> ParseResult<Option<f64>> {
        Ok(self.environment
               .map(|environment| environment.eval(expr))
               .transpose()?)
    }

    /// Builds the syntax error for a current token that fits no rule.
    pub(in crate::interpreter::parser) fn unexpected(&self) -> ParseError {
        let Token { kind,
                    lexeme,
                    position, } = self.current;

        if kind == TokenKind::EndOfInput {
            ParseError::UnexpectedEndOfInput { line:   position.line,
                                               column: position.column, }
        } else {
            ParseError::UnexpectedToken { token:  lexeme.to_string(),
                                          line:   position.line,
                                          column: position.column, }
        }
    }
}

/// Parses one complete line into a [`Statement`].
///
/// # Errors
/// Returns a [`ParseError`] if the line contains an invalid character, does
/// not match the grammar, or has tokens left after the statement.
///
/// # Example
/// ```
/// use reckon::interpreter::parser::core::parse_line;
///
/// let statement = parse_line("total = (1 + 2) * 3;").unwrap();
/// assert_eq!(statement.to_string(), "total = ((1 + 2) * 3)");
///
/// assert!(parse_line("3 +").is_err());
/// ```
pub fn parse_line(source: &str) -> ParseResult<Statement> {
    Parser::new(source)?.parse_statement()
}
