use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_, '_> {
    /// Parses a single statement and checks that the line ends after it.
    ///
    /// A statement is one of:
    /// - an assignment, `IDENTIFIER "=" expr`;
    /// - a bare expression.
    ///
    /// Either may be followed by one optional `;`. After that only the end of
    /// input is accepted.
    ///
    /// # Errors
    /// Returns a syntax error if the tokens do not form a statement or if
    /// anything follows it.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let position = self.current().position;

        let statement = if let Some(name) = self.parse_assignment_target()? {
            let value = self.parse_expression()?;
            Statement::Assignment { name,
                                    value,
                                    position }
        } else {
            let expr = self.parse_expression()?;
            Statement::Expression { expr, position }
        };

        self.parse_statement_end()?;
        log::debug!("parsed statement `{statement}`");

        Ok(statement)
    }

    /// Consumes `IDENTIFIER "="` and returns the name if the line is an
    /// assignment. Leaves the parser untouched otherwise.
    fn parse_assignment_target(&mut self) -> ParseResult<Option<String>> {
        if self.current().is(TokenKind::Identifier) && self.peek()?.is(TokenKind::Equals) {
            let name = self.eat(TokenKind::Identifier)?.lexeme.to_string();
            self.eat(TokenKind::Equals)?;
            return Ok(Some(name));
        }

        Ok(None)
    }

    /// Consumes an optional `;` and requires the end of input.
    fn parse_statement_end(&mut self) -> ParseResult<()> {
        if self.current().is(TokenKind::Semicolon) {
            self.eat(TokenKind::Semicolon)?;
        }

        let token = self.current();
        if token.is(TokenKind::EndOfInput) {
            return Ok(());
        }

        Err(ParseError::UnexpectedTrailingTokens { token:  token.lexeme.to_string(),
                                                   line:   token.position.line,
                                                   column: token.position.column, })
    }
}
