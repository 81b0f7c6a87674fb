use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        parser::core::{MAX_NESTING_DEPTH, ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_, '_> {
    /// Parses a factor, the highest-precedence level of the grammar.
    ///
    /// Grammar:
    /// ```text
    ///     factor := NUMBER
    ///             | "(" expr ")"
    ///             | IDENTIFIER
    /// ```
    /// There is no prefix operator, so `-5` fails here on the `-`.
    ///
    /// # Errors
    /// Returns a syntax error when the current token cannot start a factor, a
    /// parenthesized expression is not closed, or parentheses nest deeper
    /// than [`MAX_NESTING_DEPTH`]. With an environment attached, an
    /// unassigned variable fails here as well.
    pub fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.current().kind {
            TokenKind::Number => {
                let token = self.eat(TokenKind::Number)?;
                let value = token.lexeme
                                 .parse::<f64>()
                                 .map_err(|_| ParseError::UnexpectedToken { token:  token.lexeme.to_string(),
                                                                            line:   token.position.line,
                                                                            column: token.position.column, })?;
                Ok(Expr::Number { value,
                                  position: token.position })
            },
            TokenKind::LParen => {
                let open = self.eat(TokenKind::LParen)?;
                if self.depth == MAX_NESTING_DEPTH {
                    return Err(ParseError::NestingTooDeep { line:   open.position.line,
                                                            column: open.position.column, });
                }

                self.depth += 1;
                let expr = self.parse_expression()?;
                self.depth -= 1;

                self.eat(TokenKind::RParen)?;
                Ok(expr)
            },
            TokenKind::Identifier => {
                let token = self.eat(TokenKind::Identifier)?;
                let variable = Expr::Variable { name:     token.lexeme.to_string(),
                                                position: token.position, };
                self.evaluate_eagerly(&variable)?;
                Ok(variable)
            },
            _ => Err(self.unexpected()),
        }
    }
}
