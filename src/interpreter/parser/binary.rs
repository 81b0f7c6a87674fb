use crate::{
    ast::{BinaryOperation, BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_, '_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    ///
    /// # Errors
    /// Propagates syntax and lexical errors from the operands.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let first = self.parse_term()?;
        let mut rest = Vec::new();
        loop {
            if let Some(op) = token_to_binary_operator(self.current().kind)
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                let position = self.advance()?.position;
                let operand = self.parse_term()?;
                rest.push(BinaryOperation { op,
                                            operand,
                                            position });
                continue;
            }
            break;
        }
        Ok(Expr::chain(first, rest))
    }

    /// Parses multiplication and division expressions.
    ///
    /// Both operators share one precedence level and associate to the left,
    /// so `8 / 4 / 2` is `(8 / 4) / 2`.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    ///
    /// When the parser evaluates as it goes, a divisor that evaluates to zero
    /// is reported as soon as it has been read.
    ///
    /// # Errors
    /// Propagates syntax and lexical errors from the operands.
    pub fn parse_term(&mut self) -> ParseResult<Expr> {
        let first = self.parse_factor()?;
        let mut rest = Vec::new();
        loop {
            if let Some(op) = token_to_binary_operator(self.current().kind)
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
            {
                let position = self.advance()?.position;
                let operand = self.parse_factor()?;
                if op == BinaryOperator::Div && self.evaluate_eagerly(&operand)? == Some(0.0) {
                    return Err(RuntimeError::DivisionByZero { line:   position.line,
                                                              column: position.column, }.into());
                }
                rest.push(BinaryOperation { op,
                                            operand,
                                            position });
                continue;
            }
            break;
        }
        Ok(Expr::chain(first, rest))
    }
}

/// Maps a token kind to its corresponding binary operator.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{parser::binary::token_to_binary_operator, token::TokenKind},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Divide),
///            Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(TokenKind::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Multiply => Some(BinaryOperator::Mul),
        TokenKind::Divide => Some(BinaryOperator::Div),
        _ => None,
    }
}
