use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult, token::Position},
};

impl Environment {
    /// Evaluates a binary arithmetic operation on two numbers.
    ///
    /// Arithmetic follows IEEE-754 double precision without overflow checks.
    /// A right operand equal to zero (either sign) makes division fail.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] positioned at the operator.
    ///
    /// # Example
    /// ```
    /// use reckon::{Environment, ast::BinaryOperator, interpreter::token::Position};
    ///
    /// let at = Position::new(1, 3);
    ///
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Div, 7.0, 2.0, at), Ok(3.5));
    /// assert!(Environment::eval_binary(BinaryOperator::Div, 7.0, 0.0, at).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: f64,
                       right: f64,
                       position: Position)
                       -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line:   position.line,
                                                              column: position.column, });
                }
                Ok(left / right)
            },
        }
    }
}
