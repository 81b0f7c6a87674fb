use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::environment::Environment,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Environment {
    /// Evaluates an expression and returns the resulting number.
    ///
    /// Variables are read from `self`; nothing is written. Operator chains
    /// are folded left to right in a loop.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] for a name that was never
    /// assigned and [`RuntimeError::DivisionByZero`] for a zero divisor.
    ///
    /// # Example
    /// ```
    /// use reckon::{Environment, interpreter::parser::core::Parser};
    ///
    /// let mut environment = Environment::new();
    /// environment.set("width", 4.0);
    ///
    /// let expr = Parser::new("width * 2 + 1").unwrap()
    ///                                         .parse_expression()
    ///                                         .unwrap();
    /// assert_eq!(environment.eval(&expr), Ok(9.0));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Variable { name, position } => {
                self.get(name)
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name:   name.clone(),
                                                                     line:   position.line,
                                                                     column: position.column, })
            },
            Expr::BinaryChain { first, rest } => {
                rest.iter().try_fold(self.eval(first)?, |left, step| {
                               let right = self.eval(&step.operand)?;
                               Self::eval_binary(step.op, left, right, step.position)
                           })
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// A bare expression yields its value. An assignment evaluates its
    /// right-hand side first and binds the name only if that succeeds, then
    /// yields the assigned value.
    ///
    /// # Errors
    /// Propagates any [`RuntimeError`] from the expression; the environment
    /// is left unchanged in that case.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<f64> {
        match statement {
            Statement::Expression { expr, .. } => self.eval(expr),
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.set(name.as_str(), value);
                Ok(value)
            },
        }
    }
}
