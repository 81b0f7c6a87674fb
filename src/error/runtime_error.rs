/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    #[error("Undefined variable: {name}")]
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column where the variable name starts.
        column: usize,
    },
    /// The right-hand operand of `/` evaluated to zero.
    #[error("Division by zero")]
    DivisionByZero {
        /// The source line of the `/` operator.
        line:   usize,
        /// The column of the `/` operator.
        column: usize,
    },
}

impl RuntimeError {
    /// Returns the `(line, column)` the error was reported at.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::UndefinedVariable { line, column, .. } | Self::DivisionByZero { line, column } => {
                (*line, *column)
            },
        }
    }
}
