use std::fmt;

use crate::interpreter::token::Position;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant records the position of the token that introduced it so
/// runtime errors can point back into the line.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal's value.
        value:    f64,
        /// Position of the literal.
        position: Position,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Position of the identifier.
        position: Position,
    },
    /// A run of operators of one precedence level, applied left to right:
    /// `first op operand op operand ...`.
    ///
    /// Chains are stored flat so that `1 + 1 + ... + 1` nests no deeper than
    /// a single addition.
    BinaryChain {
        /// Leftmost operand.
        first: Box<Self>,
        /// The operations that follow, in source order. Never empty.
        rest:  Vec<BinaryOperation>,
    },
}

/// One `op operand` step of an [`Expr::BinaryChain`].
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperation {
    /// The operator.
    pub op:       BinaryOperator,
    /// Right operand of this step.
    pub operand:  Expr,
    /// Position of the operator token.
    pub position: Position,
}

impl Expr {
    /// Builds a chain from its first operand and the steps after it.
    ///
    /// Without any step the operand is returned unchanged, so `(7)` and `7`
    /// produce the same tree.
    #[must_use]
    pub fn chain(first: Self, rest: Vec<BinaryOperation>) -> Self {
        if rest.is_empty() {
            first
        } else {
            Self::BinaryChain { first: Box::new(first),
                                rest }
        }
    }

    /// Gets the source position from `self`. For a chain this is the
    /// position of its first operand.
    /// ## Example
    /// ```
    /// use reckon::{ast::Expr, interpreter::token::Position};
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: Position::new(1, 5), };
    ///
    /// assert_eq!(expr.position(), Position::new(1, 5));
    /// ```
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::Number { position, .. } | Self::Variable { position, .. } => *position,
            Self::BinaryChain { first, .. } => first.position(),
        }
    }
}

/// Renders the expression fully parenthesized, e.g. `(2 + (3 * 4))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::BinaryChain { first, rest } => {
                write!(f, "{}{first}", "(".repeat(rest.len()))?;
                for BinaryOperation { op, operand, .. } in rest {
                    write!(f, " {op} {operand})")?;
                }
                Ok(())
            },
        }
    }
}

/// Represents a complete input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr:     Expr,
        /// Position of the first token of the line.
        position: Position,
    },
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:     String,
        /// The value which is being assigned.
        value:    Expr,
        /// Position of the variable name.
        position: Position,
    },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression { expr, .. } => write!(f, "{expr}"),
            Self::Assignment { name, value, .. } => write!(f, "{name} = {value}"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
