//! # reckon
//!
//! reckon is a line-at-a-time arithmetic evaluator written in Rust.
//! Each line is tokenized, parsed and evaluated against an environment of
//! variables that lives for the whole session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed lines.
///
/// This module declares the `Expr` and `Statement` types that represent a
/// line as a tree. The tree is built by the parser and walked by the
/// evaluator; every node carries the source position of the token that
/// introduced it.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// # Responsibilities
/// - Defines one error family per phase (lexer, parser, evaluator).
/// - Attaches line and column numbers for diagnostics.
/// - Combines them into [`EvalError`], the error of
///   [`parse_and_evaluate`].
pub mod error;
/// Orchestrates the pipeline from text to number.
///
/// Ties together the tokenizer, the parser, the evaluator and the
/// environment that carries variables between lines.
pub mod interpreter;

pub use error::EvalError;
pub use interpreter::environment::Environment;

use crate::interpreter::parser::core::Parser;

/// Parses and evaluates one line against `environment`.
///
/// A fresh parser and tokenizer are created for the line; the environment is
/// the caller's and carries over between calls. Assignments yield the value
/// they bind.
///
/// Failures are reported in reading order: a variable read or a division is
/// checked as soon as the parser has reduced it, so `y +` fails with an
/// undefined variable rather than with the missing operand.
///
/// # Errors
/// Returns an [`EvalError`] if the line contains an invalid character, does
/// not match the grammar, reads an unassigned variable or divides by zero.
/// The environment is unchanged whenever an error is returned.
///
/// # Examples
/// ```
/// use reckon::{Environment, EvalError, parse_and_evaluate};
///
/// let mut environment = Environment::new();
///
/// assert_eq!(parse_and_evaluate("x = 5", &mut environment).unwrap(), 5.0);
/// assert_eq!(parse_and_evaluate("x + 1", &mut environment).unwrap(), 6.0);
///
/// let err = parse_and_evaluate("y", &mut environment).unwrap_err();
/// assert!(matches!(err, EvalError::Runtime(_)));
/// assert_eq!(err.to_string(), "Undefined variable: y");
/// ```
pub fn parse_and_evaluate(line: &str, environment: &mut Environment) -> Result<f64, EvalError> {
    let statement = Parser::with_environment(line, environment)?.parse_statement()?;
    Ok(environment.eval_statement(&statement)?)
}

/// Evaluates every non-blank line of `source` in order within one session.
///
/// Errors do not stop evaluation; each line's outcome is returned in order.
/// Blank lines are skipped without producing an outcome.
///
/// # Example
/// ```
/// use reckon::{Environment, evaluate_script};
///
/// let mut environment = Environment::new();
/// let outcomes = evaluate_script("a = 2\n\nb = a * 3\n1 / 0\nb - a", &mut environment);
///
/// assert_eq!(outcomes.len(), 4);
/// assert_eq!(outcomes[1], Ok(6.0));
/// assert!(outcomes[2].is_err());
/// assert_eq!(outcomes[3], Ok(4.0));
/// ```
pub fn evaluate_script(source: &str, environment: &mut Environment) -> Vec<Result<f64, EvalError>> {
    source.lines()
          .filter(|line| !line.trim().is_empty())
          .map(|line| parse_and_evaluate(line, environment))
          .collect()
}

/// Formats the outcome of a line the way the driver prints it.
///
/// Values use the default floating-point display; failures are prefixed with
/// `Error: `.
///
/// # Example
/// ```
/// use reckon::{Environment, format_outcome, parse_and_evaluate};
///
/// let mut environment = Environment::new();
///
/// assert_eq!(format_outcome(&parse_and_evaluate("7 / 2", &mut environment)), "3.5");
/// assert_eq!(format_outcome(&parse_and_evaluate("1 / 0", &mut environment)),
///            "Error: Division by zero");
/// ```
#[must_use]
pub fn format_outcome(outcome: &Result<f64, EvalError>) -> String {
    match outcome {
        Ok(value) => format!("{value}"),
        Err(e) => format!("Error: {e}"),
    }
}
