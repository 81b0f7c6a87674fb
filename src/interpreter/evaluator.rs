/// Core evaluation logic.
///
/// Walks statements and expressions against an [`Environment`], reading
/// variables and committing assignments.
///
/// [`Environment`]: crate::interpreter::environment::Environment
pub mod core;

/// Binary operator evaluation.
///
/// Applies `+`, `-`, `*` and `/` to two numbers and rejects division by zero.
pub mod binary;
