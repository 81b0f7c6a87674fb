/// Parser state and token handling.
///
/// Holds the [`core::Parser`] struct with its single current token, the
/// optional one-token lookahead and the `eat` primitive every rule builds on.
pub mod core;

/// Binary expression parsing.
///
/// Implements the two left-associative precedence levels: `+`/`-` and
/// `*`/`/`.
pub mod binary;

/// Factor parsing.
///
/// Parses numbers, variable reads and parenthesized expressions.
pub mod primary;

/// Statement parsing.
///
/// Decides between assignment and bare expression and enforces that nothing
/// follows the optional `;`.
pub mod statement;
