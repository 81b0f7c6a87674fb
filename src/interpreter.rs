/// The environment module holds session state.
///
/// The environment maps variable names to their most recently assigned
/// values. It is created once per session and passed explicitly into every
/// evaluation, so no state is global.
pub mod environment;
/// The evaluator module computes results from parsed statements.
///
/// The evaluator walks the syntax tree, reads variables from the
/// environment, applies arithmetic and commits assignments.
///
/// # Responsibilities
/// - Evaluates numbers, variable reads and binary operations.
/// - Commits an assignment only after its right-hand side succeeded.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads raw text and produces tokens on demand, each tagged with
/// the line and column it starts at.
///
/// # Responsibilities
/// - Recognizes integer literals, identifiers and the single-character
///   operators and delimiters.
/// - Skips whitespace while keeping line and column bookkeeping.
/// - Reports invalid characters with their position.
pub mod lexer;
/// The parser module builds a syntax tree from tokens.
///
/// The parser is a recursive descent over one line with a single current
/// token and at most one token of lookahead.
///
/// # Responsibilities
/// - Distinguishes assignments from bare expressions.
/// - Encodes operator precedence and left associativity in its rule nesting.
/// - Rejects incomplete lines and tokens after the end of a statement.
pub mod parser;
/// Token types shared by the lexer and the parser.
pub mod token;
