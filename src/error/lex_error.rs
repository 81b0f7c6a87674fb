/// A character in the input does not begin any valid token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid character '{character}' at line {line}, column {column}")]
pub struct LexError {
    /// The offending character.
    pub character: char,
    /// The source line where the error occurred.
    pub line:      usize,
    /// The 1-based column of the character.
    pub column:    usize,
}
