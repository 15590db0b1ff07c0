use crate::position::Position;

#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Encountered a character no token can start with.
    UnexpectedCharacter {
        /// The offending source slice.
        found:    String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// An integer literal does not fit the 64-bit value range.
    LiteralTooLarge {
        /// The literal as written in the source.
        literal:  String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// Position of the opening bracket of the form being parsed, or
        /// the placeholder `0:0` when the input held no tokens at all.
        position: Position,
    },
    /// Found a different token than the grammar requires here.
    UnexpectedToken {
        /// What the parser required at this point.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// A block form with no nested expressions.
    EmptyBlock {
        /// The source position where the error occurred.
        position: Position,
    },
    /// Found extra tokens after the program's single expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        found:    String,
        /// The source position where the error occurred.
        position: Position,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, position } => {
                write!(f, "Error at {position}: Unexpected character '{found}'.")
            },

            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Error at {position}: Literal '{literal}' is too large.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at {position}: Unexpected end of input.")
            },

            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => {
                write!(f, "Error at {position}: Expected {expected}, found {found}.")
            },

            Self::EmptyBlock { position } => write!(f,
                                                    "Error at {position}: Block must contain at least one expression."),

            Self::UnexpectedTrailingTokens { found, position } => write!(f,
                                                                         "Error at {position}: Extra tokens after expression. Check your input: {found}"),
        }
    }
}

impl std::error::Error for ParseError {}
