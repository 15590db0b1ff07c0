use crate::position::Position;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Referenced or assigned a variable with no binding in scope.
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// An operand did not reduce to an integer value.
    NotAValue {
        /// Rendering of the offending result.
        expression: String,
        /// The source position where the error occurred.
        position:   Position,
    },
    /// The callable of a call did not reduce to a function value.
    NotCallable {
        /// Rendering of the offending result.
        expression: String,
        /// The source position where the error occurred.
        position:   Position,
    },
    /// Arithmetic left the 64-bit integer range.
    Overflow {
        /// The source position where the error occurred.
        position: Position,
    },
    /// Encountered a structurally invalid expression.
    ///
    /// The parser never produces such a tree; this covers trees built by
    /// hand through the library API.
    UnknownExpression {
        /// Rendering of the offending expression.
        expression: String,
        /// The source position where the error occurred.
        position:   Position,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, position } => {
                write!(f, "Error at {position}: Undefined variable '{name}'.")
            },

            Self::NotAValue { expression, position } => {
                write!(f, "Error at {position}: Expression {expression} is not a value.")
            },

            Self::NotCallable { expression, position } => {
                write!(f, "Error at {position}: Expression {expression} is not callable.")
            },

            Self::Overflow { position } => write!(f,
                                                  "Error at {position}: Integer overflow while trying to compute result."),

            Self::UnknownExpression { expression, position } => {
                write!(f, "Error at {position}: Expression {expression} is unknown.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
