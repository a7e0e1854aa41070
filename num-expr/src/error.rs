//! Errors for expression parsing and evaluation.

use thiserror::Error;

/// Errors produced while tokenizing, parsing, or evaluating an expression.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExprError {
    /// A character the lexer does not recognize.
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar {
        /// The offending character
        ch: char,
        /// Byte offset into the source
        pos: usize,
    },

    /// A number literal that failed to parse.
    #[error("malformed number '{text}' at position {pos}")]
    MalformedNumber {
        /// The slice that failed to parse
        text: String,
        /// Byte offset into the source
        pos: usize,
    },

    /// A token in a position where it cannot appear.
    #[error("unexpected token '{found}'")]
    UnexpectedToken {
        /// Display form of the token
        found: String,
    },

    /// Input ended where more tokens were required.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// An identifier used as a function that is not whitelisted.
    #[error("unknown function '{name}'")]
    UnknownFunction {
        /// The identifier
        name: String,
    },

    /// A function called with the wrong number of arguments.
    #[error("function '{name}' takes {expected} argument(s), got {got}")]
    WrongArity {
        /// The function name
        name: String,
        /// Required argument count
        expected: usize,
        /// Provided argument count
        got: usize,
    },

    /// A variable not present in the evaluation context.
    #[error("unknown variable '{name}'")]
    UnknownVariable {
        /// The identifier
        name: String,
    },
}
