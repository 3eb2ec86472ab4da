//! Error types for expression parsing and rendering.

use thiserror::Error;

/// Errors raised while tokenizing or interpreting a color expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no statements at all.
    #[error("at least one color must be specified")]
    NoStatements,

    /// A `name:` prefix was given with nothing following it.
    #[error("statement '{0}' has no color expression")]
    EmptyStatement(String),

    /// A statement carried only operations or style keywords.
    #[error("no base color in statement")]
    MissingBase,

    /// A second base color appeared outside of a `mix` operation.
    #[error("unexpected second base color '{0}'")]
    DuplicateBase(String),

    /// A token matched neither a color form nor a known keyword.
    #[error("unknown color or keyword '{0}'")]
    UnknownToken(String),

    /// A color token was recognized but malformed or out of range.
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    /// An operation that takes a value reached the end of the statement.
    #[error("operation '{0}' requires a value")]
    MissingValue(String),

    /// An operation value failed to parse as a number.
    #[error("invalid value '{1}' for operation '{0}'")]
    InvalidValue(String, String),

    /// Channel operations were applied to a channel-less base.
    #[error("operation '{0}' requires a base color")]
    OperationWithoutColor(String),
}

/// Result type for parsing and rendering operations.
pub type Result<T> = std::result::Result<T, ParseError>;
