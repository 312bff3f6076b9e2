use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> u32 {
        self.position.0
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedType { .. } => "ExpectedType",
            ErrorImpl::ExpectedFactor { .. } => "ExpectedFactor",
            ErrorImpl::LexicalError { .. } => "LexicalError",
            ErrorImpl::ExtraCodeAfterProgram { .. } => "ExtraCodeAfterProgram",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "expected `{}`, found `{}`",
                expected, found
            )),
            ErrorImpl::ExpectedType { found } => ErrorTip::Suggestion(format!(
                "expected one of `integer`, `boolean`, `char`, found `{}`",
                found
            )),
            ErrorImpl::ExpectedFactor { found } => ErrorTip::Suggestion(format!(
                "expected an identifier, constant, `(` or `not`, found `{}`",
                found
            )),
            ErrorImpl::LexicalError { issue } => ErrorTip::Suggestion(issue.to_string()),
            ErrorImpl::ExtraCodeAfterProgram { .. } => ErrorTip::None,
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(
                "split the expression or statement into smaller pieces".to_string(),
            ),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("syntax error, expected [{expected}] found [{found}]")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("syntax error, expected [type] found [{found}]")]
    ExpectedType { found: TokenKind },
    #[error("syntax error, expected [factor] found [{found}]")]
    ExpectedFactor { found: TokenKind },
    #[error("lexical error: {issue}")]
    LexicalError { issue: LexicalIssue },
    #[error("syntax error, extra code after program end: [{found}]")]
    ExtraCodeAfterProgram { found: TokenKind },
    #[error("syntax error, nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Why the scanner produced a lexical-error token.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalIssue {
    #[error("comment opened with `(*` is never closed")]
    UnterminatedComment,
    #[error("char literal must be exactly one character between quotes")]
    MalformedCharLiteral,
    #[error("exponent suffix `d` must be followed by digits")]
    MalformedExponent,
    #[error("integer constant does not fit in 32 bits")]
    IntegerOverflow,
    #[error("identifier is {length} characters long, the limit is 15")]
    IdentifierTooLong { length: usize },
    #[error("unrecognised character {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("unclassified lexeme")]
    Unknown,
}
