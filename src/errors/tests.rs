//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, LexicalIssue};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn at_line(line: u32) -> Position {
    Position(line, Rc::new("test.pzk".to_string()))
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::Identifier,
        },
        at_line(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_line(), 42);
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_error_names() {
    let cases = [
        (ErrorImpl::ExpectedType { found: TokenKind::Begin }, "ExpectedType"),
        (ErrorImpl::ExpectedFactor { found: TokenKind::End }, "ExpectedFactor"),
        (
            ErrorImpl::LexicalError {
                issue: LexicalIssue::MalformedExponent,
            },
            "LexicalError",
        ),
        (
            ErrorImpl::ExtraCodeAfterProgram {
                found: TokenKind::Dot,
            },
            "ExtraCodeAfterProgram",
        ),
        (ErrorImpl::NestingTooDeep { limit: 256 }, "NestingTooDeep"),
    ];

    for (error_impl, name) in cases {
        assert_eq!(Error::new(error_impl, at_line(1)).get_error_name(), name);
    }
}

#[test]
fn test_unexpected_token_message() {
    let error_impl = ErrorImpl::UnexpectedToken {
        expected: TokenKind::Dot,
        found: TokenKind::EOF,
    };

    assert_eq!(
        error_impl.to_string(),
        "syntax error, expected [.] found [end of file]"
    );
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::ExpectedType {
            found: TokenKind::Identifier,
        },
        at_line(3),
    );

    assert_eq!(
        error.to_string(),
        "test.pzk:3: syntax error, expected [type] found [identifier]"
    );
}

#[test]
fn test_lexical_issue_messages() {
    assert_eq!(
        LexicalIssue::IdentifierTooLong { length: 18 }.to_string(),
        "identifier is 18 characters long, the limit is 15"
    );
    assert_eq!(
        LexicalIssue::UnrecognisedCharacter { character: '@' }.to_string(),
        "unrecognised character '@'"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::ExtraCodeAfterProgram {
            found: TokenKind::Identifier,
        },
        at_line(1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::LexicalError {
            issue: LexicalIssue::UnterminatedComment,
        },
        at_line(1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "comment opened with `(*` is never closed"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_nesting_too_deep_message() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, at_line(2));

    assert_eq!(
        error.to_string(),
        "test.pzk:2: syntax error, nesting deeper than 256 levels"
    );
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}
