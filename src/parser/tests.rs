//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Programs, blocks and variable declarations
//! - Statements, including nesting and the compound fallthrough
//! - Expressions and operator levels
//! - Comment transparency and the trace
//! - Error reporting with expected/found kinds and lines
//! - The nesting limit on expressions and statements

use crate::{
    config::{Config, IdentifierPolicy, MAX_NESTING_DEPTH},
    errors::errors::{Error, ErrorImpl, LexicalIssue},
    lexer::{lexer::Scanner, tokens::TokenKind},
};

use super::parser::{parse, ParseSummary};

fn run(source: &str) -> Result<ParseSummary, Error> {
    let (_, result) = parse(Scanner::new(source, Some("test.pzk".to_string())));
    result
}

fn run_with_trace(source: &str) -> (Vec<String>, Result<ParseSummary, Error>) {
    let (parser, result) = parse(Scanner::new(source, None));
    (parser.trace().to_vec(), result)
}

fn expect_unexpected(source: &str, expected: TokenKind, found: TokenKind, line: u32) {
    let error = run(source).unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken { expected, found },
        "source: {}",
        source
    );
    assert_eq!(error.get_line(), line, "source: {}", source);
}

#[test]
fn test_parse_minimal_program() {
    let summary = run("program p; begin x := 1 end.").unwrap();

    assert_eq!(summary.lines, 1);
    assert_eq!(summary.tokens, 9);
}

#[test]
fn test_parse_read_write_program() {
    let (trace, result) =
        run_with_trace("program p; var x : integer; begin read(x); write(x) end.");
    let summary = result.unwrap();

    assert_eq!(summary.lines, 1);
    assert_eq!(summary.tokens, 20);
    assert_eq!(trace.len(), 20);
    assert_eq!(trace.first().unwrap(), "  1: program");
    assert_eq!(trace[1], "  1: identifier : p");
    assert_eq!(trace.last().unwrap(), "  1: .");
}

#[test]
fn test_parse_multiple_declarations() {
    let source = "program p;\nvar a, b, c : integer;\n    d : boolean;\n    e : char;\nbegin a := b end.";

    assert_eq!(run(source).unwrap().lines, 5);
}

#[test]
fn test_parse_boolean_program() {
    assert!(run("program p; var a,b : boolean; begin a := true; b := not a end.").is_ok());
}

#[test]
fn test_parse_if_else() {
    let source = "program p; var x : integer; begin if x >= 10 then x := 0 else x := x + 1 end.";

    assert!(run(source).is_ok());
}

#[test]
fn test_parse_dangling_else_binds_to_inner_if() {
    let source = "program p; begin if a then if b then x := 1 else x := 2 end.";

    assert!(run(source).is_ok());
}

#[test]
fn test_parse_while_with_bare_statement() {
    let source = "program p; var x : integer; begin while x > 0 do x := x - 1 end.";

    assert!(run(source).is_ok());
}

#[test]
fn test_parse_nested_blocks() {
    let source = "program p;\nbegin\n  begin\n    while a <> b do\n    begin\n      read(a, b);\n      write(a)\n    end\n  end\nend.";

    assert_eq!(run(source).unwrap().lines, 10);
}

#[test]
fn test_parse_expressions() {
    let source = "program p; begin \
        x := (a + 3) * b div 2 - 'c'; \
        y := not (a and b); \
        z := a or b; \
        w := x <= 12d+2; \
        v := false = true \
        end.";

    assert!(run(source).is_ok());
}

#[test]
fn test_parse_rejects_second_relational_operator() {
    expect_unexpected(
        "program p; begin x := a < b < c end.",
        TokenKind::End,
        TokenKind::Less,
        1,
    );
}

#[test]
fn test_parse_missing_final_dot() {
    expect_unexpected(
        "program p; begin x := 1 end",
        TokenKind::Dot,
        TokenKind::EOF,
        1,
    );
}

#[test]
fn test_parse_missing_semicolon_between_statements() {
    expect_unexpected(
        "program p;\nbegin\n x := 1\n y := 2\nend.",
        TokenKind::End,
        TokenKind::Identifier,
        4,
    );
}

#[test]
fn test_parse_missing_program_keyword() {
    expect_unexpected("begin end.", TokenKind::Program, TokenKind::Begin, 1);
}

#[test]
fn test_parse_empty_source() {
    expect_unexpected("", TokenKind::Program, TokenKind::EOF, 1);
}

#[test]
fn test_parse_invalid_type() {
    let error = run("program p; var x : real; begin x := 1 end.").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::ExpectedType {
            found: TokenKind::Identifier
        }
    );
    assert_eq!(error.get_error_name(), "ExpectedType");
}

#[test]
fn test_parse_invalid_factor() {
    let error = run("program p; begin x := * 2 end.").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::ExpectedFactor {
            found: TokenKind::Star
        }
    );
}

#[test]
fn test_parse_unknown_statement_falls_through_to_compound() {
    expect_unexpected(
        "program p; begin x := 1; then end.",
        TokenKind::Begin,
        TokenKind::Then,
        1,
    );
}

#[test]
fn test_parse_empty_statement_is_not_allowed() {
    expect_unexpected("program p; begin end.", TokenKind::Begin, TokenKind::End, 1);
}

#[test]
fn test_parse_extra_code_after_program() {
    let error = run("program p; begin x := 1 end.\nx").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::ExtraCodeAfterProgram {
            found: TokenKind::Identifier
        }
    );
    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_parse_second_dot_is_extra_code() {
    let error = run("program p; begin x := 1 end..").unwrap_err();

    assert_eq!(error.get_error_name(), "ExtraCodeAfterProgram");
}

#[test]
fn test_comments_are_transparent() {
    let with_comment = "program p; (* note *) var x : integer; begin x := 1 end.";
    let without_comment = "program p; var x : integer; begin x := 1 end.";

    let (with_trace, with_result) = run_with_trace(with_comment);
    let (without_trace, without_result) = run_with_trace(without_comment);

    assert_eq!(with_result.unwrap(), without_result.unwrap());
    assert_eq!(with_trace.len(), without_trace.len() + 1);
    assert!(with_trace.contains(&"  1: comment".to_string()));
}

#[test]
fn test_comments_everywhere() {
    let source = "(* header *)\nprogram p;\nvar (* vars *) x : integer;\nbegin\n  (* first *) x := (* mid *) 1 (* after *);\n  write(x) (* tail *)\nend.\n(* footer\n spanning lines *)\n";
    let (trace, result) = run_with_trace(source);
    let summary = result.unwrap();

    assert_eq!(summary.lines, 7);
    assert_eq!(trace.iter().filter(|line| line.ends_with("comment")).count(), 7);
    assert_eq!(trace.last().unwrap(), "  8: comment");
}

#[test]
fn test_unterminated_comment_is_fatal() {
    let error = run("program p; begin x := 1 end.\n(* open").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::LexicalError {
            issue: LexicalIssue::UnterminatedComment
        }
    );
    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_lexical_error_surfaces_at_its_line() {
    let error = run("program p;\nvar c : char;\nbegin\n  c := 'ab'\nend.").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::LexicalError {
            issue: LexicalIssue::MalformedCharLiteral
        }
    );
    assert_eq!(error.get_line(), 4);
    assert_eq!(error.get_error_name(), "LexicalError");
}

#[test]
fn test_lexical_error_in_statement_position() {
    let error = run("program p; begin x := 1; @ end.").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::LexicalError {
            issue: LexicalIssue::UnrecognisedCharacter { character: '@' }
        }
    );
}

#[test]
fn test_identifier_policy_reaches_the_parser() {
    let source = "program p; var averyveryverylongname : integer; begin x := 1 end.";

    let error = run(source).unwrap_err();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::LexicalError {
            issue: LexicalIssue::IdentifierTooLong { length: 21 }
        }
    );

    let config = Config::default().with_identifier_policy(IdentifierPolicy::Truncate);
    let (parser, result) = parse(Scanner::with_config(source.chars(), None, config));
    assert!(result.is_ok());
    assert!(parser
        .trace()
        .contains(&"  1: identifier : averyveryverylo".to_string()));
}

#[test]
fn test_error_stops_the_trace() {
    let (trace, result) = run_with_trace("program p; begin x := end.");

    assert!(result.is_err());
    assert_eq!(trace.last().unwrap(), "  1: :=");
}

#[test]
fn test_summary_display() {
    let summary = ParseSummary {
        lines: 12,
        tokens: 40,
    };

    assert_eq!(
        summary.to_string(),
        "12 lines analyzed, program is syntactically correct"
    );
}

fn expect_too_deep(source: &str) {
    let error = run(source).unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::NestingTooDeep {
            limit: MAX_NESTING_DEPTH
        }
    );
    assert_eq!(error.get_line(), 1);
}

#[test]
fn test_deeply_nested_not_is_an_error() {
    let source = format!("program p; begin x := {}a end.", "not ".repeat(10_000));

    expect_too_deep(&source);
}

#[test]
fn test_deeply_nested_parentheses_are_an_error() {
    let depth = 10_000;
    let source = format!(
        "program p; begin x := {}a{} end.",
        "(".repeat(depth),
        ")".repeat(depth)
    );

    expect_too_deep(&source);
}

#[test]
fn test_deeply_nested_statements_are_an_error() {
    let depth = 10_000;
    let source = format!(
        "program p; begin {}x := 1{} end.",
        "begin ".repeat(depth),
        " end".repeat(depth)
    );
    expect_too_deep(&source);

    let source = format!("program p; begin {}x := 1 end.", "while true do ".repeat(depth));
    expect_too_deep(&source);
}

#[test]
fn test_moderate_nesting_is_accepted() {
    let source = format!(
        "program p; begin x := {}not a{} end.",
        "(".repeat(50),
        ")".repeat(50)
    );
    assert!(run(&source).is_ok());

    let source = format!(
        "program p; begin {}x := 1{} end.",
        "begin ".repeat(100),
        " end".repeat(100)
    );
    assert!(run(&source).is_ok());
}

#[test]
fn test_nesting_depth_resets_between_statements() {
    let nots = "not ".repeat(MAX_NESTING_DEPTH / 2);
    let body = vec![format!("x := {}a", nots); 20].join("; ");
    let source = format!("program p; begin {} end.", body);

    assert!(run(&source).is_ok());
}
