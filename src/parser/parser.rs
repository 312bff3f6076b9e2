//! Parser implementation driving the grammar from the scanner.
//!
//! This module contains the main Parser struct. The parser pulls one token
//! at a time from the scanner and keeps exactly one token of lookahead; no
//! syntax tree is built, every grammar rule either consumes its tokens or
//! returns the first error.
//!
//! It maintains lookup tables for:
//! - Statement handlers, keyed by the token that starts the statement
//! - Operator classes (relational, additive, multiplicative)

use std::{collections::HashMap, fmt::Display, mem, rc::Rc};

use crate::{
    config::MAX_NESTING_DEPTH,
    errors::errors::{Error, ErrorImpl, LexicalIssue},
    lexer::{
        lexer::Scanner,
        tokens::{Token, TokenKind, TokenValue},
    },
    Position, MK_TOKEN,
};

use super::{
    lookups::{create_token_lookups, OperatorClass, OperatorLookup, StmtHandler, StmtLookup},
    stmt::parse_program_rule,
};

/// The main parser structure that maintains parsing state.
pub struct Parser<I: Iterator<Item = char>> {
    /// Source of tokens, pulled on demand
    scanner: Scanner<I>,
    /// The single token fetched but not yet consumed
    lookahead: Token,
    /// The name of the source being parsed
    file: Rc<String>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<I>,
    /// Lookup table for operator classes
    operator_lookup: OperatorLookup,
    /// One line per consumed token and skipped comment
    trace: Vec<String>,
    /// Whether trace lines are printed as they are recorded
    echo_trace: bool,
    /// Grammar tokens consumed so far, comments excluded
    consumed: usize,
    /// Guarded rules currently open, see [`Parser::nested`]
    depth: usize,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSummary {
    /// Line of the final `.`
    pub lines: u32,
    pub tokens: usize,
}

impl Display for ParseSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} lines analyzed, program is syntactically correct", self.lines)
    }
}

impl<I: Iterator<Item = char>> Parser<I> {
    /// Creates a new Parser over the given scanner.
    ///
    /// Nothing is read until [`Parser::parse_program`] is called.
    pub fn new(scanner: Scanner<I>) -> Self {
        let line = scanner.line();

        Parser {
            file: scanner.file(),
            echo_trace: scanner.config().echo_trace,
            scanner,
            lookahead: MK_TOKEN!(TokenKind::EOF, line),
            stmt_lookup: HashMap::new(),
            operator_lookup: HashMap::new(),
            trace: vec![],
            consumed: 0,
            depth: 0,
        }
    }

    /// Returns the kind of the lookahead token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.lookahead.kind
    }

    /// Trace lines recorded so far.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    fn record(&mut self, line: String) {
        if self.echo_trace {
            println!("{}", line);
        }
        self.trace.push(line);
    }

    /// Replaces the lookahead with the next non-comment token and returns the
    /// previous lookahead. Comments met on the way only reach the trace.
    fn advance(&mut self) -> Token {
        let next = self.scanner.next_token();
        let previous = mem::replace(&mut self.lookahead, next);
        self.skip_comments();
        previous
    }

    fn skip_comments(&mut self) {
        while self.lookahead.kind == TokenKind::Comment {
            let line = self.lookahead.trace_line();
            self.record(line);
            self.lookahead = self.scanner.next_token();
        }
    }

    /// Consumes the lookahead if it is of the expected kind.
    ///
    /// # Returns
    ///
    /// The consumed token, or an `UnexpectedToken` error naming both kinds
    /// at the lookahead's line.
    pub fn accept(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let found = self.current_token_kind();
        if found != expected_kind {
            return Err(self.error(ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                found,
            }));
        }

        let line = self.lookahead.trace_line();
        self.record(line);
        self.consumed += 1;

        Ok(self.advance())
    }

    /// Consumes the lookahead whatever its kind. Only used after a lookup
    /// has already classified it.
    pub fn accept_current(&mut self) -> Result<Token, Error> {
        self.accept(self.current_token_kind())
    }

    /// Builds an error at the lookahead's line. A lexical-error lookahead
    /// always wins over the syntax error the caller had in mind.
    pub fn error(&mut self, error_impl: ErrorImpl) -> Error {
        let error_impl = if self.lookahead.kind == TokenKind::Error {
            ErrorImpl::LexicalError {
                issue: self.scanner.take_issue().unwrap_or(LexicalIssue::Unknown),
            }
        } else {
            error_impl
        };

        Error::new(error_impl, self.get_position())
    }

    /// Runs a recursive grammar rule one level deeper. Past
    /// [`MAX_NESTING_DEPTH`] open levels the rule is not entered and a
    /// `NestingTooDeep` error is returned at the lookahead's line.
    pub fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;

        result
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup<I> {
        &self.stmt_lookup
    }

    /// Returns the operator class of a token kind, if it is an operator.
    pub fn operator_class(&self, kind: TokenKind) -> Option<OperatorClass> {
        self.operator_lookup.get(&kind).copied()
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<I>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers an operator class for a token.
    pub fn operator(&mut self, kind: TokenKind, class: OperatorClass) {
        self.operator_lookup.insert(kind, class);
    }

    /// Returns the position of the lookahead token.
    pub fn get_position(&self) -> Position {
        Position(self.lookahead.line, Rc::clone(&self.file))
    }

    /// Runs the whole grammar from a fresh lookahead and requires the input
    /// to end right after the program's final `.` (and any comments).
    pub fn parse_program(&mut self) -> Result<ParseSummary, Error> {
        self.lookahead = self.scanner.next_token();
        self.skip_comments();

        let dot = parse_program_rule(self)?;

        let found = self.current_token_kind();
        if found != TokenKind::EOF {
            return Err(self.error(ErrorImpl::ExtraCodeAfterProgram { found }));
        }

        Ok(ParseSummary {
            lines: dot.line,
            tokens: self.consumed,
        })
    }
}

/// Parses a whole compilation unit from a scanner.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and runs the program rule.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with its trace)
/// - Result containing either the run summary or the first Error
pub fn parse<I: Iterator<Item = char>>(
    scanner: Scanner<I>,
) -> (Parser<I>, Result<ParseSummary, Error>) {
    let mut parser = Parser::new(scanner);
    create_token_lookups(&mut parser);

    let result = parser.parse_program();

    (parser, result)
}
