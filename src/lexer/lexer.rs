use std::{iter::Peekable, rc::Rc, str::Chars};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    config::{Config, IdentifierPolicy, MAX_IDENTIFIER_LEN},
    errors::errors::LexicalIssue,
    MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenValue, PUNCTUATION_LOOKUP, RESERVED_LOOKUP};

lazy_static! {
    /// `digits [ 'd' ['+'] digits ]`, base and exponent captured separately.
    static ref INTEGER_LITERAL: Regex = Regex::new("^([0-9]+)(?:d\\+?([0-9]+))?$").unwrap();
}

/// Pull-based scanner over any character stream.
///
/// The only state kept between calls is the stream cursor (with one
/// character of pushback through `Peekable`), the line counter and the
/// reason behind the last error token.
pub struct Scanner<I: Iterator<Item = char>> {
    source: Peekable<I>,
    line: u32,
    file: Rc<String>,
    config: Config,
    issue: Option<LexicalIssue>,
}

impl<'a> Scanner<Chars<'a>> {
    pub fn new(source: &'a str, file: Option<String>) -> Self {
        Scanner::with_config(source.chars(), file, Config::default())
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn with_config(source: I, file: Option<String>, config: Config) -> Self {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Scanner {
            source: source.peekable(),
            line: 1,
            file: file_name,
            config,
            issue: None,
        }
    }

    /// Current value of the line counter.
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reason for the most recent `TokenKind::Error` token, if any.
    pub fn take_issue(&mut self) -> Option<LexicalIssue> {
        self.issue.take()
    }

    fn advance(&mut self) -> Option<char> {
        self.source.next()
    }

    fn at(&mut self) -> Option<char> {
        self.source.peek().copied()
    }

    fn advance_if(&mut self, expected: char) -> bool {
        if self.at() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn error(&mut self, issue: LexicalIssue, line: u32) -> Token {
        self.issue = Some(issue);
        MK_TOKEN!(TokenKind::Error, line)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.at() {
            match ch {
                ' ' | '\t' | '\r' => {}
                '\n' => self.line += 1,
                _ => return,
            }
            self.advance();
        }
    }

    /// Returns the next token. Once `TokenKind::EOF` has been returned the
    /// caller must stop asking.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let line = self.line;
        let Some(ch) = self.advance() else {
            return MK_TOKEN!(TokenKind::EOF, line);
        };

        match ch {
            '(' => {
                if self.advance_if('*') {
                    self.comment(line)
                } else {
                    MK_TOKEN!(TokenKind::OpenParen, line)
                }
            }
            '\'' => self.char_literal(line),
            '0'..='9' => self.number(ch, line),
            'a'..='z' | 'A'..='Z' | '_' => self.symbol(ch, line),
            ':' => {
                if self.advance_if('=') {
                    MK_TOKEN!(TokenKind::Assignment, line)
                } else {
                    MK_TOKEN!(TokenKind::Colon, line)
                }
            }
            '<' => {
                if self.advance_if('>') {
                    MK_TOKEN!(TokenKind::NotEquals, line)
                } else if self.advance_if('=') {
                    MK_TOKEN!(TokenKind::LessEquals, line)
                } else {
                    MK_TOKEN!(TokenKind::Less, line)
                }
            }
            '>' => {
                if self.advance_if('=') {
                    MK_TOKEN!(TokenKind::GreaterEquals, line)
                } else {
                    MK_TOKEN!(TokenKind::Greater, line)
                }
            }
            _ => match PUNCTUATION_LOOKUP.get(&ch) {
                Some(kind) => MK_TOKEN!(*kind, line),
                None => self.error(LexicalIssue::UnrecognisedCharacter { character: ch }, line),
            },
        }
    }

    // `(*` already consumed; the terminator must come after the opener.
    fn comment(&mut self, line: u32) -> Token {
        let mut previous = None;

        while let Some(ch) = self.advance() {
            if ch == '\n' {
                self.line += 1;
            }
            if previous == Some('*') && ch == ')' {
                return MK_TOKEN!(TokenKind::Comment, line);
            }
            previous = Some(ch);
        }

        self.error(LexicalIssue::UnterminatedComment, line)
    }

    // Opening quote already consumed.
    fn char_literal(&mut self, line: u32) -> Token {
        let body = match self.at() {
            None | Some('\n') | Some('\'') => {
                return self.error(LexicalIssue::MalformedCharLiteral, line);
            }
            Some(body) => {
                self.advance();
                body
            }
        };

        if !self.advance_if('\'') {
            return self.error(LexicalIssue::MalformedCharLiteral, line);
        }

        MK_TOKEN!(TokenKind::CharConst, TokenValue::Char(body), line)
    }

    fn number(&mut self, first: char, line: u32) -> Token {
        let mut lexeme = String::from(first);
        self.take_digits(&mut lexeme);

        if self.advance_if('d') {
            lexeme.push('d');
            if self.advance_if('+') {
                lexeme.push('+');
            }
            if !matches!(self.at(), Some('0'..='9')) {
                return self.error(LexicalIssue::MalformedExponent, line);
            }
            self.take_digits(&mut lexeme);
        }

        match integer_value(&lexeme) {
            Some(value) => MK_TOKEN!(TokenKind::IntegerConst, TokenValue::Integer(value), line),
            None => self.error(LexicalIssue::IntegerOverflow, line),
        }
    }

    fn take_digits(&mut self, lexeme: &mut String) {
        while let Some(ch @ '0'..='9') = self.at() {
            lexeme.push(ch);
            self.advance();
        }
    }

    fn symbol(&mut self, first: char, line: u32) -> Token {
        let mut lexeme = String::from(first);
        while let Some(ch) = self.at() {
            if !(ch.is_ascii_alphanumeric() || ch == '_') {
                break;
            }
            lexeme.push(ch);
            self.advance();
        }

        if let Some(kind) = RESERVED_LOOKUP.get(lexeme.as_str()) {
            return MK_TOKEN!(*kind, line);
        }

        if lexeme.len() > MAX_IDENTIFIER_LEN {
            match self.config.identifier_policy {
                IdentifierPolicy::Reject => {
                    return self.error(
                        LexicalIssue::IdentifierTooLong {
                            length: lexeme.len(),
                        },
                        line,
                    );
                }
                IdentifierPolicy::Truncate => lexeme.truncate(MAX_IDENTIFIER_LEN),
            }
        }

        MK_TOKEN!(TokenKind::Identifier, TokenValue::Identifier(lexeme), line)
    }
}

/// Computes `base * 10^exponent` for a scanned integer lexeme, `None` when it
/// is not an integer literal or the value overflows `i32`.
pub fn integer_value(lexeme: &str) -> Option<i32> {
    let captures = INTEGER_LITERAL.captures(lexeme)?;
    let base = captures[1].parse::<i32>().ok()?;

    // Zero stays zero whatever the exponent, even one too large to parse.
    if base == 0 {
        return Some(0);
    }

    let exponent = match captures.get(2) {
        Some(exponent) => exponent.as_str().parse::<u32>().ok()?,
        None => 0,
    };

    10i32.checked_pow(exponent)?.checked_mul(base)
}

/// Scans the whole source, returning every token up to and including EOF.
/// Comments and error tokens are kept in the output.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    tokenize_with_config(source, file, Config::default())
}

pub fn tokenize_with_config(source: &str, file: Option<String>, config: Config) -> Vec<Token> {
    let mut scanner = Scanner::with_config(source.chars(), file, config);
    let mut tokens = vec![];

    loop {
        let token = scanner.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
