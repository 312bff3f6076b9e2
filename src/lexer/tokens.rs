use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("program", TokenKind::Program);
        map.insert("var", TokenKind::Var);
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("read", TokenKind::Read);
        map.insert("write", TokenKind::Write);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("char", TokenKind::Char);
        map.insert("integer", TokenKind::Integer);
        map.insert("boolean", TokenKind::Boolean);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("div", TokenKind::Div);
        map.insert("or", TokenKind::Or);
        map.insert("and", TokenKind::And);
        map.insert("not", TokenKind::Not);
        map
    };

    /// Punctuation that never needs a second character to be classified.
    /// `(` is absent on purpose: it may open a comment.
    pub static ref PUNCTUATION_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Dash);
        map.insert('*', TokenKind::Star);
        map.insert(';', TokenKind::Semicolon);
        map.insert(',', TokenKind::Comma);
        map.insert('.', TokenKind::Dot);
        map.insert(')', TokenKind::CloseParen);
        map.insert('=', TokenKind::Equals);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Error,
    Comment,

    Identifier,
    IntegerConst,
    CharConst,

    // Reserved
    Program,
    Var,
    Begin,
    End,
    Read,
    Write,
    If,
    Then,
    Else,
    While,
    Do,
    Char,
    Integer,
    Boolean,
    True,
    False,
    Div,
    Or,
    And,
    Not,

    Semicolon,
    Comma,
    Colon,
    Dot,
    Assignment, // :=
    OpenParen,
    CloseParen,

    Plus,
    Dash,
    Star,

    Equals,    // =
    NotEquals, // <>
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
}

impl TokenKind {
    /// Whether tokens of this kind carry a payload.
    pub fn has_value(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::IntegerConst | TokenKind::CharConst
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            TokenKind::EOF => "end of file",
            TokenKind::Error => "lexical error",
            TokenKind::Comment => "comment",
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerConst => "integer constant",
            TokenKind::CharConst => "char constant",
            TokenKind::Program => "program",
            TokenKind::Var => "var",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::Read => "read",
            TokenKind::Write => "write",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Char => "char",
            TokenKind::Integer => "integer",
            TokenKind::Boolean => "boolean",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Div => "div",
            TokenKind::Or => "or",
            TokenKind::And => "and",
            TokenKind::Not => "not",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            TokenKind::Assignment => ":=",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Equals => "=",
            TokenKind::NotEquals => "<>",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
        };

        write!(f, "{}", text)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenValue {
    None,
    Integer(i32),
    Identifier(String),
    Char(char),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::None => write!(f, ""),
            TokenValue::Integer(value) => write!(f, "{}", value),
            TokenValue::Identifier(name) => write!(f, "{}", name),
            TokenValue::Char(ch) => write!(f, "{}", ch),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// 1-based line on which the lexeme started.
    pub line: u32,
}

impl Token {
    pub fn integer(&self) -> Option<i32> {
        match (self.kind, &self.value) {
            (TokenKind::IntegerConst, TokenValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        match (self.kind, &self.value) {
            (TokenKind::Identifier, TokenValue::Identifier(name)) => Some(name),
            _ => None,
        }
    }

    pub fn char_value(&self) -> Option<char> {
        match (self.kind, &self.value) {
            (TokenKind::CharConst, TokenValue::Char(ch)) => Some(*ch),
            _ => None,
        }
    }

    /// One line of the diagnostic trace for this token.
    pub fn trace_line(&self) -> String {
        if self.kind.has_value() {
            format!("{:>3}: {} : {}", self.line, self.kind, self.value)
        } else {
            format!("{:>3}: {}", self.line, self.kind)
        }
    }
}
