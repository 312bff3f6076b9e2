use std::collections::HashMap;

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum OperatorClass {
    /// Comparisons plus `and`/`or`, allowed once per expression
    Relational,
    Additive,
    Multiplicative,
}

pub type StmtHandler<I> = fn(&mut Parser<I>) -> Result<(), Error>;

pub fn create_token_lookups<I: Iterator<Item = char>>(parser: &mut Parser<I>) {
    // Relational
    parser.operator(TokenKind::Equals, OperatorClass::Relational);
    parser.operator(TokenKind::NotEquals, OperatorClass::Relational);
    parser.operator(TokenKind::Less, OperatorClass::Relational);
    parser.operator(TokenKind::LessEquals, OperatorClass::Relational);
    parser.operator(TokenKind::Greater, OperatorClass::Relational);
    parser.operator(TokenKind::GreaterEquals, OperatorClass::Relational);
    parser.operator(TokenKind::And, OperatorClass::Relational);
    parser.operator(TokenKind::Or, OperatorClass::Relational);

    // Additive and multiplicative
    parser.operator(TokenKind::Plus, OperatorClass::Additive);
    parser.operator(TokenKind::Dash, OperatorClass::Additive);
    parser.operator(TokenKind::Star, OperatorClass::Multiplicative);
    parser.operator(TokenKind::Div, OperatorClass::Multiplicative);

    // Statements
    parser.stmt(TokenKind::Identifier, parse_assign_stmt);
    parser.stmt(TokenKind::Read, parse_read_stmt);
    parser.stmt(TokenKind::Write, parse_write_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Begin, parse_stmt_section);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup<I> = HashMap<TokenKind, StmtHandler<I>>;
pub type OperatorLookup = HashMap<TokenKind, OperatorClass>;
