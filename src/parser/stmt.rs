use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::parse_expr, parser::Parser};

/// `'program' identifier ';' block '.'`, returning the final `.`.
///
/// Comments before `program` and after `.` never reach this rule: the
/// parser skips them while advancing.
pub fn parse_program_rule<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<Token, Error> {
    parser.accept(TokenKind::Program)?;
    parser.accept(TokenKind::Identifier)?;
    parser.accept(TokenKind::Semicolon)?;
    parse_block(parser)?;
    parser.accept(TokenKind::Dot)
}

pub fn parse_block<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<(), Error> {
    parse_var_section(parser)?;
    parse_stmt_section(parser)
}

pub fn parse_var_section<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<(), Error> {
    if parser.current_token_kind() != TokenKind::Var {
        return Ok(());
    }

    parser.accept(TokenKind::Var)?;
    parse_decl(parser)?;
    parser.accept(TokenKind::Semicolon)?;

    while parser.current_token_kind() == TokenKind::Identifier {
        parse_decl(parser)?;
        parser.accept(TokenKind::Semicolon)?;
    }

    Ok(())
}

/// `identifier { ',' identifier } ':' type`
pub fn parse_decl<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<(), Error> {
    parse_identifier_list(parser)?;
    parser.accept(TokenKind::Colon)?;
    parse_type(parser)
}

pub fn parse_type<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<(), Error> {
    let found = parser.current_token_kind();

    match found {
        TokenKind::Integer | TokenKind::Boolean | TokenKind::Char => {
            parser.accept(found)?;
            Ok(())
        }
        _ => Err(parser.error(ErrorImpl::ExpectedType { found })),
    }
}

fn parse_identifier_list<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<(), Error> {
    parser.accept(TokenKind::Identifier)?;

    while parser.current_token_kind() == TokenKind::Comma {
        parser.accept(TokenKind::Comma)?;
        parser.accept(TokenKind::Identifier)?;
    }

    Ok(())
}

/// `'begin' stmt { ';' stmt } 'end'`
pub fn parse_stmt_section<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<(), Error> {
    parser.accept(TokenKind::Begin)?;
    parse_stmt(parser)?;

    while parser.current_token_kind() == TokenKind::Semicolon {
        parser.accept(TokenKind::Semicolon)?;
        parse_stmt(parser)?;
    }

    parser.accept(TokenKind::End)?;
    Ok(())
}

/// Dispatches on the lookahead. Anything that does not start a known
/// statement is parsed as a nested `begin ... end`, so the reported error
/// for a bad statement start is "expected begin".
pub fn parse_stmt<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<(), Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    parser.nested(|parser| match handler {
        Some(handler) => handler(parser),
        None => parse_stmt_section(parser),
    })
}

pub fn parse_assign_stmt<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<(), Error> {
    parser.accept(TokenKind::Identifier)?;
    parser.accept(TokenKind::Assignment)?;
    parse_expr(parser)
}

pub fn parse_read_stmt<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<(), Error> {
    parser.accept(TokenKind::Read)?;
    parser.accept(TokenKind::OpenParen)?;
    parse_identifier_list(parser)?;
    parser.accept(TokenKind::CloseParen)?;
    Ok(())
}

pub fn parse_write_stmt<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<(), Error> {
    parser.accept(TokenKind::Write)?;
    parser.accept(TokenKind::OpenParen)?;
    parse_identifier_list(parser)?;
    parser.accept(TokenKind::CloseParen)?;
    Ok(())
}

pub fn parse_if_stmt<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<(), Error> {
    parser.accept(TokenKind::If)?;
    parse_expr(parser)?;
    parser.accept(TokenKind::Then)?;
    parse_stmt(parser)?;

    if parser.current_token_kind() == TokenKind::Else {
        parser.accept(TokenKind::Else)?;
        parse_stmt(parser)?;
    }

    Ok(())
}

pub fn parse_while_stmt<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<(), Error> {
    parser.accept(TokenKind::While)?;
    parse_expr(parser)?;
    parser.accept(TokenKind::Do)?;
    parse_stmt(parser)
}
