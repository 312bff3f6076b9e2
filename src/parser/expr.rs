use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::OperatorClass, parser::Parser};

fn at_operator<I: Iterator<Item = char>>(parser: &Parser<I>, class: OperatorClass) -> bool {
    parser.operator_class(parser.current_token_kind()) == Some(class)
}

/// `simple_expr [ relop simple_expr ]`, at most one relational operator.
pub fn parse_expr<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<(), Error> {
    parser.nested(|parser| {
        parse_simple_expr(parser)?;

        if at_operator(parser, OperatorClass::Relational) {
            parser.accept_current()?;
            parse_simple_expr(parser)?;
        }

        Ok(())
    })
}

pub fn parse_simple_expr<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<(), Error> {
    parse_term(parser)?;

    while at_operator(parser, OperatorClass::Additive) {
        parser.accept_current()?;
        parse_term(parser)?;
    }

    Ok(())
}

pub fn parse_term<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<(), Error> {
    parse_factor(parser)?;

    while at_operator(parser, OperatorClass::Multiplicative) {
        parser.accept_current()?;
        parse_factor(parser)?;
    }

    Ok(())
}

// `(` and `not` recurse, so every factor counts towards the nesting limit.
pub fn parse_factor<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<(), Error> {
    parser.nested(parse_factor_body)
}

fn parse_factor_body<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<(), Error> {
    let found = parser.current_token_kind();

    match found {
        TokenKind::Identifier
        | TokenKind::IntegerConst
        | TokenKind::CharConst
        | TokenKind::True
        | TokenKind::False => {
            parser.accept(found)?;
        }
        TokenKind::OpenParen => {
            parser.accept(TokenKind::OpenParen)?;
            parse_expr(parser)?;
            parser.accept(TokenKind::CloseParen)?;
        }
        TokenKind::Not => {
            parser.accept(TokenKind::Not)?;
            parse_factor(parser)?;
        }
        _ => return Err(parser.error(ErrorImpl::ExpectedFactor { found })),
    }

    Ok(())
}
