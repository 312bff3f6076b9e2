//! Lexical analysis module for the front end.
//!
//! This module contains the scanner that turns a character stream into
//! tokens, one per request from the parser. It handles:
//!
//! - Whitespace skipping and line counting
//! - `(* ... *)` block comments, returned as comment tokens
//! - Char literals, integer literals with a `d` exponent suffix
//! - Keyword lookup and identifier length limits
//! - Malformed lexemes, returned as error tokens instead of failing

pub mod lexer;
pub mod tokens;
