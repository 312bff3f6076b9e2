//! Syntax analysis module.
//!
//! This module contains a predictive recursive-descent parser with a single
//! token of lookahead, pulling tokens from the scanner on demand. It handles:
//!
//! - Program, block and variable declaration rules
//! - Statement parsing (assignment, read, write, if, while, compound)
//! - Expression parsing on three levels: relational, additive, multiplicative
//! - Transparent skipping of comments between grammar tokens
//!
//! Parsing stops at the first error; there is no recovery.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
