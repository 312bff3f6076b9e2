//! Error types and error handling for the front end.
//!
//! This module defines the error types produced by a compilation run:
//!
//! - Error structures carrying the source line they refer to
//! - Syntax error variants raised by the parser
//! - Lexical issue variants explaining error tokens from the scanner
//! - Tips used when rendering a diagnostic

pub mod errors;

#[cfg(test)]
mod tests;
