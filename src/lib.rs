#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::{
    config::Config,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::Scanner,
    parser::parser::{parse, ParseSummary},
};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based source line and the name of the file it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

/// Result of a full run: the trace recorded up to the end (or the error)
/// and the outcome.
pub struct Analysis {
    pub trace: Vec<String>,
    pub result: Result<ParseSummary, Error>,
}

/// Scans and parses `source` in one pass.
pub fn analyze(source: &str, file: Option<String>, config: Config) -> Analysis {
    let (parser, result) = parse(Scanner::with_config(source.chars(), file, config));

    Analysis {
        trace: parser.trace().to_vec(),
        result,
    }
}

/// Text of the given 1-based line, without its line terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.trim_end_matches('\r'))
}


/// Renders a fatal diagnostic:
///
/// ```text
/// Error: UnexpectedToken (expected `.`, found `end of file`)
/// -> final.pzk:20
///    |
/// 20 | end
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let line_string = position.0.to_string();
    let padding = line_string.len() + 2;

    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    output.push_str(&format!("-> {}\n", position));

    if let Some(line_text) = get_line(source, position.0) {
        output.push_str(&format!("{:>padding$}\n", "|"));
        output.push_str(&format!("{} | {}\n", line_string, remove_starting_whitespace(line_text)));
    }

    output
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> &str {
    string.trim_start_matches([' ', '\t']).trim_end()
}
