//! Run configuration shared by the scanner and the parser.

/// Longest identifier the language accepts, in characters.
pub const MAX_IDENTIFIER_LEN: usize = 15;

/// How many expression and statement rules may be open at once before the
/// parser gives up with `NestingTooDeep`.
pub const MAX_NESTING_DEPTH: usize = 256;

/// What the scanner does with identifiers longer than [`MAX_IDENTIFIER_LEN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierPolicy {
    /// The lexeme becomes a lexical-error token.
    #[default]
    Reject,
    /// Only the first 15 characters are kept; scanning continues normally.
    Truncate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub identifier_policy: IdentifierPolicy,
    /// Print every trace line to stdout as soon as it is recorded.
    pub echo_trace: bool,
}

impl Config {
    pub fn with_identifier_policy(mut self, policy: IdentifierPolicy) -> Self {
        self.identifier_policy = policy;
        self
    }

    pub fn with_echo_trace(mut self, echo: bool) -> Self {
        self.echo_trace = echo;
        self
    }
}
