//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance stamped with a line number

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's payload (`TokenValue`)
/// * `$line` - The 1-based line the lexeme started on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerConst, TokenValue::Integer(42), 3);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
        }
    };
    ($kind:expr, $line:expr) => {
        Token {
            kind: $kind,
            value: TokenValue::None,
            line: $line,
        }
    };
}
