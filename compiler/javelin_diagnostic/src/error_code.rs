//! Error codes for every problem the front end reports.

use std::fmt;

/// Error codes.
///
/// Format: J#### where the first digit indicates the phase:
/// - J0xxx: Lexer problems
/// - J1xxx: Parser problems
/// - J9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Lexer (J0xxx)
    /// Invalid character in source
    J0001,
    /// Unterminated string literal
    J0002,
    /// Unterminated character literal
    J0003,
    /// Unterminated block comment
    J0004,
    /// Malformed number literal
    J0005,

    // Parser (J1xxx)
    /// Syntax error: unexpected token
    J1001,
    /// Syntax error: unexpected end of input
    J1002,
    /// Construct requires a higher source level
    J1003,
    /// Cast to something that is not a type
    J1004,
    /// Token discarded to resume parsing
    J1005,
    /// Recovery gave up before the end of input
    J1006,

    // Internal (J9xxx)
    /// Parser invariant violated
    J9001,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::J0001 => "J0001",
            ErrorCode::J0002 => "J0002",
            ErrorCode::J0003 => "J0003",
            ErrorCode::J0004 => "J0004",
            ErrorCode::J0005 => "J0005",
            ErrorCode::J1001 => "J1001",
            ErrorCode::J1002 => "J1002",
            ErrorCode::J1003 => "J1003",
            ErrorCode::J1004 => "J1004",
            ErrorCode::J1005 => "J1005",
            ErrorCode::J1006 => "J1006",
            ErrorCode::J9001 => "J9001",
        }
    }

    /// Short summary, used by emitters.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::J0001 => "invalid character",
            ErrorCode::J0002 => "unterminated string literal",
            ErrorCode::J0003 => "unterminated character literal",
            ErrorCode::J0004 => "unterminated comment",
            ErrorCode::J0005 => "malformed number literal",
            ErrorCode::J1001 => "syntax error on token",
            ErrorCode::J1002 => "unexpected end of input",
            ErrorCode::J1003 => "construct requires a higher source level",
            ErrorCode::J1004 => "cast target is not a type",
            ErrorCode::J1005 => "token discarded",
            ErrorCode::J1006 => "syntax recovery stopped here",
            ErrorCode::J9001 => "internal parser error",
        }
    }

    pub const fn is_lexical(self) -> bool {
        matches!(
            self,
            ErrorCode::J0001
                | ErrorCode::J0002
                | ErrorCode::J0003
                | ErrorCode::J0004
                | ErrorCode::J0005
        )
    }

    /// Alias names for the structural problems, matching their role.
    pub const SYNTAX_ERROR: ErrorCode = ErrorCode::J1001;
    pub const UNEXPECTED_EOF: ErrorCode = ErrorCode::J1002;
    pub const SOURCE_LEVEL: ErrorCode = ErrorCode::J1003;
    pub const INVALID_CAST: ErrorCode = ErrorCode::J1004;
    pub const TOKEN_DISCARDED: ErrorCode = ErrorCode::J1005;
    pub const RECOVERY_HALTED: ErrorCode = ErrorCode::J1006;
    pub const INTERNAL: ErrorCode = ErrorCode::J9001;
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_format_with_prefix() {
        assert_eq!(ErrorCode::J1001.to_string(), "J1001");
        assert_eq!(ErrorCode::SYNTAX_ERROR, ErrorCode::J1001);
    }

    #[test]
    fn lexical_codes_are_phase_zero() {
        assert!(ErrorCode::J0003.is_lexical());
        assert!(!ErrorCode::J1001.is_lexical());
        assert!(!ErrorCode::J9001.is_lexical());
    }
}
