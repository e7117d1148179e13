//! Stable error codes for switch diagnostics.

use std::fmt;

/// Stable, searchable error code.
///
/// Codes in the `E07xx` range belong to pattern analysis.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// The case patterns do not cover every value of the scrutinee type.
    NonExhaustiveCases,
    /// A case pattern matches nothing that earlier cases have not already
    /// matched.
    UnreachableCase,
}

impl ErrorCode {
    /// The code string as shown to users.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NonExhaustiveCases => "E0701",
            ErrorCode::UnreachableCase => "E0702",
        }
    }

    /// One-line description for indexes and documentation.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::NonExhaustiveCases => "case patterns are not exhaustive",
            ErrorCode::UnreachableCase => "case is unreachable",
        }
    }
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
    fn codes_are_stable() {
        assert_eq!(ErrorCode::NonExhaustiveCases.to_string(), "E0701");
        assert_eq!(ErrorCode::UnreachableCase.to_string(), "E0702");
    }
}
