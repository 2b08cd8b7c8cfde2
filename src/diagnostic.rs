use std::fmt;

/// Problem found while formatting. Rendered inline as a comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    MissingParen {
        name: String,
        line: usize,
    },
    ArityMismatch {
        name: String,
        /// Line of the call the expected count was taken from
        defined_at: usize,
        expected: usize,
        actual: usize,
    },
    UnknownFunction {
        name: String,
        line: usize,
    },
}

impl Diagnostic {
    /// Comment line as it appears in formatted output
    pub fn to_comment(&self) -> String {
        format!("-- Error: {self}")
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingParen { .. } => {
                write!(f, "Missing closing parenthesis for function call.")
            }
            Diagnostic::ArityMismatch {
                name,
                defined_at,
                expected,
                actual,
            } => write!(
                f,
                "Function '{name}' at line {defined_at} expects {expected} arguments, but {actual} were provided."
            ),
            Diagnostic::UnknownFunction { name, line } => {
                write!(f, "Unknown function '{name}' at line {line}.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_text() {
        let missing = Diagnostic::MissingParen {
            name: "foo".to_string(),
            line: 1,
        };
        assert_eq!(
            missing.to_comment(),
            "-- Error: Missing closing parenthesis for function call."
        );

        let arity = Diagnostic::ArityMismatch {
            name: "foo".to_string(),
            defined_at: 1,
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            arity.to_comment(),
            "-- Error: Function 'foo' at line 1 expects 2 arguments, but 1 were provided."
        );

        let unknown = Diagnostic::UnknownFunction {
            name: "bar".to_string(),
            line: 4,
        };
        assert_eq!(unknown.to_string(), "Unknown function 'bar' at line 4.");
    }
}
