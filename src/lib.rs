//! Formatter and call checker for a small SQL-like scripting dialect.
//!
//! Source text flows through four stages:
//! - [`preprocessor`] expands `#define` macros line by line.
//! - [`lexer`] turns the expanded text into tokens.
//! - [`table`] collects the first call of every function (pass 1).
//! - [`formatter`] renders one statement per line and inlines diagnostics
//!   for calls that disagree with the table (pass 2).

pub mod call;
pub mod diagnostic;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod preprocessor;
pub mod table;
pub mod token;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

pub use diagnostic::Diagnostic;
pub use error::{Error, Result};
pub use formatter::{Formatted, Formatter};
pub use lexer::ScriptLexer;
pub use preprocessor::{MacroTable, Preprocessor};
pub use table::{FunctionSignature, FunctionTable};
pub use token::{Token, TokenKind};

/// Suffix appended to the input path to name the output file.
pub const OUTPUT_SUFFIX: &str = ".formatted";

/// Run the whole pipeline over a source string.
pub fn format_source(source: &str) -> Result<Formatted> {
    let (expanded, _) = Preprocessor::new().process(source);
    let tokens = ScriptLexer::tokenize(&expanded)?;
    let table = FunctionTable::build(&tokens);
    Ok(Formatter::new(&table).format(&tokens))
}

/// Path the formatted output of `input` is written to.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Format a file and write the result next to it, returning the output path.
pub fn format_file(input: &Path) -> Result<PathBuf> {
    let bytes = fs::read(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    // Invalid UTF-8 becomes U+FFFD, which the lexer drops like any other
    // unrecognised character.
    let source = String::from_utf8_lossy(&bytes);

    let formatted = format_source(&source)?;
    let output = output_path(input);
    fs::write(&output, &formatted.text).map_err(|source| Error::Write {
        path: output.clone(),
        source,
    })?;

    info!(
        input = %input.display(),
        output = %output.display(),
        diagnostics = formatted.diagnostics.len(),
        "formatted file"
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_with_macros() {
        let source = "#define ADD add\nADD(1, 2)\nbegin\nADD(3)\nend\n";
        let out = format_source(source).unwrap();
        assert_eq!(
            out.text,
            "add (\n);\nbegin\nadd (\n\
             -- Error: Function 'add' at line 1 expects 2 arguments, but 1 were provided.\n\
             );\nend\n"
        );
    }

    #[test]
    fn test_macro_defined_late_leaves_earlier_text() {
        let source = "F(1)\n#define F g\nF(1)\n";
        let out = format_source(source).unwrap();
        assert_eq!(out.text, "F (\n);\ng (\n);\n");
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn test_format_source_is_deterministic() {
        let source = "#define T users\ninsert T values (1, \"a\")\ncount(T)\ncount(T, 2\n";
        assert_eq!(format_source(source).unwrap(), format_source(source).unwrap());
    }

    #[test]
    fn test_replacement_characters_are_dropped() {
        let source = String::from_utf8_lossy(b"select caf\xe9\nfoo(1)\n");
        let out = format_source(&source).unwrap();
        assert_eq!(out.text, "select\ncaf;\nfoo (\n);\n");
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("dir/script.sql")),
            PathBuf::from("dir/script.sql.formatted")
        );
    }
}
