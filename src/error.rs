use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::lexer::Rule;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal failures. Problems in the script itself are never raised here; they
/// are reported as [`crate::Diagnostic`]s inside the formatted output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot open file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write to file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to tokenize input")]
    Lex(#[source] Box<pest::error::Error<Rule>>),
}

impl From<pest::error::Error<Rule>> for Error {
    fn from(err: pest::error::Error<Rule>) -> Self {
        Self::Lex(Box::new(err))
    }
}
