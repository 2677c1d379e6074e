//! Error types for sqlshape

use miette::Diagnostic;
use thiserror::Error;

use crate::dialect::KNOWN_DIALECTS;

/// Result type alias for sqlshape operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sqlshape
///
/// Only configuration problems are errors. Anything odd about the SQL text
/// itself degrades into some output instead.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown SQL dialect: {name}")]
    #[diagnostic(code(sqlshape::unknown_dialect))]
    UnknownDialect {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("invalid option: {message}")]
    #[diagnostic(code(sqlshape::invalid_option))]
    InvalidOption { message: String },
}

impl Error {
    pub(crate) fn unknown_dialect(name: &str) -> Self {
        Error::UnknownDialect {
            name: name.to_string(),
            help: Some(format!("known dialects: {}", KNOWN_DIALECTS.join(", "))),
        }
    }
}
