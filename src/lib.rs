//! sqlshape - A dialect-configurable SQL formatter
//!
//! This library re-indents SQL text without parsing it: a dialect-driven
//! tokenizer classifies the input and a single-pass layout engine turns the
//! token stream into canonical multi-line text.
//!
//! ```
//! use sqlshape::{format, FormatOptions};
//!
//! let sql = format("select a, b from t where x = 1", &FormatOptions::default()).unwrap();
//! assert_eq!(sql, "select\n  a,\n  b\nfrom\n  t\nwhere\n  x = 1");
//! ```

pub mod config;
pub mod dialect;
pub mod error;
pub mod formatter;
pub mod lexer;

pub use config::{FormatOptions, KeywordCase, Params};
pub use dialect::Dialect;
pub use error::{Error, Result};
pub use formatter::format_sql;

/// Format SQL string and return the formatted result
pub fn format(input: &str, options: &FormatOptions) -> Result<String> {
    format_sql(input, options)
}

/// Check if SQL string is already formatted
pub fn check(input: &str, options: &FormatOptions) -> Result<bool> {
    let formatted = format_sql(input, options)?;
    Ok(formatted == input)
}
