//! Formatting options
//!
//! Options are plain data so callers can load them from a settings file:
//!
//! ```
//! let options: sqlshape::FormatOptions =
//!     serde_json::from_str(r#"{ "dialect": "spark", "keyword_case": "upper" }"#).unwrap();
//! assert_eq!(options.line_width, 50);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::formatter::rules::{DEFAULT_INDENT, DEFAULT_LINE_WIDTH};

/// How reserved words are cased in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCase {
    /// Keep the source spelling
    #[default]
    Preserve,
    Upper,
    Lower,
}

/// Values bound to placeholders
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Positional values for `?` and `?N`
    pub indexed: Vec<String>,
    /// Values for `$name`, `@name`, `:name` and their quoted forms
    pub named: HashMap<String, String>,
}

impl Params {
    pub fn is_empty(&self) -> bool {
        self.indexed.is_empty() && self.named.is_empty()
    }

    pub fn with_indexed<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indexed.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn with_named(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Dialect name, see [`crate::dialect::KNOWN_DIALECTS`]
    pub dialect: String,
    pub keyword_case: KeywordCase,
    /// One indentation level
    pub indent: String,
    /// Widest parenthesized group that is kept on one line
    pub line_width: usize,
    /// Newlines written after each `;`
    pub lines_between_queries: usize,
    pub params: Params,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            dialect: "sql".to_string(),
            keyword_case: KeywordCase::Preserve,
            indent: DEFAULT_INDENT.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
            lines_between_queries: 1,
            params: Params::default(),
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = dialect.into();
        self
    }

    pub fn with_keyword_case(mut self, keyword_case: KeywordCase) -> Self {
        self.keyword_case = keyword_case;
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_lines_between_queries(mut self, lines: usize) -> Self {
        self.lines_between_queries = lines;
        self
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Reject options that would change the content of the query
    pub fn validate(&self) -> Result<()> {
        if !self.indent.chars().all(char::is_whitespace) {
            return Err(Error::InvalidOption {
                message: format!("indent must be whitespace only, got {:?}", self.indent),
            });
        }
        Ok(())
    }
}
