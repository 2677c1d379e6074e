//! SQL dialect configuration
//!
//! A dialect is plain data: word lists, bracket pairs, quoting styles and
//! placeholder markers, plus an optional hook that may reclassify tokens.
//! The lexer and formatter never branch on the dialect name.

pub mod spark;
pub mod standard;

use std::fmt;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::lexer::cursor::TokenOverride;
use crate::lexer::reserved::ReservedIndex;

/// Names accepted by [`lookup`]
pub const KNOWN_DIALECTS: &[&str] = &["sql", "standard", "spark"];

/// Operators every dialect understands, on top of its own lexicon
const BASE_OPERATORS: &[&str] = &["<>", "<=", ">="];

/// How a quoted literal is delimited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteStyle {
    /// Case-insensitive letter in front of the opening quote (`N'...'`)
    pub prefix: Option<char>,
    pub open: char,
    pub close: char,
    /// `\x` skips the escaped character
    pub backslash_escapes: bool,
    /// Directly after a close, this character continues the same literal
    pub continuation: char,
}

impl QuoteStyle {
    /// `"..."`
    pub const DOUBLE: QuoteStyle = QuoteStyle::symmetric('"', true);
    /// `'...'`
    pub const SINGLE: QuoteStyle = QuoteStyle::symmetric('\'', true);
    /// `` `...` ``
    pub const BACKTICK: QuoteStyle = QuoteStyle::symmetric('`', false);
    /// `N'...'`
    pub const NATIONAL: QuoteStyle = QuoteStyle {
        prefix: Some('N'),
        ..QuoteStyle::SINGLE
    };
    /// `[...]`, with `]]` as an escaped bracket
    pub const BRACKET: QuoteStyle = QuoteStyle {
        prefix: None,
        open: '[',
        close: ']',
        backslash_escapes: false,
        continuation: ']',
    };
    /// `{...}`
    pub const BRACE: QuoteStyle = QuoteStyle {
        prefix: None,
        open: '{',
        close: '}',
        backslash_escapes: false,
        continuation: '{',
    };

    const fn symmetric(quote: char, backslash_escapes: bool) -> Self {
        QuoteStyle {
            prefix: None,
            open: quote,
            close: quote,
            backslash_escapes,
            continuation: quote,
        }
    }
}

/// Static description of a SQL dialect
#[derive(Clone, Copy)]
pub struct DialectConfig {
    pub name: &'static str,
    pub reserved_words: &'static [&'static str],
    pub reserved_top_level_words: &'static [&'static str],
    pub reserved_top_level_words_no_indent: &'static [&'static str],
    pub reserved_newline_words: &'static [&'static str],
    pub string_types: &'static [QuoteStyle],
    pub open_parens: &'static [&'static str],
    pub close_parens: &'static [&'static str],
    pub indexed_placeholder_types: &'static [char],
    pub named_placeholder_types: &'static [char],
    pub line_comment_types: &'static [&'static str],
    pub block_comment_types: &'static [(&'static str, &'static str)],
    pub operators: &'static [&'static str],
    pub special_word_chars: &'static [char],
    pub token_override: Option<TokenOverride>,
}

impl fmt::Debug for DialectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialectConfig")
            .field("name", &self.name)
            .field("open_parens", &self.open_parens)
            .field("close_parens", &self.close_parens)
            .field("string_types", &self.string_types)
            .field("has_token_override", &self.token_override.is_some())
            .finish_non_exhaustive()
    }
}

impl DialectConfig {
    /// Characters that may appear inside a bare word
    pub fn is_word_char(&self, c: char) -> bool {
        c.is_alphanumeric() || c == '_' || self.special_word_chars.contains(&c)
    }
}

/// A dialect ready for lexing: its config plus lookup tables derived from it
#[derive(Debug)]
pub struct Dialect {
    config: &'static DialectConfig,
    reserved: ReservedIndex,
    operators: Vec<&'static str>,
}

impl Dialect {
    pub fn new(config: &'static DialectConfig) -> Self {
        let mut operators: Vec<&'static str> = BASE_OPERATORS
            .iter()
            .chain(config.operators)
            .copied()
            .collect();
        operators.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        operators.dedup();

        Self {
            config,
            reserved: ReservedIndex::new(config),
            operators,
        }
    }

    pub fn config(&self) -> &'static DialectConfig {
        self.config
    }

    pub fn name(&self) -> &'static str {
        self.config.name
    }

    pub(crate) fn reserved(&self) -> &ReservedIndex {
        &self.reserved
    }

    /// Multi-character operators, longest first
    pub(crate) fn operators(&self) -> &[&'static str] {
        &self.operators
    }
}

/// Select a dialect by name (case-insensitive)
pub fn lookup(name: &str) -> Result<&'static Dialect> {
    static STANDARD: OnceLock<Dialect> = OnceLock::new();
    static SPARK: OnceLock<Dialect> = OnceLock::new();

    match name.trim().to_ascii_lowercase().as_str() {
        "sql" | "standard" => Ok(STANDARD.get_or_init(|| Dialect::new(&standard::CONFIG))),
        "spark" => Ok(SPARK.get_or_init(|| Dialect::new(&spark::CONFIG))),
        _ => Err(Error::unknown_dialect(name)),
    }
}
