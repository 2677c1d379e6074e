//! SQL tokenization
//!
//! This module breaks SQL input into classified tokens. Classification is
//! driven entirely by the dialect tables; nothing here knows about a specific
//! dialect.

pub mod cursor;
pub(crate) mod reserved;
pub(crate) mod scan;
pub mod token;

pub use cursor::{apply_overrides, TokenCursor, TokenOverride};
pub use token::{Span, Token, TokenKind};

use crate::dialect::Dialect;

/// Lazy token stream over a SQL string
///
/// Yields every token including whitespace, then a single [`TokenKind::End`].
/// Cloning a lexer restarts from the clone's position.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    dialect: &'a Dialect,
    pos: usize,
    /// Kind of the last non-whitespace, non-comment token, and whether it was `.`
    previous: Option<(TokenKind, bool)>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, dialect: &'a Dialect) -> Self {
        Self {
            input,
            dialect,
            pos: 0,
            previous: None,
            finished: false,
        }
    }

    fn after_dot(&self) -> bool {
        matches!(self.previous, Some((_, true)))
    }

    fn after_value(&self) -> bool {
        self.previous.is_some_and(|(kind, _)| kind.is_value())
    }

    /// Classify the token at the current position as (kind, byte length)
    fn classify(&self, rest: &str) -> (TokenKind, usize) {
        let config = self.dialect.config();

        let ws = scan::whitespace(rest);
        if ws > 0 {
            return (TokenKind::Whitespace, ws);
        }
        if let Some(len) = scan::line_comment(rest, config.line_comment_types) {
            return (TokenKind::LineComment, len);
        }
        if let Some(len) = scan::block_comment(rest, config.block_comment_types) {
            return (TokenKind::BlockComment, len);
        }
        if let Some(len) = config
            .string_types
            .iter()
            .find_map(|style| scan::quoted(rest, style))
        {
            return (TokenKind::QuotedString, len);
        }
        if let Some(len) = scan::named_placeholder(rest, config) {
            return (TokenKind::NamedPlaceholder, len);
        }
        if let Some(len) = scan::indexed_placeholder(rest, config) {
            return (TokenKind::IndexedPlaceholder, len);
        }
        if let Some(len) = scan::paren(rest, config.open_parens, config) {
            return (TokenKind::OpenParen, len);
        }
        if let Some(len) = scan::paren(rest, config.close_parens, config) {
            return (TokenKind::CloseParen, len);
        }
        if let Some(len) = scan::number(rest, !self.after_value(), config) {
            return (TokenKind::Number, len);
        }
        if !self.after_dot() {
            if let Some(found) = self.dialect.reserved().longest_match(rest) {
                return found;
            }
        }
        if let Some(len) = scan::operator(rest, self.dialect.operators()) {
            return (TokenKind::Operator, len);
        }
        let len = scan::word(rest, config);
        if len > 0 {
            return (TokenKind::Word, len);
        }

        let len = rest.chars().next().map_or(rest.len(), char::len_utf8);
        (TokenKind::Operator, len)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let rest = &self.input[self.pos..];
        if rest.is_empty() {
            self.finished = true;
            let end = self.input.len();
            return Some(Token::new(TokenKind::End, "", Span::new(end, end)));
        }

        let (kind, len) = self.classify(rest);
        let span = Span::new(self.pos, self.pos + len);
        let text = &rest[..len];
        self.pos = span.end;

        if kind != TokenKind::Whitespace && !kind.is_comment() {
            self.previous = Some((kind, kind == TokenKind::Operator && text == "."));
        }

        Some(Token::new(kind, text, span))
    }
}

/// Tokenize SQL input, dropping whitespace
///
/// The returned vector always ends with an [`TokenKind::End`] token.
pub fn tokenize(input: &str, dialect: &Dialect) -> Vec<Token> {
    Lexer::new(input, dialect)
        .filter(|token| token.kind != TokenKind::Whitespace)
        .collect()
}
