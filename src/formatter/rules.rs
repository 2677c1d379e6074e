//! Formatting rules
//!
//! This module defines the defaults and the text transformations applied to
//! keywords:
//! - Indentation: 2 spaces
//! - Inline groups: up to 50 characters
//! - Keywords: source case unless asked otherwise, inner whitespace collapsed

use crate::config::KeywordCase;
use crate::lexer::Token;

/// Widest parenthesized group kept on one line
pub const DEFAULT_LINE_WIDTH: usize = 50;

/// One indentation level
pub const DEFAULT_INDENT: &str = "  ";

/// Collapse the whitespace inside a multi-word phrase to single spaces
pub fn equalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render a reserved word or keyword paren
pub fn format_keyword(text: &str, case: KeywordCase) -> String {
    let text = equalize_whitespace(text);
    match case {
        KeywordCase::Preserve => text,
        KeywordCase::Upper => text.to_uppercase(),
        KeywordCase::Lower => text.to_lowercase(),
    }
}

/// Text of a token as it appears in the output
pub fn token_text(token: &Token, case: KeywordCase) -> String {
    if token.kind.is_reserved() || token.is_keyword_paren() {
        format_keyword(&token.text, case)
    } else {
        token.text.clone()
    }
}

/// Width a token occupies once printed, ignoring case changes
pub fn display_width(token: &Token) -> usize {
    if token.kind.is_reserved() || token.is_keyword_paren() {
        equalize_whitespace(&token.text).chars().count()
    } else {
        token.text.chars().count()
    }
}
